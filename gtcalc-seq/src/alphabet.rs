#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use gtcalc_core::{GtcError, Result};

/// The symbol alphabets a sequence can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlphabetType {
    /// DNA nucleotides (A, C, G, T)
    Dna,
    /// RNA nucleotides (A, C, G, U)
    Rna,
    /// The 20 standard one-letter amino acid codes
    Protein,
}

impl Display for AlphabetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetType::Dna => write!(f, "dna"),
            AlphabetType::Rna => write!(f, "rna"),
            AlphabetType::Protein => write!(f, "protein"),
        }
    }
}

impl FromStr for AlphabetType {
    type Err = GtcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(AlphabetType::Dna),
            "rna" => Ok(AlphabetType::Rna),
            "protein" => Ok(AlphabetType::Protein),
            _ => Err(GtcError::InvalidAlphabet(s.to_string())),
        }
    }
}

pub const DNA_SYMBOLS: &[u8] = b"ACGT";
pub const RNA_SYMBOLS: &[u8] = b"ACGU";
pub const PROTEIN_SYMBOLS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

const fn membership_array(symbols: &[u8]) -> [bool; 256] {
    let mut arr = [false; 256];
    let mut i = 0;
    while i < symbols.len() {
        arr[symbols[i] as usize] = true;
        i += 1;
    }
    arr
}

/// Lookup tables marking which bytes belong to each alphabet.
/// Only uppercase symbols are members.
const DNA_MEMBERSHIP_ARRAY: [bool; 256] = membership_array(DNA_SYMBOLS);
const RNA_MEMBERSHIP_ARRAY: [bool; 256] = membership_array(RNA_SYMBOLS);
const PROTEIN_MEMBERSHIP_ARRAY: [bool; 256] = membership_array(PROTEIN_SYMBOLS);

impl AlphabetType {
    /// The permitted symbols, in ascending byte order.
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            AlphabetType::Dna => DNA_SYMBOLS,
            AlphabetType::Rna => RNA_SYMBOLS,
            AlphabetType::Protein => PROTEIN_SYMBOLS,
        }
    }

    fn membership_array(&self) -> &'static [bool; 256] {
        match self {
            AlphabetType::Dna => &DNA_MEMBERSHIP_ARRAY,
            AlphabetType::Rna => &RNA_MEMBERSHIP_ARRAY,
            AlphabetType::Protein => &PROTEIN_MEMBERSHIP_ARRAY,
        }
    }

    /// Check whether a single symbol belongs to this alphabet.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.membership_array()[symbol as usize]
    }
}

/// Check that every symbol of `sequence` belongs to `alphabet`.
///
/// An empty sequence is valid. Scanning stops at the first offending symbol.
pub fn is_valid<T: AsRef<[u8]>>(sequence: T, alphabet: AlphabetType) -> bool {
    let membership = alphabet.membership_array();
    sequence.as_ref().iter().all(|&b| membership[b as usize])
}

/// Check that a sequence only contains A, C, G and T.
pub fn is_valid_dna<T: AsRef<[u8]>>(dna: T) -> bool {
    is_valid(dna, AlphabetType::Dna)
}

/// Check that a sequence only contains A, C, G and U.
pub fn is_valid_rna<T: AsRef<[u8]>>(rna: T) -> bool {
    is_valid(rna, AlphabetType::Rna)
}

/// Check that a sequence only contains the 20 standard amino acid codes.
pub fn is_valid_protein<T: AsRef<[u8]>>(protein: T) -> bool {
    is_valid(protein, AlphabetType::Protein)
}

/// Like [`is_valid`], but reports the first offending symbol and its position.
///
/// # Errors
///
/// Returns [`GtcError::InvalidSymbol`] for the first symbol outside `alphabet`.
pub fn check_alphabet<T: AsRef<[u8]>>(sequence: T, alphabet: AlphabetType) -> Result<()> {
    match sequence.as_ref().iter().position(|&b| !alphabet.contains(b)) {
        None => Ok(()),
        Some(position) => Err(GtcError::InvalidSymbol {
            symbol: sequence.as_ref()[position] as char,
            position,
            alphabet: alphabet.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(b"ACGTACGT", true)]
    #[case(b"T", true)]
    #[case(b"", true)]
    #[case(b"AXGT", false)]
    #[case(b"123", false)]
    #[case(b"ACGU", false)]
    #[case(b"acgt", false)]
    fn test_dna_is_valid(#[case] dna: &[u8], #[case] expected: bool) {
        assert_eq!(is_valid_dna(dna), expected);
    }

    #[rstest]
    #[case(b"AUGGCC", true)]
    #[case(b"", true)]
    #[case(b"ATG", false)]
    fn test_rna_is_valid(#[case] rna: &[u8], #[case] expected: bool) {
        assert_eq!(is_valid_rna(rna), expected);
    }

    #[rstest]
    #[case(b"ACDEFGHIKLMNPQRSTVWY", true)]
    #[case(b"MAF", true)]
    #[case(b"", true)]
    #[case(b"MAFX", false)]
    #[case(b"123", false)]
    #[case(b"MAF*", false)]
    #[case(b"BJOUZ", false)]
    fn test_protein_is_valid(#[case] protein: &[u8], #[case] expected: bool) {
        assert_eq!(is_valid_protein(protein), expected);
    }

    #[test]
    fn test_membership_covers_exactly_the_symbols() {
        for alphabet in [AlphabetType::Dna, AlphabetType::Rna, AlphabetType::Protein] {
            let members: Vec<u8> = (0..=255u8).filter(|&b| alphabet.contains(b)).collect();
            assert_eq!(members, alphabet.symbols());
        }
    }

    #[test]
    fn test_check_alphabet_reports_first_offender() {
        assert_eq!(check_alphabet(b"ACGT", AlphabetType::Dna), Ok(()));
        assert_eq!(check_alphabet(b"", AlphabetType::Protein), Ok(()));
        assert_eq!(
            check_alphabet(b"ACXGN", AlphabetType::Dna),
            Err(GtcError::InvalidSymbol {
                symbol: 'X',
                position: 2,
                alphabet: "dna".to_string(),
            })
        );
    }

    #[test]
    fn test_alphabet_type_round_trips_through_str() {
        for alphabet in [AlphabetType::Dna, AlphabetType::Rna, AlphabetType::Protein] {
            assert_eq!(alphabet.to_string().parse::<AlphabetType>(), Ok(alphabet));
        }
        assert_eq!("PROTEIN".parse::<AlphabetType>(), Ok(AlphabetType::Protein));
        assert_eq!(
            "iupac".parse::<AlphabetType>(),
            Err(GtcError::InvalidAlphabet("iupac".to_string()))
        );
    }
}
