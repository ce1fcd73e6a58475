use log::{debug, trace};

use gtcalc_core::OutputBuffer;

use crate::codon::{STOP_CODON_MARKER, translate_codon};

/// Translate RNA into protein using the standard genetic code.
///
/// Codons are read in frame from the first base. Translation ends at the first
/// stop codon (which is not emitted), when fewer than three bases remain, or
/// once the buffer holds `capacity - 1` residues. An incomplete trailing codon
/// is dropped. Any previous contents of `protein` are discarded.
///
/// Callers wanting another reading frame should slice the input first.
///
/// # Examples
///
/// ```
/// use gtcalc_core::OutputBuffer;
/// use gtcalc_seq::rna_to_protein;
///
/// let mut protein = OutputBuffer::with_capacity(32).unwrap();
/// rna_to_protein(b"AUGGCCUUUUAA", &mut protein);
/// assert_eq!(protein.as_bytes(), b"MAF");
/// ```
pub fn rna_to_protein<T: AsRef<[u8]>>(rna: T, protein: &mut OutputBuffer) {
    let rna = rna.as_ref();
    protein.clear();

    for (i, codon) in rna.chunks_exact(3).enumerate() {
        let amino_acid = translate_codon(&[codon[0], codon[1], codon[2]]);
        if amino_acid == STOP_CODON_MARKER {
            trace!("Stop codon at position {}", i * 3);
            return;
        }

        if !protein.try_push(amino_acid) {
            debug!("Translation truncated at {} residues", protein.len());
            return;
        }
    }
}
