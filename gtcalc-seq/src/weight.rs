use log::debug;

/// Residue masses in Daltons / 10, indexed by `letter - b'A'`.
///
/// Letters that are not one of the 20 standard residues (B, J, O, U, X, Z)
/// hold 0, which doubles as the invalid marker.
#[rustfmt::skip]
pub const RESIDUE_WEIGHTS: [u16; 26] = [
    // A  B    C    D    E    F   G    H    I  J    K    L    M    N  O    P    Q    R    S    T  U    V    W  X    Y  Z
    89, 0, 121, 133, 147, 165, 75, 155, 131, 0, 146, 131, 149, 132, 0, 115, 146, 174, 105, 119, 0, 117, 204, 0, 181, 0,
];

/// Weight of a single residue, or 0 if it is not a standard amino acid.
#[inline]
pub fn residue_weight(residue: u8) -> u16 {
    if residue.is_ascii_uppercase() {
        RESIDUE_WEIGHTS[(residue - b'A') as usize]
    } else {
        0
    }
}

/// Sum of residue weights for a protein sequence, in Daltons / 10.
///
/// Returns 0 for an empty sequence and for any sequence containing a symbol
/// that is not one of the 20 standard residues. Run
/// [`is_valid_protein`](crate::alphabet::is_valid_protein) first to tell those
/// cases apart.
///
/// # Examples
///
/// ```
/// use gtcalc_seq::protein_weight;
///
/// assert_eq!(protein_weight(b"MAF"), 149 + 89 + 165);
/// assert_eq!(protein_weight(b"MAFX"), 0);
/// ```
pub fn protein_weight<T: AsRef<[u8]>>(protein: T) -> u32 {
    let mut sum: u32 = 0;

    for (i, &residue) in protein.as_ref().iter().enumerate() {
        let weight = residue_weight(residue);
        if weight == 0 {
            debug!("Unknown residue {:?} at position {}, weight is 0", residue as char, i);
            return 0;
        }
        sum = sum.saturating_add(weight as u32);
    }

    sum
}
