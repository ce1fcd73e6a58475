//! Codon indexing and the standard genetic code.
//!
//! A codon is packed into a 6-bit index, two bits per base and first base in
//! the high bits: A=00, C=01, G=10, U=11. The packed index addresses
//! [`CODON_TABLE`] directly.

/// Marker stored in [`CODON_TABLE`] for the three stop codons (UAA, UAG, UGA).
pub const STOP_CODON_MARKER: u8 = b'*';

/// The standard genetic code, indexed by [`codon_index_rna`].
///
/// Rows are grouped by the first base (A, C, G, U), 16 entries each.
#[rustfmt::skip]
pub const CODON_TABLE: [u8; 64] = [
    // AAA  AAC   AAG   AAU   ACA   ACC   ACG   ACU   AGA   AGC   AGG   AGU   AUA   AUC   AUG   AUU
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S', b'I', b'I', b'M', b'I',
    // CAA  CAC   CAG   CAU   CCA   CCC   CCG   CCU   CGA   CGC   CGG   CGU   CUA   CUC   CUG   CUU
    b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P', b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L',
    // GAA  GAC   GAG   GAU   GCA   GCC   GCG   GCU   GGA   GGC   GGG   GGU   GUA   GUC   GUG   GUU
    b'E', b'D', b'E', b'D', b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    // UAA  UAC   UAG   UAU   UCA   UCC   UCG   UCU   UGA   UGC   UGG   UGU   UUA   UUC   UUG   UUU
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C', b'L', b'F', b'L', b'F',
];

/// Map an RNA base to its 2-bit index.
///
/// A=0, C=1, G=2, U=3. Every other byte maps to 0, including DNA `T`.
#[inline]
pub fn base_index_rna(base: u8) -> u8 {
    match base {
        b'C' => 1,
        b'G' => 2,
        b'U' => 3,
        _ => 0,
    }
}

/// Pack three RNA bases into a codon index in `0..64`.
#[inline]
pub fn codon_index_rna(b1: u8, b2: u8, b3: u8) -> u8 {
    (base_index_rna(b1) << 4) | (base_index_rna(b2) << 2) | base_index_rna(b3)
}

/// Look up the residue (or [`STOP_CODON_MARKER`]) for a single codon.
#[inline]
pub fn translate_codon(codon: &[u8; 3]) -> u8 {
    CODON_TABLE[codon_index_rna(codon[0], codon[1], codon[2]) as usize]
}

pub fn is_stop_codon(codon: &[u8; 3]) -> bool {
    translate_codon(codon) == STOP_CODON_MARKER
}
