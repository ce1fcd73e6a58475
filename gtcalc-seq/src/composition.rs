//! Composition statistics over nucleotide sequences.
//!
//! Neither function validates its input. Symbols outside the nucleotide
//! alphabet are counted towards the length but never match, so `GCNN` is 50%
//! GC and a codon containing `N` only matches the identical literal.

/// Percentage of `G` and `C` symbols in a sequence, truncated towards zero.
///
/// Returns 0 for an empty sequence. That value is a sentinel, not a
/// measurement: callers must not read it as "0% GC".
pub fn gc_content_percent<T: AsRef<[u8]>>(dna: T) -> u32 {
    let dna = dna.as_ref();
    if dna.is_empty() {
        return 0;
    }

    let gc = dna.iter().filter(|&&b| b == b'G' || b == b'C').count();
    ((gc * 100) / dna.len()) as u32
}

/// Count in-frame occurrences of `codon` in an RNA sequence.
///
/// The sequence is walked in non-overlapping strides of three from the first
/// base; a trailing partial codon is ignored. This is not a sliding search:
/// `AUG` occurs once in `CAUGAA` as a substring, but zero times in frame.
pub fn count_codon_occurrences<T: AsRef<[u8]>>(rna: T, codon: &[u8; 3]) -> usize {
    rna.as_ref()
        .chunks_exact(3)
        .filter(|window| *window == codon)
        .count()
}
