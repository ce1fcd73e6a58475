use log::debug;

use gtcalc_core::OutputBuffer;

/// Complement of every byte: A<->T, C<->G, everything else becomes N.
const DNA_COMPLEMENT_ARRAY: [u8; 256] = {
    let mut arr = [b'N'; 256];
    arr[b'A' as usize] = b'T';
    arr[b'T' as usize] = b'A';
    arr[b'C' as usize] = b'G';
    arr[b'G' as usize] = b'C';
    arr
};

/// Complement a single DNA base. Symbols outside A, C, G, T map to `N`.
#[inline]
pub fn complement_base(base: u8) -> u8 {
    DNA_COMPLEMENT_ARRAY[base as usize]
}

/// Write the reverse complement of a DNA sequence into `revcomp`.
///
/// The result is all-or-nothing: if the input is longer than `capacity - 1`
/// the buffer is left empty instead of holding a truncated strand. Any
/// previous contents of `revcomp` are discarded.
///
/// # Examples
///
/// ```
/// use gtcalc_core::OutputBuffer;
/// use gtcalc_seq::reverse_complement;
///
/// let mut revcomp = OutputBuffer::with_capacity(8).unwrap();
/// reverse_complement(b"GATTACA", &mut revcomp);
/// assert_eq!(revcomp.as_bytes(), b"TGTAATC");
/// ```
pub fn reverse_complement<T: AsRef<[u8]>>(dna: T, revcomp: &mut OutputBuffer) {
    let dna = dna.as_ref();
    revcomp.clear();

    if dna.len() > revcomp.max_symbols() {
        debug!(
            "Reverse complement skipped: {} bases do not fit in capacity {}",
            dna.len(),
            revcomp.capacity()
        );
        return;
    }

    for &base in dna.iter().rev() {
        let pushed = revcomp.try_push(complement_base(base));
        debug_assert!(pushed, "length was checked against capacity");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn revcomp(dna: &[u8], capacity: usize) -> Vec<u8> {
        let mut out = OutputBuffer::with_capacity(capacity).unwrap();
        reverse_complement(dna, &mut out);
        out.as_bytes().to_vec()
    }

    #[rstest]
    #[case(b"ATCG", 5, b"CGAT")]
    #[case(b"GATTACA", 8, b"TGTAATC")]
    #[case(b"", 1, b"")]
    // roomier buffers do not change the result
    #[case(b"ATCG", 64, b"CGAT")]
    #[case(b"GAATTC", 16, b"GAATTC")]
    #[case(b"AAATTTGGGCCC", 13, b"GGGCCCAAATTT")]
    // anything outside ACGT complements to N
    #[case(b"ATXGC", 8, b"GCNAT")]
    #[case(b"acgt", 8, b"NNNN")]
    fn test_reverse_complement(
        #[case] dna: &[u8],
        #[case] capacity: usize,
        #[case] expected: &[u8],
    ) {
        assert_eq!(revcomp(dna, capacity), expected);
    }

    #[rstest]
    #[case(b"ATCG", 4)]
    #[case(b"ATCG", 1)]
    #[case(b"GATTACA", 7)]
    fn test_reverse_complement_too_long_is_empty(#[case] dna: &[u8], #[case] capacity: usize) {
        assert_eq!(revcomp(dna, capacity), b"");
    }

    #[test]
    fn test_reverse_complement_clears_on_abort() {
        let mut out = OutputBuffer::with_capacity(5).unwrap();
        reverse_complement(b"ACGT", &mut out);
        assert_eq!(out.as_bytes(), b"ACGT");
        reverse_complement(b"ACGTACGT", &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_complement_base() {
        assert_eq!(complement_base(b'A'), b'T');
        assert_eq!(complement_base(b'T'), b'A');
        assert_eq!(complement_base(b'C'), b'G');
        assert_eq!(complement_base(b'G'), b'C');
        assert_eq!(complement_base(b'U'), b'N');
        assert_eq!(complement_base(0), b'N');
    }
}
