use log::debug;

use gtcalc_core::OutputBuffer;

/// Transcribe DNA into RNA, replacing every `T` with `U`.
///
/// All other symbols are copied through unchanged; the input is not validated.
/// Output stops at the end of the input or once the buffer holds
/// `capacity - 1` symbols, whichever comes first. Any previous contents of
/// `rna` are discarded.
///
/// # Arguments
///
/// - dna: the DNA sequence to transcribe
/// - rna: buffer receiving the RNA sequence
///
/// # Examples
///
/// ```
/// use gtcalc_core::OutputBuffer;
/// use gtcalc_seq::dna_to_rna;
///
/// let mut rna = OutputBuffer::with_capacity(32).unwrap();
/// dna_to_rna(b"ATGCGTATTA", &mut rna);
/// assert_eq!(rna.as_bytes(), b"AUGCGUAUUA");
/// ```
pub fn dna_to_rna<T: AsRef<[u8]>>(dna: T, rna: &mut OutputBuffer) {
    let dna = dna.as_ref();
    rna.clear();

    for &base in dna {
        let base = if base == b'T' { b'U' } else { base };
        if !rna.try_push(base) {
            debug!("Transcription truncated at {} of {} bases", rna.len(), dna.len());
            return;
        }
    }
}
