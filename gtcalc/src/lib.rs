//! # gtcalc
//!
//! Umbrella crate for the gtcalc workspace. Each member crate is re-exported
//! behind a feature of the same name:
//!
//! - `core` - `OutputBuffer` and error types
//! - `seq` - the sequence transforms (enabled by default)
//!
//! ```
//! # #[cfg(feature = "seq")]
//! # {
//! use gtcalc::core::OutputBuffer;
//! use gtcalc::seq::{dna_to_rna, rna_to_protein};
//!
//! let mut rna = OutputBuffer::with_capacity(16).unwrap();
//! let mut protein = OutputBuffer::with_capacity(16).unwrap();
//! dna_to_rna(b"ATGGCCTTTTAA", &mut rna);
//! rna_to_protein(&rna, &mut protein);
//! assert_eq!(protein.to_string(), "MAF");
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use gtcalc_core as core;

#[cfg(feature = "seq")]
#[doc(inline)]
pub use gtcalc_seq as seq;
