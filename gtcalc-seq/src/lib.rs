//! # Table-driven sequence transforms
//!
//! Pure functions over DNA, RNA and protein symbol sequences, built on two
//! fixed lookup tables: the 64-entry standard genetic code and a 26-entry
//! residue weight table.
//!
//! # Module Structure
//!
//! - `alphabet` - Alphabet types and validators
//! - `codon` - Codon indexing and the genetic code table
//! - `transcribe` - DNA to RNA
//! - `translate` - RNA to protein
//! - `complement` - Reverse complement
//! - `composition` - GC content and codon counts
//! - `weight` - Protein molecular weight
//!
//! Producing operations write into a caller-owned [`OutputBuffer`] and never
//! hold more than `capacity - 1` symbols. Scalar operations signal invalid
//! input with sentinel values rather than errors.

pub mod alphabet;
pub mod codon;
pub mod complement;
pub mod composition;
pub mod transcribe;
pub mod translate;
pub mod weight;

pub use gtcalc_core::{GtcError, OutputBuffer, Result};

// Re-export commonly used items at crate root for convenience
pub use alphabet::{
    AlphabetType, DNA_SYMBOLS, PROTEIN_SYMBOLS, RNA_SYMBOLS, check_alphabet, is_valid,
    is_valid_dna, is_valid_protein, is_valid_rna,
};
pub use codon::{
    CODON_TABLE, STOP_CODON_MARKER, base_index_rna, codon_index_rna, is_stop_codon,
    translate_codon,
};
pub use complement::{complement_base, reverse_complement};
pub use composition::{count_codon_occurrences, gc_content_percent};
pub use transcribe::dna_to_rna;
pub use translate::rna_to_protein;
pub use weight::{RESIDUE_WEIGHTS, protein_weight, residue_weight};
