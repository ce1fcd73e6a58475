//! # Core models for gtcalc.
//!
//! Holds the pieces shared by every gtcalc crate: the fixed-capacity
//! [`OutputBuffer`] that producing operations write into, and the
//! [`GtcError`] type.
//!
pub mod errors;
pub mod models;

// re-expose core types
pub use errors::*;
pub use models::OutputBuffer;
