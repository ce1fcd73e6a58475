use thiserror::Error;

/// Error type for gtcalc operations.
///
/// The sequence transforms themselves report failure through sentinel values;
/// these variants cover contract violations and the checked validators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtcError {
    /// An output buffer was requested with no room for the reserved slot.
    #[error("Output buffer capacity must be at least 1")]
    ZeroCapacity,

    /// A symbol outside the expected alphabet was found.
    #[error("Invalid symbol {symbol:?} at position {position} for {alphabet} alphabet")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        alphabet: String,
    },

    /// The alphabet name could not be parsed.
    #[error("Unknown alphabet: {0}")]
    InvalidAlphabet(String),
}

/// Result type alias for gtcalc operations.
pub type Result<T> = std::result::Result<T, GtcError>;
