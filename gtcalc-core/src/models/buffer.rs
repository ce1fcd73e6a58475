use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::errors::{GtcError, Result};

/// Upper bound on the storage reserved up front. Larger buffers grow on demand
/// until they reach `capacity - 1` symbols.
const MAX_PREALLOCATED_SYMBOLS: usize = 64 * 1024;

/// A caller-owned, fixed-capacity symbol buffer.
///
/// `capacity` counts one reserved slot, so a buffer of capacity `n` holds at
/// most `n - 1` symbols; writes past the limit are refused. Capacity is a bound
/// on writes, not an allocation request: at most
/// `MAX_PREALLOCATED_SYMBOLS` bytes are reserved at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OutputBuffer {
    symbols: Vec<u8>,
    capacity: usize,
}

impl OutputBuffer {
    /// Create an empty buffer with the given capacity.
    ///
    /// # Arguments
    ///
    /// - capacity: total capacity including the reserved slot, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns [`GtcError::ZeroCapacity`] when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GtcError::ZeroCapacity);
        }

        Ok(OutputBuffer {
            symbols: Vec::with_capacity((capacity - 1).min(MAX_PREALLOCATED_SYMBOLS)),
            capacity,
        })
    }

    /// Total capacity, including the reserved slot.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of symbols this buffer can hold (`capacity - 1`).
    #[inline]
    pub fn max_symbols(&self) -> usize {
        self.capacity - 1
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True once `capacity - 1` symbols have been written.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.max_symbols()
    }

    /// Number of symbols that can still be written.
    pub fn remaining(&self) -> usize {
        self.max_symbols() - self.symbols.len()
    }

    /// Append a symbol if there is room. Returns `false` when the buffer is full.
    #[inline]
    #[must_use = "a full buffer drops the symbol"]
    pub fn try_push(&mut self, symbol: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Drop all symbols, keeping the capacity.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// View the contents as a string, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.symbols).ok()
    }
}

impl AsRef<[u8]> for OutputBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl Display for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.symbols))
    }
}
