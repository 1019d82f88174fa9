//! Error types for pattern construction and rendering
//!
//! Every fallible operation in the crate reports through [`MeanderError`]. The
//! variants separate domain failures (an empty sequence, a rate that cannot be
//! turned into an interval) from I/O failures while writing to the terminal, so
//! the command-line layer can decide how loudly to fail.

use thiserror::Error;

/// Result type alias for meander operations.
pub type Result<T> = std::result::Result<T, MeanderError>;

/// Errors that can occur while building or displaying a pattern.
#[derive(Error, Debug)]
pub enum MeanderError {
    /// Span, minimum and maximum are undefined for an empty sequence
    #[error("Sequence is empty: span is undefined")]
    EmptySequence,

    /// `max - min + 1` does not fit in an i64
    #[error("Sequence span overflows a 64-bit integer")]
    SpanOverflow,

    /// Negating or shifting an element leaves the i64 range
    #[error("Sequence element overflows a 64-bit integer")]
    ValueOverflow,

    /// A toggle landed outside the grid
    #[error("Row {row} in column {column} is outside the grid height {height}")]
    RowOutOfRange {
        column: usize,
        row: i64,
        height: usize,
    },

    /// The scroll rate must be strictly positive
    #[error("Invalid frequency {0}: must be greater than 0")]
    InvalidFrequency(i64),

    /// The requested order would produce an unreasonably long sequence
    #[error("Order {order} exceeds the maximum supported order {max}")]
    OrderTooLarge { order: u32, max: u32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeanderError {
    /// Create a new configuration error.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
