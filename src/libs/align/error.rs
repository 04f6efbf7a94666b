use std::fmt;

/// Errors raised by the alignment engine.
///
/// All of them indicate a caller programming error, not a transient
/// condition; nothing here is worth retrying. The engine never partially
/// mutates shared state on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// Malformed input data (confidence table, sequences, read records)
    InvalidInput(String),
    /// Invalid engine parameters (seed length, threshold)
    Config(String),
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            AlignError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AlignError {}
