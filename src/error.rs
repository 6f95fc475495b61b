use thiserror::Error;

/// Main error type for the cracker and the record generator
#[derive(Error, Debug)]
pub enum CrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format, expected {expected} parts, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} parameter: {value:?} is not an unsigned integer")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Mask cannot be empty")]
    EmptyMask,

    #[error("Invalid mask character: {symbol:?} at position {position}")]
    UnknownMaskSymbol { symbol: char, position: usize },

    #[error("Invalid scrypt parameters: {0}")]
    InvalidParams(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Result type alias for cracker operations
pub type Result<T> = std::result::Result<T, CrackError>;
