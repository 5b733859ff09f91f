//! Error types for link conversion
//!
//! Only [`ConvertError::InvalidScheme`] can come out of the conversion itself;
//! every other anomaly in a link resolves to a default. The remaining variants
//! belong to rendering the document and to the command-line front end.

use std::fmt;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a link
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input does not start with `vless://`
    InvalidScheme(String),
    /// Document could not be rendered as JSON
    JsonError(String),
    /// Reading the link or writing the document failed
    IoError(String),
    /// No link was supplied
    EmptyInput,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidScheme(msg) => write!(f, "Invalid scheme: {}", msg),
            ConvertError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            ConvertError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConvertError::EmptyInput => write!(f, "No link supplied"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::IoError(err.to_string())
    }
}
