//! Error types for the capability table

use thiserror::Error;

/// Result type for capability table operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The capability name is not part of the table. Callers passing
    /// names they did not obtain from the table have a programming error.
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
}
