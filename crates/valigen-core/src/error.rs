use thiserror::Error;

/// Core error type for the object-access contract.
#[derive(Debug, Error)]
pub enum Error {
    /// The record does not declare a field with this name.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// A value of the wrong shape was written to a field.
    #[error("type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// Constructing a blank instance failed.
    #[error("construction failed: {0}")]
    Construct(String),
}

/// Convenience alias for results returned by Valigen core contracts.
pub type Result<T> = std::result::Result<T, Error>;
