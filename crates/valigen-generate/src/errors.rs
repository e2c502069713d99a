use rust_decimal::Decimal;
use thiserror::Error;

use valigen_core::{SemanticType, Violation};

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No registered generator claims the field; a configuration error,
    /// unreachable while the catch-all default generator is registered.
    #[error("no generator registered for field '{0}'")]
    NoGeneratorFound(String),
    /// Past-family and future-family temporal constraints on one field.
    #[error("conflicting temporal constraints on field '{0}'")]
    ConflictingConstraints(String),
    /// A declared numeric minimum exceeds its maximum.
    #[error("invalid range on field '{field}': min {min} exceeds max {max}")]
    InvalidRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },
    /// No representable value for the field's semantic type.
    #[error("no representable value for field '{field}' of type {semantic_type:?}")]
    Unsupported {
        field: String,
        semantic_type: SemanticType,
    },
    /// Constructing or mutating the candidate instance failed; aborts only
    /// the current attempt.
    #[error("instantiation failed: {0}")]
    Instantiation(#[from] valigen_core::Error),
    /// The attempt bound was reached without a valid instance.
    #[error("failed to build a valid '{type_name}' after {attempts} attempts")]
    RetriesExhausted {
        type_name: &'static str,
        attempts: u32,
        violations: Vec<Violation>,
    },
}

impl GenerationError {
    /// Deterministic errors abort the whole build; retrying cannot help.
    /// Only instantiation failures are contained to a single attempt.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GenerationError::Instantiation(_))
    }
}
