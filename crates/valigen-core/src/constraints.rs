use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared per-field constraint.
///
/// A field carries zero or more constraints; the engine never merges
/// duplicate kinds coming from the same declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// The field must hold a non-null value.
    Required,
    /// Character-length bounds for text fields. `max: None` means unbounded.
    Size { min: usize, max: Option<usize> },
    /// The field must look like an email address; an explicit pattern
    /// narrows the accepted shape.
    Email { pattern: Option<String> },
    /// Inclusive lower bound for decimal fields.
    DecimalMin { value: Decimal },
    /// Inclusive upper bound for decimal fields.
    DecimalMax { value: Decimal },
    /// Maximum integer and fraction digit counts for decimal fields.
    Digits { integer: u32, fraction: u32 },
    /// Strictly before now.
    Past,
    /// Strictly after now.
    Future,
    /// Before or exactly now.
    PastOrPresent,
    /// After or exactly now.
    FutureOrPresent,
}

/// Discriminant of a [`Constraint`], used for kind lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Required,
    Size,
    Email,
    DecimalMin,
    DecimalMax,
    Digits,
    Past,
    Future,
    PastOrPresent,
    FutureOrPresent,
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Required => ConstraintKind::Required,
            Constraint::Size { .. } => ConstraintKind::Size,
            Constraint::Email { .. } => ConstraintKind::Email,
            Constraint::DecimalMin { .. } => ConstraintKind::DecimalMin,
            Constraint::DecimalMax { .. } => ConstraintKind::DecimalMax,
            Constraint::Digits { .. } => ConstraintKind::Digits,
            Constraint::Past => ConstraintKind::Past,
            Constraint::Future => ConstraintKind::Future,
            Constraint::PastOrPresent => ConstraintKind::PastOrPresent,
            Constraint::FutureOrPresent => ConstraintKind::FutureOrPresent,
        }
    }

    /// Whether this is a past-family temporal constraint.
    pub fn is_past_family(&self) -> bool {
        matches!(self, Constraint::Past | Constraint::PastOrPresent)
    }

    /// Whether this is a future-family temporal constraint.
    pub fn is_future_family(&self) -> bool {
        matches!(self, Constraint::Future | Constraint::FutureOrPresent)
    }
}
