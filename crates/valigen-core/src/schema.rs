use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, ConstraintKind};
use crate::error::Result;
use crate::value::FieldValue;

/// Semantic type of a record field, as declared by its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    String,
    Integer,
    Long,
    Double,
    Decimal,
    Boolean,
    Date,
    DateTime,
    /// Anything the engine has no representation for.
    Other,
}

/// Immutable description of one field: name, semantic type, and the
/// constraint set declared for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub semantic_type: SemanticType,
    pub constraints: Vec<Constraint>,
    /// True iff a `Required` constraint is present; derived at construction.
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        semantic_type: SemanticType,
        constraints: Vec<Constraint>,
    ) -> Self {
        let required = constraints
            .iter()
            .any(|constraint| constraint.kind() == ConstraintKind::Required);
        Self {
            name: name.into(),
            semantic_type,
            constraints,
            required,
        }
    }

    pub fn has_constraint(&self, kind: ConstraintKind) -> bool {
        self.find(kind).is_some()
    }

    /// First constraint of the given kind, if declared.
    pub fn find(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|constraint| constraint.kind() == kind)
    }

    pub fn size_bounds(&self) -> Option<(usize, Option<usize>)> {
        match self.find(ConstraintKind::Size) {
            Some(Constraint::Size { min, max }) => Some((*min, *max)),
            _ => None,
        }
    }

    pub fn decimal_min(&self) -> Option<Decimal> {
        match self.find(ConstraintKind::DecimalMin) {
            Some(Constraint::DecimalMin { value }) => Some(*value),
            _ => None,
        }
    }

    pub fn decimal_max(&self) -> Option<Decimal> {
        match self.find(ConstraintKind::DecimalMax) {
            Some(Constraint::DecimalMax { value }) => Some(*value),
            _ => None,
        }
    }

    pub fn fraction_digits(&self) -> Option<u32> {
        match self.find(ConstraintKind::Digits) {
            Some(Constraint::Digits { fraction, .. }) => Some(*fraction),
            _ => None,
        }
    }

    /// Explicit email pattern, if the field declares one.
    pub fn email_pattern(&self) -> Option<&str> {
        match self.find(ConstraintKind::Email) {
            Some(Constraint::Email { pattern }) => pattern.as_deref(),
            _ => None,
        }
    }

    pub fn has_past_family(&self) -> bool {
        self.constraints.iter().any(Constraint::is_past_family)
    }

    pub fn has_future_family(&self) -> bool {
        self.constraints.iter().any(Constraint::is_future_family)
    }
}

/// Schema source and object access for one record type.
///
/// Implementations declare their field table statically and expose plain
/// accessor/mutator functions; there is no runtime reflection. A blank
/// instance from [`Record::construct`] must report every field at its
/// zero value (`FieldValue::Null` for absent text, zero for numbers, and
/// so on) so the validator can run against partially written candidates.
pub trait Record: Sized {
    fn type_name() -> &'static str;

    /// Field table in declaration order; the engine imposes its own order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Blank instance with every field at its zero value.
    fn construct() -> Result<Self>;

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;

    /// Current value of a named field, `None` for unknown names.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
