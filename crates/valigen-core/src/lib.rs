//! Core contracts for Valigen.
//!
//! This crate defines the constraint model, field descriptors, the record
//! access trait, and the validation contract shared by the generation
//! engine and by user code that declares record schemas.

pub mod constraints;
pub mod error;
pub mod schema;
pub mod validation;
pub mod value;

pub use constraints::{Constraint, ConstraintKind};
pub use error::{Error, Result};
pub use schema::{FieldDescriptor, Record, SemanticType};
pub use validation::{SchemaValidator, Validator, Violation};
pub use value::FieldValue;
