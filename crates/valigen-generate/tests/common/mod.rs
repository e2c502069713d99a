#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use valigen_core::{Constraint, Error, FieldDescriptor, FieldValue, Record, SemanticType};

pub const CORPORATE_EMAIL_PATTERN: &str = r".+@company\.com";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn type_mismatch(field: &str, expected: &'static str, actual: &FieldValue) -> Error {
    Error::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

/// Employee with a corporate email derived from the generated names.
#[derive(Debug, Default, Clone)]
pub struct Employee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub work_email: Option<String>,
}

impl Record for Employee {
    fn type_name() -> &'static str {
        "Employee"
    }

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(
                "first_name",
                SemanticType::String,
                vec![
                    Constraint::Required,
                    Constraint::Size {
                        min: 2,
                        max: Some(40),
                    },
                ],
            ),
            FieldDescriptor::new("last_name", SemanticType::String, vec![Constraint::Required]),
            FieldDescriptor::new(
                "work_email",
                SemanticType::String,
                vec![
                    Constraint::Required,
                    Constraint::Email {
                        pattern: Some(CORPORATE_EMAIL_PATTERN.to_string()),
                    },
                ],
            ),
        ]
    }

    fn construct() -> valigen_core::Result<Self> {
        Ok(Self::default())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> valigen_core::Result<()> {
        let slot = match name {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "work_email" => &mut self.work_email,
            _ => return Err(Error::UnknownField(name.to_string())),
        };
        match value {
            FieldValue::Text(text) => {
                *slot = Some(text);
                Ok(())
            }
            other => Err(type_mismatch(name, "text", &other)),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let slot = match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "work_email" => &self.work_email,
            _ => return None,
        };
        Some(
            slot.clone()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Null),
        )
    }
}

/// Invoice exercising decimal, temporal, and sized-text constraints.
#[derive(Debug, Default, Clone)]
pub struct Invoice {
    pub amount: Option<Decimal>,
    pub quantity: i64,
    pub paid: bool,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl Record for Invoice {
    fn type_name() -> &'static str {
        "Invoice"
    }

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(
                "amount",
                SemanticType::Decimal,
                vec![
                    Constraint::Required,
                    Constraint::DecimalMin {
                        value: Decimal::new(10, 0),
                    },
                    Constraint::DecimalMax {
                        value: Decimal::new(1000, 0),
                    },
                    Constraint::Digits {
                        integer: 6,
                        fraction: 2,
                    },
                ],
            ),
            FieldDescriptor::new("quantity", SemanticType::Integer, Vec::new()),
            FieldDescriptor::new("paid", SemanticType::Boolean, Vec::new()),
            FieldDescriptor::new(
                "issued_on",
                SemanticType::Date,
                vec![Constraint::Required, Constraint::PastOrPresent],
            ),
            FieldDescriptor::new(
                "due_on",
                SemanticType::Date,
                vec![Constraint::Required, Constraint::Future],
            ),
            FieldDescriptor::new(
                "created_at",
                SemanticType::DateTime,
                vec![Constraint::Required, Constraint::Past],
            ),
            FieldDescriptor::new(
                "notes",
                SemanticType::String,
                vec![Constraint::Size {
                    min: 10,
                    max: Some(100),
                }],
            ),
        ]
    }

    fn construct() -> valigen_core::Result<Self> {
        Ok(Self::default())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> valigen_core::Result<()> {
        match name {
            "amount" => match value {
                FieldValue::Decimal(decimal) => self.amount = Some(decimal),
                other => return Err(type_mismatch(name, "decimal", &other)),
            },
            "quantity" => match value {
                FieldValue::Int(int) => self.quantity = int,
                other => return Err(type_mismatch(name, "int", &other)),
            },
            "paid" => match value {
                FieldValue::Bool(flag) => self.paid = flag,
                other => return Err(type_mismatch(name, "bool", &other)),
            },
            "issued_on" => match value {
                FieldValue::Date(date) => self.issued_on = Some(date),
                other => return Err(type_mismatch(name, "date", &other)),
            },
            "due_on" => match value {
                FieldValue::Date(date) => self.due_on = Some(date),
                other => return Err(type_mismatch(name, "date", &other)),
            },
            "created_at" => match value {
                FieldValue::DateTime(date_time) => self.created_at = Some(date_time),
                other => return Err(type_mismatch(name, "date-time", &other)),
            },
            "notes" => match value {
                FieldValue::Text(text) => self.notes = Some(text),
                other => return Err(type_mismatch(name, "text", &other)),
            },
            _ => return Err(Error::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "amount" => Some(
                self.amount
                    .map(FieldValue::Decimal)
                    .unwrap_or(FieldValue::Null),
            ),
            "quantity" => Some(FieldValue::Int(self.quantity)),
            "paid" => Some(FieldValue::Bool(self.paid)),
            "issued_on" => Some(
                self.issued_on
                    .map(FieldValue::Date)
                    .unwrap_or(FieldValue::Null),
            ),
            "due_on" => Some(
                self.due_on
                    .map(FieldValue::Date)
                    .unwrap_or(FieldValue::Null),
            ),
            "created_at" => Some(
                self.created_at
                    .map(FieldValue::DateTime)
                    .unwrap_or(FieldValue::Null),
            ),
            "notes" => Some(
                self.notes
                    .clone()
                    .map(FieldValue::Text)
                    .unwrap_or(FieldValue::Null),
            ),
            _ => None,
        }
    }
}
