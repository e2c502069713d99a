use chrono::{Duration, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constraints::Constraint;
use crate::schema::Record;
use crate::value::FieldValue;

/// One reported failure of an instance to satisfy a declared constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Checks a candidate instance against its declared constraints.
///
/// An empty violation set means the instance is valid. Implementations must
/// not mutate the instance.
pub trait Validator<T> {
    fn validate(&self, instance: &T) -> Vec<Violation>;
}

/// Default validator: re-checks every constraint declared in the record's
/// field table against the values read back from the instance.
///
/// Null values only violate `Required`; every other constraint treats null
/// as vacuously satisfied.
#[derive(Debug, Default)]
pub struct SchemaValidator;

impl<T: Record> Validator<T> for SchemaValidator {
    fn validate(&self, instance: &T) -> Vec<Violation> {
        let mut violations = Vec::new();
        for descriptor in T::fields() {
            let value = instance
                .field(&descriptor.name)
                .unwrap_or(FieldValue::Null);
            for constraint in &descriptor.constraints {
                if let Some(violation) = check_constraint(&descriptor.name, constraint, &value) {
                    violations.push(violation);
                }
            }
        }
        violations
    }
}

fn check_constraint(field: &str, constraint: &Constraint, value: &FieldValue) -> Option<Violation> {
    match constraint {
        Constraint::Required => {
            if value.is_null() {
                return Some(Violation::new(field, "must not be null"));
            }
        }
        Constraint::Size { min, max } => {
            if let Some(text) = value.as_str() {
                let length = text.chars().count();
                if length < *min || max.map(|max| length > max).unwrap_or(false) {
                    return Some(Violation::new(
                        field,
                        format!(
                            "size must be between {} and {}",
                            min,
                            max.map(|max| max.to_string())
                                .unwrap_or_else(|| "unbounded".to_string())
                        ),
                    ));
                }
            }
        }
        Constraint::Email { pattern } => {
            if let Some(text) = value.as_str() {
                return check_email(field, pattern.as_deref(), text);
            }
        }
        Constraint::DecimalMin { value: min } => {
            if let Some(decimal) = value.as_decimal()
                && decimal < *min
            {
                return Some(Violation::new(
                    field,
                    format!("must be greater than or equal to {min}"),
                ));
            }
        }
        Constraint::DecimalMax { value: max } => {
            if let Some(decimal) = value.as_decimal()
                && decimal > *max
            {
                return Some(Violation::new(
                    field,
                    format!("must be less than or equal to {max}"),
                ));
            }
        }
        Constraint::Digits { integer, fraction } => {
            if let Some(decimal) = value.as_decimal()
                && (decimal.scale() > *fraction || integer_digits(decimal) > *integer)
            {
                return Some(Violation::new(
                    field,
                    format!("numeric value out of bounds (<{integer} digits>.<{fraction} digits> expected)"),
                ));
            }
        }
        Constraint::Past
        | Constraint::PastOrPresent
        | Constraint::Future
        | Constraint::FutureOrPresent => {
            return check_temporal(field, constraint, value);
        }
    }
    None
}

fn check_email(field: &str, pattern: Option<&str>, text: &str) -> Option<Violation> {
    match pattern {
        Some(pattern) => {
            let anchored = format!("^(?:{pattern})$");
            match Regex::new(&anchored) {
                Ok(regex) if regex.is_match(text) => None,
                Ok(_) => Some(Violation::new(field, format!("must match \"{pattern}\""))),
                Err(_) => Some(Violation::new(
                    field,
                    format!("email pattern \"{pattern}\" is not a valid expression"),
                )),
            }
        }
        None => {
            let basic_shape = text.split_once('@').map(|(local, domain)| {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            });
            if basic_shape.unwrap_or(false) {
                None
            } else {
                Some(Violation::new(field, "must be a well-formed email address"))
            }
        }
    }
}

/// Tolerance for `*OrPresent` checks on date-times: a value generated at
/// "now" is validated strictly later within the same attempt.
const PRESENT_TOLERANCE_SECONDS: i64 = 1;

fn check_temporal(field: &str, constraint: &Constraint, value: &FieldValue) -> Option<Violation> {
    match value {
        FieldValue::Date(date) => {
            let today = Utc::now().date_naive();
            let ok = match constraint {
                Constraint::Past => *date < today,
                Constraint::PastOrPresent => *date <= today,
                Constraint::Future => *date > today,
                Constraint::FutureOrPresent => *date >= today,
                _ => true,
            };
            if !ok {
                return Some(Violation::new(field, temporal_message(constraint)));
            }
        }
        FieldValue::DateTime(date_time) => {
            let now = Utc::now().naive_utc();
            let tolerance = Duration::seconds(PRESENT_TOLERANCE_SECONDS);
            let ok = match constraint {
                Constraint::Past => *date_time < now,
                Constraint::PastOrPresent => *date_time <= now + tolerance,
                Constraint::Future => *date_time > now,
                Constraint::FutureOrPresent => *date_time >= now - tolerance,
                _ => true,
            };
            if !ok {
                return Some(Violation::new(field, temporal_message(constraint)));
            }
        }
        _ => {}
    }
    None
}

fn temporal_message(constraint: &Constraint) -> &'static str {
    match constraint {
        Constraint::Past => "must be a past date",
        Constraint::PastOrPresent => "must be a date in the past or in the present",
        Constraint::Future => "must be a future date",
        Constraint::FutureOrPresent => "must be a date in the present or in the future",
        _ => "temporal constraint violated",
    }
}

fn integer_digits(decimal: Decimal) -> u32 {
    let whole = decimal.abs().trunc();
    if whole.is_zero() {
        1
    } else {
        whole.to_string().len() as u32
    }
}
