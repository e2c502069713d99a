use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use rand::{Rng, RngCore};

use valigen_core::{ConstraintKind, FieldDescriptor, FieldValue, SemanticType};

use crate::errors::GenerationError;
use crate::generators::Generator;

const PAST_WINDOW_DAYS: i64 = 365 * 50;
const FUTURE_WINDOW_DAYS: i64 = 365 * 10;
const NEUTRAL_WINDOW_DAYS: i64 = 365 * 5;
const PAST_WINDOW_SECONDS: i64 = 365 * 24 * 60 * 60 * 50;
const FUTURE_WINDOW_SECONDS: i64 = 365 * 24 * 60 * 60 * 10;
const NEUTRAL_WINDOW_SECONDS: i64 = 365 * 24 * 60 * 60 * 5;

/// A field carrying both past-family and future-family constraints can never
/// be satisfied; detected here so the build aborts instead of retrying.
fn check_conflict(descriptor: &FieldDescriptor) -> Result<(), GenerationError> {
    if descriptor.has_past_family() && descriptor.has_future_family() {
        return Err(GenerationError::ConflictingConstraints(
            descriptor.name.clone(),
        ));
    }
    Ok(())
}

/// Generator for date fields with temporal constraints.
pub struct DateGenerator;

impl Generator for DateGenerator {
    fn id(&self) -> &'static str {
        "temporal.date"
    }

    fn supports(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.semantic_type == SemanticType::Date
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        check_conflict(descriptor)?;
        let today = Utc::now().date_naive();

        let value = if descriptor.has_constraint(ConstraintKind::Past) {
            past_date(today, rng)
        } else if descriptor.has_constraint(ConstraintKind::Future) {
            future_date(today, rng)
        } else if descriptor.has_constraint(ConstraintKind::PastOrPresent) {
            if rng.random_bool(0.5) {
                today
            } else {
                past_date(today, rng)
            }
        } else if descriptor.has_constraint(ConstraintKind::FutureOrPresent) {
            if rng.random_bool(0.5) {
                today
            } else {
                future_date(today, rng)
            }
        } else {
            today + Duration::days(rng.random_range(-NEUTRAL_WINDOW_DAYS..=NEUTRAL_WINDOW_DAYS))
        };

        Ok(FieldValue::Date(value))
    }
}

fn past_date(today: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    today - Duration::days(rng.random_range(1..=PAST_WINDOW_DAYS))
}

fn future_date(today: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    today + Duration::days(rng.random_range(1..=FUTURE_WINDOW_DAYS))
}

/// Generator for date-time fields with temporal constraints.
pub struct DateTimeGenerator;

impl Generator for DateTimeGenerator {
    fn id(&self) -> &'static str {
        "temporal.date_time"
    }

    fn supports(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.semantic_type == SemanticType::DateTime
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        check_conflict(descriptor)?;
        let now = Utc::now().naive_utc();

        let value = if descriptor.has_constraint(ConstraintKind::Past) {
            past_date_time(now, rng)
        } else if descriptor.has_constraint(ConstraintKind::Future) {
            future_date_time(now, rng)
        } else if descriptor.has_constraint(ConstraintKind::PastOrPresent) {
            if rng.random_bool(0.5) {
                now
            } else {
                past_date_time(now, rng)
            }
        } else if descriptor.has_constraint(ConstraintKind::FutureOrPresent) {
            if rng.random_bool(0.5) {
                now
            } else {
                future_date_time(now, rng)
            }
        } else {
            now + Duration::seconds(
                rng.random_range(-NEUTRAL_WINDOW_SECONDS..=NEUTRAL_WINDOW_SECONDS),
            )
        };

        Ok(FieldValue::DateTime(value))
    }
}

fn past_date_time(now: NaiveDateTime, rng: &mut dyn RngCore) -> NaiveDateTime {
    now - Duration::seconds(rng.random_range(1..=PAST_WINDOW_SECONDS))
}

fn future_date_time(now: NaiveDateTime, rng: &mut dyn RngCore) -> NaiveDateTime {
    now + Duration::seconds(rng.random_range(1..=FUTURE_WINDOW_SECONDS))
}
