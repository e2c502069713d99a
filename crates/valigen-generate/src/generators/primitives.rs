use fake::Fake;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::{Rng, RngCore};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use valigen_core::{FieldDescriptor, FieldValue, SemanticType};

use crate::errors::GenerationError;
use crate::generators::Generator;

const DEFAULT_TEXT_MAX: usize = 500;
const DEFAULT_WORD_MAX: usize = 100;
const DEFAULT_SCALE: u32 = 2;

/// Generator for string fields not claimed by the email generator.
///
/// Dispatches on a name heuristic: person-name fields get fake names,
/// description/text fields get prose, everything else a generic word; all
/// three are fitted into any declared size bounds.
pub struct StringGenerator;

impl Generator for StringGenerator {
    fn id(&self) -> &'static str {
        "primitive.string"
    }

    fn supports(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.semantic_type == SemanticType::String
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        let lower = descriptor.name.to_lowercase();
        let bounds = descriptor.size_bounds();

        let value = if lower.contains("first") {
            fit_person_name(FirstName().fake_with_rng(rng), bounds)
        } else if lower.contains("last") || lower.contains("surname") {
            fit_person_name(LastName().fake_with_rng(rng), bounds)
        } else if lower.contains("name") {
            fit_person_name(Name().fake_with_rng(rng), bounds)
        } else if lower.contains("description") || lower.contains("text") {
            let target = target_length(bounds, DEFAULT_TEXT_MAX, rng);
            prose_of_length(target, rng)
        } else {
            match bounds {
                None => Word().fake_with_rng(rng),
                Some(_) => {
                    let target = target_length(bounds, DEFAULT_WORD_MAX, rng);
                    let word: String = Word().fake_with_rng(rng);
                    repeat_to_length(&word, target)
                }
            }
        };

        Ok(FieldValue::Text(value))
    }
}

fn fit_person_name(name: String, bounds: Option<(usize, Option<usize>)>) -> String {
    let Some((min, max)) = bounds else {
        return name;
    };
    let mut value = name;
    if value.chars().count() < min {
        value = repeat_to_length(&value, min);
    }
    if let Some(max) = max
        && value.chars().count() > max
    {
        value = value.chars().take(max).collect();
    }
    value
}

fn target_length(
    bounds: Option<(usize, Option<usize>)>,
    default_max: usize,
    rng: &mut dyn RngCore,
) -> usize {
    let (min, max) = bounds.unwrap_or((1, None));
    let min = min.max(1);
    let max = max.unwrap_or(default_max).max(min);
    rng.random_range(min..=max)
}

fn prose_of_length(target: usize, rng: &mut dyn RngCore) -> String {
    let mut out = String::new();
    while out.chars().count() < target {
        if !out.is_empty() {
            out.push(' ');
        }
        let word: String = Word().fake_with_rng(rng);
        out.push_str(&word);
    }
    out.chars().take(target).collect()
}

fn repeat_to_length(base: &str, target: usize) -> String {
    if base.is_empty() {
        return "x".repeat(target);
    }
    base.chars().cycle().take(target).collect()
}

/// Generator for decimal fields, honoring declared bounds and fraction
/// digits.
pub struct DecimalGenerator;

impl DecimalGenerator {
    fn default_max() -> Decimal {
        // 9999999999.99
        Decimal::new(999_999_999_999, 2)
    }
}

impl Generator for DecimalGenerator {
    fn id(&self) -> &'static str {
        "primitive.decimal"
    }

    fn supports(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.semantic_type == SemanticType::Decimal
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        let min = descriptor.decimal_min().unwrap_or(Decimal::ZERO);
        let max = descriptor.decimal_max().unwrap_or_else(Self::default_max);
        if min > max {
            return Err(GenerationError::InvalidRange {
                field: descriptor.name.clone(),
                min,
                max,
            });
        }
        let scale = descriptor.fraction_digits().unwrap_or(DEFAULT_SCALE);

        let fraction = Decimal::from_f64(rng.random::<f64>()).unwrap_or(Decimal::ZERO);
        let mut value = min + (max - min) * fraction;
        value = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(scale);
        Ok(FieldValue::Decimal(value))
    }
}

/// Catch-all generator: bounded primitives for every semantic type the
/// engine can represent, an explicit error for the rest.
pub struct DefaultGenerator;

impl Generator for DefaultGenerator {
    fn id(&self) -> &'static str {
        "primitive.default"
    }

    fn supports(&self, _descriptor: &FieldDescriptor) -> bool {
        true
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        match descriptor.semantic_type {
            SemanticType::Integer => Ok(FieldValue::Int(rng.random_range(0..100_i64))),
            SemanticType::Long => Ok(FieldValue::Int(rng.random_range(0..1000_i64))),
            SemanticType::Double => Ok(FieldValue::Float(rng.random::<f64>() * 100.0)),
            SemanticType::Boolean => Ok(FieldValue::Bool(rng.random_bool(0.5))),
            SemanticType::String => {
                let word: String = Word().fake_with_rng(rng);
                Ok(FieldValue::Text(word))
            }
            other => Err(GenerationError::Unsupported {
                field: descriptor.name.clone(),
                semantic_type: other,
            }),
        }
    }
}
