use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use valigen_core::{FieldDescriptor, FieldValue, Record, SchemaValidator, Validator, Violation};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};
use crate::introspect::scan_fields;
use crate::rules::{GenerationContext, Rule, RuleEngine};

/// Default bound on generation attempts per build call.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Builds instances of `T` that pass validation.
///
/// Per attempt, every field gets a value from the first applicable source —
/// caller override, context-aware rule, registered generator — and the
/// completed candidate goes through the validator. Validation failure
/// discards the candidate and retries with a fresh context; deterministic
/// configuration errors abort immediately.
///
/// The validator is acquired once here and owned for the builder's
/// lifetime. Randomness comes from a single seedable source threaded to
/// every generator and rule.
pub struct ValidBuilder<T> {
    overrides: HashMap<String, FieldValue>,
    registry: GeneratorRegistry,
    rules: RuleEngine,
    validator: Box<dyn Validator<T>>,
    rng: ChaCha8Rng,
    max_attempts: u32,
}

/// Which mechanism produced a field's value. Recorded once, at the moment
/// of evaluation, so diagnostics never re-run a rule or generator.
enum ValueSource {
    Override,
    Rule(&'static str),
    Generator(&'static str),
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Override => write!(f, "override"),
            ValueSource::Rule(id) => write!(f, "rule:{id}"),
            ValueSource::Generator(id) => write!(f, "generator:{id}"),
        }
    }
}

impl<T: Record> ValidBuilder<T> {
    /// Builder for `T` with the baseline generators, rules, and the
    /// schema-backed validator.
    pub fn for_type() -> Self {
        Self {
            overrides: HashMap::new(),
            registry: GeneratorRegistry::new(),
            rules: RuleEngine::new(),
            validator: Box::new(SchemaValidator),
            rng: ChaCha8Rng::from_os_rng(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Fixes a field to a caller-supplied value. Overrides win over rules
    /// and generators, persist across attempts, and are not revalidated
    /// individually; the last write per name wins.
    pub fn override_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Seeds the random source for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Replaces the default schema-backed validator.
    pub fn with_validator(mut self, validator: Box<dyn Validator<T>>) -> Self {
        self.validator = validator;
        self
    }

    /// Registers a generator taking precedence over the baseline set.
    pub fn register_generator(mut self, generator: Box<dyn Generator>) -> Self {
        self.registry.register(generator);
        self
    }

    pub fn register_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.register(rule);
        self
    }

    /// Builds an instance that passes validation, retrying up to the
    /// attempt bound on validation failure.
    pub fn build_valid(&mut self) -> Result<T, GenerationError> {
        let fields = scan_fields::<T>();
        info!(
            type_name = T::type_name(),
            fields = fields.len(),
            overrides = self.overrides.len(),
            "generation started"
        );

        let mut last_violations: Vec<Violation> = Vec::new();
        for attempt in 1..=self.max_attempts {
            let instance = match self.run_attempt(&fields) {
                Ok(instance) => instance,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(attempt, error = %err, "attempt aborted");
                    continue;
                }
            };

            let violations = self.validator.validate(&instance);
            if violations.is_empty() {
                info!(type_name = T::type_name(), attempt, "valid instance built");
                return Ok(instance);
            }
            for violation in &violations {
                debug!(
                    field = %violation.field,
                    message = %violation.message,
                    "constraint violated"
                );
            }
            warn!(
                attempt,
                violations = violations.len(),
                "candidate rejected by validator"
            );
            last_violations = violations;
        }

        Err(GenerationError::RetriesExhausted {
            type_name: T::type_name(),
            attempts: self.max_attempts,
            violations: last_violations,
        })
    }

    /// One full pass: blank instance, fresh context, every field assigned
    /// in introspected order.
    fn run_attempt(&mut self, fields: &[FieldDescriptor]) -> Result<T, GenerationError> {
        let mut instance = T::construct()?;
        let mut context = GenerationContext::new();

        for descriptor in fields {
            let (value, source) = self.next_value(descriptor, &context)?;
            debug!(field = %descriptor.name, via = %source, value = %value, "field assigned");
            instance.set_field(&descriptor.name, value.clone())?;
            context.insert(descriptor.name.clone(), value);
        }

        Ok(instance)
    }

    /// Override, else rule (once context exists), else generator.
    fn next_value(
        &mut self,
        descriptor: &FieldDescriptor,
        context: &GenerationContext,
    ) -> Result<(FieldValue, ValueSource), GenerationError> {
        if let Some(value) = self.overrides.get(&descriptor.name) {
            return Ok((value.clone(), ValueSource::Override));
        }
        if !context.is_empty()
            && let Some((value, rule_id)) = self.rules.apply(descriptor, context, &mut self.rng)?
        {
            return Ok((value, ValueSource::Rule(rule_id)));
        }
        let generator = self.registry.find(descriptor)?;
        let value = generator.generate(descriptor, &mut self.rng)?;
        Ok((value, ValueSource::Generator(generator.id())))
    }
}
