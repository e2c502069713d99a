pub mod primitives;
pub mod semantic;
pub mod temporal;

use rand::RngCore;

use valigen_core::{FieldDescriptor, FieldValue};

use crate::errors::GenerationError;

pub use primitives::{DecimalGenerator, DefaultGenerator, StringGenerator};
pub use semantic::EmailGenerator;
pub use temporal::{DateGenerator, DateTimeGenerator};

/// A value generator for a single field.
///
/// Generators see only the field's own descriptor; cross-field derivation
/// belongs to rules.
pub trait Generator {
    fn id(&self) -> &'static str;

    /// Whether this generator claims the field.
    fn supports(&self, descriptor: &FieldDescriptor) -> bool;

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError>;
}

/// Ordered generator set; the first generator whose `supports` returns true
/// claims the field.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Baseline registry: email, string, decimal, date, date-time, and the
    /// catch-all default, in that precedence order.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.generators.push(Box::new(EmailGenerator));
        registry.generators.push(Box::new(StringGenerator));
        registry.generators.push(Box::new(DecimalGenerator));
        registry.generators.push(Box::new(DateGenerator));
        registry.generators.push(Box::new(DateTimeGenerator));
        registry.generators.push(Box::new(DefaultGenerator));
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Registers a generator ahead of the existing set. The baseline ends
    /// with a catch-all, so additions take precedence over it.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(0, generator);
    }

    /// First registered generator claiming the field.
    pub fn find(&self, descriptor: &FieldDescriptor) -> Result<&dyn Generator, GenerationError> {
        self.generators
            .iter()
            .find(|generator| generator.supports(descriptor))
            .map(|generator| generator.as_ref())
            .ok_or_else(|| GenerationError::NoGeneratorFound(descriptor.name.clone()))
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
