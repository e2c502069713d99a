use std::collections::HashMap;

use rand::RngCore;

use valigen_core::{FieldDescriptor, FieldValue};

use crate::errors::GenerationError;
use crate::generators::semantic::{
    COMPANY_DOMAIN, CORPORATE_EMAIL_PATTERN, is_email_field, join_local_parts, sanitize_local_part,
};

/// Values already assigned within the current attempt, keyed by field name.
/// Empty at attempt start, grows in field order, discarded at attempt end.
pub type GenerationContext = HashMap<String, FieldValue>;

/// A context-aware derivation: produces a field's value from the values of
/// previously generated sibling fields.
pub trait Rule {
    fn id(&self) -> &'static str;

    /// Higher priorities are evaluated first.
    fn priority(&self) -> i32 {
        0
    }

    fn matches(&self, descriptor: &FieldDescriptor, context: &GenerationContext) -> bool;

    /// Called only when `matches` returned true for the same inputs.
    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        context: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError>;
}

/// Ordered rule set, kept sorted by descending priority.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Engine with the baseline rule set.
    pub fn new() -> Self {
        let mut engine = Self::empty();
        engine.register(Box::new(EmailFromNameRule));
        engine
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
        // Stable sort: equal priorities keep registration order.
        self.rules
            .sort_by_key(|rule| std::cmp::Reverse(rule.priority()));
    }

    /// Result of the first matching rule, together with the rule id for
    /// diagnostics. Evaluated exactly once per field.
    pub fn apply(
        &self,
        descriptor: &FieldDescriptor,
        context: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<Option<(FieldValue, &'static str)>, GenerationError> {
        for rule in &self.rules {
            if rule.matches(descriptor, context) {
                let value = rule.generate(descriptor, context, rng)?;
                return Ok(Some((value, rule.id())));
            }
        }
        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Context keys that can carry a person name, in lookup order.
const NAME_KEYS: [&str; 9] = [
    "firstName",
    "first_name",
    "givenName",
    "lastName",
    "last_name",
    "surname",
    "name",
    "fullName",
    "full_name",
];
const FIRST_NAME_KEYS: [&str; 4] = ["firstName", "first_name", "givenName", "name"];
const LAST_NAME_KEYS: [&str; 3] = ["lastName", "last_name", "surname"];

/// Derives a corporate email from name fields already present in the
/// context: `first.last@company.com`.
pub struct EmailFromNameRule;

impl Rule for EmailFromNameRule {
    fn id(&self) -> &'static str {
        "derive.email_from_name"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn matches(&self, descriptor: &FieldDescriptor, context: &GenerationContext) -> bool {
        if !is_email_field(&descriptor.name) {
            return false;
        }
        // Applies when the pattern is absent, unrestricted, or the corporate
        // shape this rule produces.
        if let Some(pattern) = descriptor.email_pattern()
            && pattern != CORPORATE_EMAIL_PATTERN
        {
            return false;
        }
        NAME_KEYS.iter().any(|key| context.contains_key(*key))
    }

    fn generate(
        &self,
        _descriptor: &FieldDescriptor,
        context: &GenerationContext,
        _rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        let first = extract_name(context, &FIRST_NAME_KEYS);
        let last = extract_name(context, &LAST_NAME_KEYS);
        let local = join_local_parts(
            &first.map(|name| sanitize_local_part(&name)).unwrap_or_default(),
            &last.map(|name| sanitize_local_part(&name)).unwrap_or_default(),
        );
        Ok(FieldValue::Text(format!("{local}@{COMPANY_DOMAIN}")))
    }
}

/// First non-blank text value among the candidate keys.
fn extract_name(context: &GenerationContext, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if let Some(value) = context.get(*candidate)
            && let Some(text) = value.as_str()
            && !text.trim().is_empty()
        {
            return Some(text.trim().to_string());
        }
    }
    None
}
