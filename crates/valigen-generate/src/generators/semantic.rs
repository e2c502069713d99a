use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use rand::RngCore;

use valigen_core::{FieldDescriptor, FieldValue, SemanticType};

use crate::errors::GenerationError;
use crate::generators::Generator;

/// The one email pattern the engine understands well enough to satisfy by
/// construction instead of by retry.
pub(crate) const CORPORATE_EMAIL_PATTERN: &str = r".+@company\.com";
pub(crate) const COMPANY_DOMAIN: &str = "company.com";

pub(crate) fn is_email_field(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("email") || lower.contains("mail")
}

/// Lowercase and keep only ASCII letters and digits.
pub(crate) fn sanitize_local_part(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Generator for email-named string fields.
///
/// A field constrained to the corporate pattern gets `first.last@company.com`
/// built from freshly faked names; anything else gets a generic, well-formed
/// address.
pub struct EmailGenerator;

impl Generator for EmailGenerator {
    fn id(&self) -> &'static str {
        "semantic.email"
    }

    fn supports(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.semantic_type == SemanticType::String && is_email_field(&descriptor.name)
    }

    fn generate(
        &self,
        descriptor: &FieldDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        if descriptor.email_pattern() == Some(CORPORATE_EMAIL_PATTERN) {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            let local = join_local_parts(&sanitize_local_part(&first), &sanitize_local_part(&last));
            return Ok(FieldValue::Text(format!("{local}@{COMPANY_DOMAIN}")));
        }
        let email: String = SafeEmail().fake_with_rng(rng);
        Ok(FieldValue::Text(email))
    }
}

pub(crate) fn join_local_parts(first: &str, last: &str) -> String {
    let mut local = String::new();
    if !first.is_empty() {
        local.push_str(first);
    }
    if !last.is_empty() {
        if !local.is_empty() {
            local.push('.');
        }
        local.push_str(last);
    }
    if local.is_empty() {
        local.push_str("user");
    }
    local
}
