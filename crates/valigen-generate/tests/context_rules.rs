use rand::RngCore;

use valigen_core::{
    Constraint, Error, FieldDescriptor, FieldValue, Record, SemanticType,
};
use valigen_generate::{GenerationContext, GenerationError, Rule, ValidBuilder};

mod common;

use common::Employee;

fn sanitized(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[test]
fn derives_corporate_email_from_generated_names() {
    common::init_tracing();
    let employee = ValidBuilder::<Employee>::for_type()
        .with_seed(42)
        .build_valid()
        .expect("valid employee");

    let first = employee.first_name.expect("first name");
    let last = employee.last_name.expect("last name");
    let email = employee.work_email.expect("work email");
    assert_eq!(
        email,
        format!("{}.{}@company.com", sanitized(&first), sanitized(&last))
    );
}

#[test]
fn derives_email_from_overridden_names() {
    let employee = ValidBuilder::<Employee>::for_type()
        .override_field("first_name", "John")
        .override_field("last_name", "Doe")
        .build_valid()
        .expect("valid employee");

    assert_eq!(employee.first_name.as_deref(), Some("John"));
    assert_eq!(employee.last_name.as_deref(), Some("Doe"));
    assert_eq!(employee.work_email.as_deref(), Some("john.doe@company.com"));
}

#[test]
fn normalizes_noisy_names_into_the_local_part() {
    let employee = ValidBuilder::<Employee>::for_type()
        .override_field("first_name", "John-Doe!")
        .override_field("last_name", "Smith_123")
        .build_valid()
        .expect("valid employee");

    assert_eq!(
        employee.work_email.as_deref(),
        Some("johndoe.smith123@company.com")
    );
}

/// Profile with a single full-name field feeding the email rule.
#[derive(Debug, Default)]
struct Profile {
    name: Option<String>,
    contact_email: Option<String>,
}

impl Record for Profile {
    fn type_name() -> &'static str {
        "Profile"
    }

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", SemanticType::String, vec![Constraint::Required]),
            FieldDescriptor::new(
                "contact_email",
                SemanticType::String,
                vec![Constraint::Required, Constraint::Email { pattern: None }],
            ),
        ]
    }

    fn construct() -> valigen_core::Result<Self> {
        Ok(Self::default())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> valigen_core::Result<()> {
        let slot = match name {
            "name" => &mut self.name,
            "contact_email" => &mut self.contact_email,
            _ => return Err(Error::UnknownField(name.to_string())),
        };
        match value {
            FieldValue::Text(text) => {
                *slot = Some(text);
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                field: name.to_string(),
                expected: "text",
                actual: other.type_name(),
            }),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let slot = match name {
            "name" => &self.name,
            "contact_email" => &self.contact_email,
            _ => return None,
        };
        Some(
            slot.clone()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Null),
        )
    }
}

#[test]
fn full_name_alone_feeds_the_local_part() {
    let profile = ValidBuilder::<Profile>::for_type()
        .override_field("name", "Mary Jane")
        .build_valid()
        .expect("valid profile");

    assert_eq!(
        profile.contact_email.as_deref(),
        Some("maryjane@company.com")
    );
}

struct PinnedEmailRule;

impl Rule for PinnedEmailRule {
    fn id(&self) -> &'static str {
        "test.pinned_email"
    }

    fn priority(&self) -> i32 {
        200
    }

    fn matches(&self, descriptor: &FieldDescriptor, _context: &GenerationContext) -> bool {
        descriptor.name.to_lowercase().contains("email")
    }

    fn generate(
        &self,
        _descriptor: &FieldDescriptor,
        _context: &GenerationContext,
        _rng: &mut dyn RngCore,
    ) -> Result<FieldValue, GenerationError> {
        Ok(FieldValue::Text("pinned@company.com".to_string()))
    }
}

#[test]
fn higher_priority_rules_preempt_the_baseline() {
    let employee = ValidBuilder::<Employee>::for_type()
        .register_rule(Box::new(PinnedEmailRule))
        .override_field("first_name", "John")
        .override_field("last_name", "Doe")
        .build_valid()
        .expect("valid employee");

    assert_eq!(employee.work_email.as_deref(), Some("pinned@company.com"));
}

#[test]
fn overrides_preempt_rules_and_generators() {
    let employee = ValidBuilder::<Employee>::for_type()
        .override_field("first_name", "Anna")
        .override_field("work_email", "anna@company.com")
        .build_valid()
        .expect("valid employee");

    assert_eq!(employee.first_name.as_deref(), Some("Anna"));
    assert_eq!(employee.work_email.as_deref(), Some("anna@company.com"));
}
