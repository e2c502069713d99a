use tracing_subscriber::EnvFilter;

use valigen_core::{Constraint, Error, FieldDescriptor, FieldValue, Record, SemanticType};
use valigen_generate::ValidBuilder;

/// Minimal record declaration: an employee whose work email must match the
/// corporate pattern and is derived from the generated names.
#[derive(Debug, Default)]
struct Employee {
    first_name: Option<String>,
    last_name: Option<String>,
    work_email: Option<String>,
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
                        pattern: Some(r".+@company\.com".to_string()),
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
            other => Err(Error::TypeMismatch {
                field: name.to_string(),
                expected: "text",
                actual: other.type_name(),
            }),
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let generated = ValidBuilder::<Employee>::for_type().build_valid()?;
    println!(
        "generated: {} {} <{}>",
        generated.first_name.as_deref().unwrap_or(""),
        generated.last_name.as_deref().unwrap_or(""),
        generated.work_email.as_deref().unwrap_or("")
    );

    let pinned = ValidBuilder::<Employee>::for_type()
        .override_field("first_name", "Anna")
        .override_field("last_name", "Smith")
        .build_valid()?;
    println!(
        "with overrides: {}",
        pinned.work_email.as_deref().unwrap_or("")
    );

    Ok(())
}
