//! Form validation against the embedded JSON schemas
//!
//! Forms are checked before anything is sent to the server: a form with a
//! violation never produces a request.

use jsonschema::error::ValidationErrorKind;
use miette::Diagnostic;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::registry::{Form, SchemaRegistry};

/// A single field-level problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path, e.g. `name` or `products/0/quantity` (empty for the form itself)
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// A form failed validation
#[derive(Debug, Error, Diagnostic)]
#[error("invalid {form} form: {}", summarize(.violations))]
#[diagnostic(
    code(stockroom::form::invalid),
    help("fix the listed fields and resubmit; nothing was sent to the server")
)]
pub struct ValidationError {
    pub form: Form,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Whether `field` has at least one violation
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An embedded schema failed to load or compile
#[derive(Debug, Error, Diagnostic)]
#[error("schema for {form} form is unusable: {reason}")]
#[diagnostic(code(stockroom::schema::broken))]
pub struct SchemaError {
    pub form: Form,
    pub reason: String,
}

/// Compiled validators for every form
pub struct FormValidator {
    validators: Vec<(Form, jsonschema::Validator)>,
}

impl FormValidator {
    /// Compile all embedded schemas
    pub fn new(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let mut validators = Vec::with_capacity(Form::all().len());
        for form in Form::all() {
            let source = registry.get(*form).ok_or_else(|| SchemaError {
                form: *form,
                reason: "not embedded".to_string(),
            })?;
            let schema: Value = serde_json::from_str(source).map_err(|e| SchemaError {
                form: *form,
                reason: e.to_string(),
            })?;
            let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError {
                form: *form,
                reason: e.to_string(),
            })?;
            validators.push((*form, validator));
        }
        Ok(Self { validators })
    }

    /// Validate a serialized form, collecting every violation
    pub fn validate(&self, form: Form, value: &Value) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if let Some((_, validator)) = self.validators.iter().find(|(f, _)| *f == form) {
            for error in validator.iter_errors(value) {
                violations.push(to_violation(&error));
            }
        }

        if form == Form::Register {
            check_passwords_match(value, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { form, violations })
        }
    }

    /// Serialize and validate a typed form payload
    pub fn check<T: Serialize>(&self, form: Form, payload: &T) -> Result<(), ValidationError> {
        let value = serde_json::to_value(payload).map_err(|e| ValidationError {
            form,
            violations: vec![Violation {
                field: String::new(),
                message: e.to_string(),
            }],
        })?;
        self.validate(form, &value)
    }
}

fn to_violation(error: &jsonschema::ValidationError<'_>) -> Violation {
    let path = error.instance_path.to_string();
    let path = path.trim_start_matches('/');

    if let ValidationErrorKind::Required { property } = &error.kind {
        let name = property
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| property.to_string());
        let field = if path.is_empty() {
            name
        } else {
            format!("{}/{}", path, name)
        };
        return Violation {
            field,
            message: "is required".to_string(),
        };
    }

    Violation {
        field: path.to_string(),
        message: error.to_string(),
    }
}

fn check_passwords_match(value: &Value, violations: &mut Vec<Violation>) {
    let password = value.get("password").and_then(Value::as_str);
    let retype = value.get("retype_password").and_then(Value::as_str);
    if let (Some(password), Some(retype)) = (password, retype) {
        if password != retype {
            violations.push(Violation {
                field: "retype_password".to_string(),
                message: "passwords do not match".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> FormValidator {
        FormValidator::new(&SchemaRegistry::default()).unwrap()
    }

    #[test]
    fn test_all_schemas_compile() {
        assert_eq!(validator().validators.len(), Form::all().len());
    }

    #[test]
    fn test_missing_name_is_required() {
        let err = validator().validate(Form::Name, &json!({})).unwrap_err();
        assert!(err.has_field("name"));
        assert_eq!(err.violations[0].message, "is required");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = validator().validate(Form::Name, &json!({"name": "   "})).unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_valid_product() {
        let form = json!({"name": "Áo", "category_id": "2", "sizes": ["1"], "colors": ["3"]});
        assert!(validator().validate(Form::Product, &form).is_ok());
    }

    #[test]
    fn test_product_needs_sizes_and_colors() {
        let form = json!({"name": "Áo", "category_id": "2", "sizes": [], "colors": []});
        let err = validator().validate(Form::Product, &form).unwrap_err();
        assert!(err.has_field("sizes"));
        assert!(err.has_field("colors"));
    }

    #[test]
    fn test_register_rules() {
        let form = json!({
            "fullname": "Trần B",
            "phone_number": "09123",
            "password": "abc",
            "retype_password": "abd",
            "role_id": "2"
        });
        let err = validator().validate(Form::Register, &form).unwrap_err();
        assert!(err.has_field("phone_number"));
        assert!(err.has_field("password"));
        assert!(err.has_field("retype_password"));
        assert_eq!(err.violation_count(), 3);
    }

    #[test]
    fn test_register_ok() {
        let form = json!({
            "fullname": "Trần B",
            "phone_number": "0912345678",
            "password": "secret1",
            "retype_password": "secret1",
            "role_id": "2"
        });
        assert!(validator().validate(Form::Register, &form).is_ok());
    }

    #[test]
    fn test_purchase_order_line_quantity() {
        let form = json!({"supplier_id": "1", "products": [{"product_id": "4", "quantity": 0}]});
        let err = validator().validate(Form::PurchaseOrder, &form).unwrap_err();
        assert!(err.has_field("products/0/quantity"));

        let empty = json!({"supplier_id": "1", "products": []});
        assert!(validator().validate(Form::PurchaseOrder, &empty).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let form = json!({"product_detail_id": "10", "price_selling": -1});
        let err = validator().validate(Form::Price, &form).unwrap_err();
        assert!(err.has_field("price_selling"));
    }

    #[test]
    fn test_error_display_lists_fields() {
        let err = validator().validate(Form::Login, &json!({})).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("invalid login form"));
        assert!(text.contains("phone_number: is required"));
        assert!(text.contains("password: is required"));
    }
}
