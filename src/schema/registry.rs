//! Schema registry - embedded JSON schemas for submitted forms

use rust_embed::Embed;
use std::collections::HashMap;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// Forms the client can submit, each checked against its own schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// Category, color and size create/update
    Name,
    Product,
    Register,
    Supplier,
    Price,
    PurchaseOrder,
    Login,
}

impl Form {
    pub fn all() -> &'static [Form] {
        &[
            Form::Name,
            Form::Product,
            Form::Register,
            Form::Supplier,
            Form::Price,
            Form::PurchaseOrder,
            Form::Login,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Name => "name",
            Form::Product => "product",
            Form::Register => "register",
            Form::Supplier => "supplier",
            Form::Price => "price",
            Form::PurchaseOrder => "purchase_order",
            Form::Login => "login",
        }
    }

    fn filename(&self) -> String {
        format!("{}.schema.json", self.as_str())
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry of JSON schemas for form validation
pub struct SchemaRegistry {
    schemas: HashMap<Form, String>,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded schemas
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        for form in Form::all() {
            if let Some(file) = EmbeddedSchemas::get(&form.filename()) {
                if let Ok(content) = std::str::from_utf8(&file.data) {
                    schemas.insert(*form, content.to_string());
                }
            }
        }

        Self { schemas }
    }

    /// Get the JSON schema source for a form
    pub fn get(&self, form: Form) -> Option<&str> {
        self.schemas.get(&form).map(|s| s.as_str())
    }

    pub fn has_schema(&self, form: Form) -> bool {
        self.schemas.contains_key(&form)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
