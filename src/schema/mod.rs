//! Schema module - embedded form schemas and validation

pub mod registry;
pub mod validate;

pub use registry::{Form, SchemaRegistry};
pub use validate::{FormValidator, SchemaError, ValidationError, Violation};
