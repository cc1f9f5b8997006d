//! Catalog lookups and suppliers - plain CRUD resources

use serde::Serialize;

use super::resource::{Resource, ResourceApi};
use crate::entities::{Category, Color, Size, Supplier};

pub type CategoriesApi = ResourceApi<Category>;
pub type ColorsApi = ResourceApi<Color>;
pub type SizesApi = ResourceApi<Size>;
pub type SuppliersApi = ResourceApi<Supplier>;

impl Resource for Category {
    const PATH: &'static str = "categories";
}

impl Resource for Color {
    const PATH: &'static str = "colors";
}

impl Resource for Size {
    const PATH: &'static str = "sizes";
}

impl Resource for Supplier {
    const PATH: &'static str = "suppliers";
}

/// Create/update payload for categories, colors and sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NameForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Color swatch or size value; categories leave it unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupplierForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
