//! Products and their sellable variants (product details)

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Color, Size};
use crate::core::entity::{cell, Entity, RecordId, Scalar};

/// A catalog product; variants live in [`ProductDetail`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image URL, as stored by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Entity for Product {
    const NAME: &'static str = "product";
    const NAME_PLURAL: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "CATEGORY", "DESCRIPTION"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.name.as_deref()),
            cell(self.category.as_ref().and_then(|c| c.name.as_deref())),
            cell(self.description.as_deref()),
        ]
    }
}

/// One size/color variant of a product, with stock on hand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: RecordId,

    #[serde(default, rename = "versionName", skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_sku: Option<Scalar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl ProductDetail {
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.name.as_deref())
    }

    pub fn size_name(&self) -> Option<&str> {
        self.size.as_ref().and_then(|s| s.name.as_deref())
    }

    pub fn color_name(&self) -> Option<&str> {
        self.color.as_ref().and_then(|c| c.name.as_deref())
    }
}

impl Entity for ProductDetail {
    const NAME: &'static str = "product detail";
    const NAME_PLURAL: &'static str = "product details";
    const COLUMNS: &'static [&'static str] =
        &["ID", "VERSION", "SKU", "PRODUCT", "SIZE", "COLOR", "QTY"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.version_name
            .clone()
            .or_else(|| self.product_name().map(str::to_string))
            .unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.version_name.as_deref()),
            cell(self.version_sku.as_ref()),
            cell(self.product_name()),
            cell(self.size_name()),
            cell(self.color_name()),
            cell(self.quantity),
        ]
    }
}
