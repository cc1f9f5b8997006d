//! Inventory entity - stock counts per product detail

use serde::{Deserialize, Serialize};

use super::product::ProductDetail;
use crate::core::entity::{cell, Entity, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: RecordId,

    /// Quantity received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Quantity currently on hand
    #[serde(default, rename = "inventoryQuantity", skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    #[serde(default, rename = "productDetail", skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<ProductDetail>,
}

impl Entity for Inventory {
    const NAME: &'static str = "inventory";
    const NAME_PLURAL: &'static str = "inventories";
    const COLUMNS: &'static [&'static str] = &["ID", "VERSION", "RECEIVED", "ON HAND"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.product_detail
            .as_ref()
            .and_then(|d| d.version_name.clone())
            .unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.product_detail.as_ref().and_then(|d| d.version_name.as_deref())),
            cell(self.quantity),
            cell(self.inventory_quantity),
        ]
    }
}
