//! Price entity - selling and promotion price of a product detail over a date range

use serde::{Deserialize, Serialize};

use super::product::ProductDetail;
use crate::core::entity::{cell, Entity, RecordId};
use crate::core::format::{format_date, format_price};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(default)]
    pub id: RecordId,

    /// `prices/distinct` rows carry the key here, sometimes next to `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_selling: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<ProductDetail>,
}

impl Price {
    /// Row key: `price_id` when the server sent one, `id` otherwise
    pub fn key(&self) -> &RecordId {
        self.price_id.as_ref().unwrap_or(&self.id)
    }
}

impl Entity for Price {
    const NAME: &'static str = "price";
    const NAME_PLURAL: &'static str = "prices";
    const COLUMNS: &'static [&'static str] =
        &["ID", "VERSION", "SELLING", "PROMOTION", "START", "END"];

    fn id(&self) -> &RecordId {
        self.key()
    }

    fn label(&self) -> String {
        match self.product_detail.as_ref().and_then(|d| d.version_name.as_deref()) {
            Some(version) => format!("price {} ({})", self.key(), version),
            None => format!("price {}", self.key()),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.key().to_string(),
            cell(self.product_detail.as_ref().and_then(|d| d.version_name.as_deref())),
            format_price(self.price_selling),
            format_price(self.promotion_price),
            format_date(self.start_date.as_deref()),
            format_date(self.end_date.as_deref()),
        ]
    }
}
