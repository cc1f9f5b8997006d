//! Customer orders and their lines

use serde::{Deserialize, Serialize};

use super::product::ProductDetail;
use crate::core::entity::{cell, Entity, RecordId, Scalar};
use crate::core::format::{format_date, format_price};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,

    #[serde(default, rename = "orderCode", skip_serializing_if = "Option::is_none")]
    pub order_code: Option<String>,

    #[serde(default, rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, rename = "orderDate", skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    #[serde(default, rename = "shippingDate", skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar>,
}

impl Entity for Order {
    const NAME: &'static str = "order";
    const NAME_PLURAL: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "CODE", "CUSTOMER", "PHONE", "ADDRESS", "ORDERED", "SHIPPING", "STATUS",
    ];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.order_code.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.order_code.as_deref()),
            cell(self.full_name.as_deref()),
            cell(self.phone_number.as_deref()),
            cell(self.address.as_deref()),
            cell(self.order_date.as_deref().map(|d| format_date(Some(d)))),
            cell(self.shipping_date.as_deref().map(|d| format_date(Some(d)))),
            cell(self.status.as_ref()),
        ]
    }
}

/// One product line of a customer order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Unit price at the time of the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, rename = "productDetail", skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<ProductDetail>,
}

impl Entity for OrderDetail {
    const NAME: &'static str = "order line";
    const NAME_PLURAL: &'static str = "order lines";
    const COLUMNS: &'static [&'static str] = &["ID", "VERSION", "QTY", "PRICE"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        format!("line {}", self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.product_detail.as_ref().and_then(|d| d.version_name.as_deref())),
            cell(self.quantity),
            format_price(self.price),
        ]
    }
}
