//! Purchase orders placed with suppliers, and their product lines

use serde::{Deserialize, Serialize};

use super::product::ProductDetail;
use crate::core::entity::{cell, Entity, RecordId, Scalar};
use crate::core::format::{format_date, format_price};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, rename = "orderDate", skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    #[serde(default, rename = "shippingDate", skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
}

impl Entity for PurchaseOrder {
    const NAME: &'static str = "purchase order";
    const NAME_PLURAL: &'static str = "purchase orders";
    const COLUMNS: &'static [&'static str] =
        &["ID", "CODE", "SUPPLIER", "ORDERED", "SHIPPING", "STATUS"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.code.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.code.as_deref()),
            cell(self.supplier_name.as_deref()),
            cell(self.order_date.as_deref().map(|d| format_date(Some(d)))),
            cell(self.shipping_date.as_deref().map(|d| format_date(Some(d)))),
            cell(self.status.as_ref()),
        ]
    }
}

/// One product line of a purchase order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDetail {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, rename = "productDetail", skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<ProductDetail>,

    #[serde(default, rename = "purchaseOrderId", skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<PurchaseOrder>,
}

impl Entity for PurchaseOrderDetail {
    const NAME: &'static str = "purchase order line";
    const NAME_PLURAL: &'static str = "purchase order lines";
    const COLUMNS: &'static [&'static str] =
        &["ID", "PO", "PRODUCT", "SIZE", "COLOR", "QTY", "PRICE"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        let product = self.product_detail.as_ref().and_then(|d| d.product_name());
        match product {
            Some(name) => format!("line {} ({})", self.id, name),
            None => format!("line {}", self.id),
        }
    }

    fn cells(&self) -> Vec<String> {
        let detail = self.product_detail.as_ref();
        vec![
            self.id.to_string(),
            cell(self.purchase_order.as_ref().and_then(|po| po.code.as_deref())),
            cell(detail.and_then(ProductDetail::product_name)),
            cell(detail.and_then(ProductDetail::size_name)),
            cell(detail.and_then(ProductDetail::color_name)),
            cell(self.quantity),
            format_price(self.price),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_order_missing_dates_blank() {
        let po: PurchaseOrder =
            serde_json::from_str(r#"{"id": 1, "code": "PO-001", "status": 0, "supplier_name": "ACME"}"#)
                .unwrap();
        assert_eq!(po.cells(), vec!["1", "PO-001", "ACME", "", "", "0"]);
    }

    #[test]
    fn test_line_reads_nested_order() {
        let json = r#"{
            "id": 4,
            "quantity": 12,
            "productDetail": {"id": 10, "product": {"id": 1, "name": "Áo"}, "color": {"id": 2, "name": "Xanh"}},
            "purchaseOrderId": {"id": 1, "code": "PO-001"}
        }"#;
        let line: PurchaseOrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(line.cells(), vec!["4", "PO-001", "Áo", "", "Xanh", "12", ""]);
        assert_eq!(line.label(), "line 4 (Áo)");
    }
}
