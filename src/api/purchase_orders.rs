//! Purchase orders and purchase order lines API

use reqwest::Method;
use serde::Serialize;

use super::resource::{checked, Resource, ResourceApi};
use super::{Ack, ApiError};
use crate::core::entity::RecordId;
use crate::core::view::{FilterField, ViewState};
use crate::entities::{PurchaseOrder, PurchaseOrderDetail};

pub type PurchaseOrdersApi = ResourceApi<PurchaseOrder>;
pub type PurchaseOrderDetailsApi = ResourceApi<PurchaseOrderDetail>;

/// Quantity used for a purchase order line when none is given
pub const DEFAULT_LINE_QUANTITY: u32 = 1;

impl Resource for PurchaseOrder {
    const PATH: &'static str = "purchase_orders";
}

impl Resource for PurchaseOrderDetail {
    const PATH: &'static str = "purchase_order_details";

    fn filter_path(view: &ViewState) -> Option<String> {
        view.filter(FilterField::PurchaseOrder)
            .map(|id| format!("purchase_order_details/purchase_order/{}", id))
    }
}

/// One product line of a new purchase order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderLine {
    pub product_id: RecordId,
    pub quantity: u32,
}

impl PurchaseOrderLine {
    pub fn new(product_id: RecordId) -> Self {
        Self {
            product_id,
            quantity: DEFAULT_LINE_QUANTITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseOrderForm {
    #[serde(skip_serializing_if = "RecordId::is_empty")]
    pub supplier_id: RecordId,
    pub products: Vec<PurchaseOrderLine>,
}

#[derive(Debug, Serialize)]
struct QuantityForm {
    quantity: u32,
}

impl PurchaseOrderDetailsApi {
    /// Change the ordered quantity of one line
    pub async fn set_quantity(&self, id: &RecordId, quantity: u32) -> Result<Ack, ApiError> {
        let path = format!("{}/{}", PurchaseOrderDetail::PATH, checked(id)?);
        let body = self
            .client()
            .send(Method::PUT, &path, Some(&QuantityForm { quantity }))
            .await?;
        Ok(Ack::from_value(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_defaults_to_one() {
        let line = PurchaseOrderLine::new(RecordId::from(4u64));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_lines_filtered_by_order() {
        let mut view = ViewState::new(5);
        view.set_filter(FilterField::PurchaseOrder, "12");
        assert_eq!(
            PurchaseOrderDetail::filter_path(&view).as_deref(),
            Some("purchase_order_details/purchase_order/12")
        );
    }
}
