//! Customer orders API

use super::resource::{Resource, ResourceApi, RowAction};
use crate::core::view::{FilterField, ViewState};
use crate::entities::{Order, OrderDetail};

pub type OrdersApi = ResourceApi<Order>;
pub type OrderDetailsApi = ResourceApi<OrderDetail>;

impl Resource for Order {
    const PATH: &'static str = "orders";
    const ACTIONS: &'static [RowAction] = &[RowAction::Delete, RowAction::Confirm];
}

impl Resource for OrderDetail {
    const PATH: &'static str = "order_details";

    fn filter_path(view: &ViewState) -> Option<String> {
        view.filter(FilterField::Order)
            .map(|id| format!("order_details/order/{}", id))
    }
}
