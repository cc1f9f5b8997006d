//! Prices API
//!
//! The default list is `prices/distinct` (current price per product detail);
//! the full price history is served by `prices`.

use serde::Serialize;
use tracing::warn;

use super::resource::{Resource, ResourceApi};
use super::{Ack, ApiError, HttpClient};
use crate::core::entity::RecordId;
use crate::entities::Price;

pub type PricesApi = ResourceApi<Price>;

/// Path of the full, non-deduplicated price list
pub const ALL_PRICES_PATH: &str = "prices";

impl Resource for Price {
    const PATH: &'static str = "prices";
    const LIST_PATH: &'static str = "prices/distinct";
}

/// Prices client listing the full history instead of the distinct view
pub fn all_prices(client: HttpClient) -> PricesApi {
    PricesApi::new(client).with_list_path(ALL_PRICES_PATH)
}

/// Create payload for one product detail's price
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceForm {
    #[serde(skip_serializing_if = "RecordId::is_empty")]
    pub product_detail_id: RecordId,
    pub price_selling: Option<f64>,
    pub promotion_price: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Result of creating prices for several product details
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub created: Vec<RecordId>,
    pub failed: Vec<(RecordId, ApiError)>,
}

impl BatchOutcome {
    /// The batch counts as a success when at least one price was created
    pub fn is_success(&self) -> bool {
        !self.created.is_empty()
    }
}

impl PricesApi {
    /// Create one price per form, continuing past individual failures
    pub async fn create_batch(&self, forms: &[PriceForm]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for form in forms {
            match self.create(form).await {
                Ok(Ack { .. }) => outcome.created.push(form.product_detail_id.clone()),
                Err(e) => {
                    warn!(detail = %form.product_detail_id, error = %e, "price not created");
                    outcome.failed.push((form.product_detail_id.clone(), e));
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_prices_serialize_null_dates() {
        let form = PriceForm {
            product_detail_id: RecordId::from(10u64),
            price_selling: Some(250000.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["product_detail_id"], "10");
        assert!(value["end_date"].is_null());
        assert!(value["promotion_price"].is_null());
    }

    #[test]
    fn test_batch_success_needs_one_created() {
        let mut outcome = BatchOutcome::default();
        assert!(!outcome.is_success());
        outcome.created.push(RecordId::from(1u64));
        assert!(outcome.is_success());
    }
}
