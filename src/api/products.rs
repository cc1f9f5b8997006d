//! Products API

use serde::Serialize;

use super::resource::{Resource, ResourceApi};
use crate::core::entity::RecordId;
use crate::core::view::{FilterField, ViewState};
use crate::entities::Product;

pub type ProductsApi = ResourceApi<Product>;

impl Resource for Product {
    const PATH: &'static str = "products";
    const SEARCH_PARAM: Option<&'static str> = Some("name");

    fn filter_path(view: &ViewState) -> Option<String> {
        view.filter(FilterField::Category)
            .map(|id| format!("products/category/{}", id))
    }
}

/// Create/update payload for a product
///
/// One product detail is generated server-side per size/color pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "RecordId::is_empty")]
    pub category_id: RecordId,
    pub sizes: Vec<RecordId>,
    pub colors: Vec<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
