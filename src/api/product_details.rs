//! Product details API - sellable size/color variants

use super::resource::{Resource, ResourceApi};
use crate::core::view::{FilterField, ViewState};
use crate::entities::ProductDetail;

pub type ProductDetailsApi = ResourceApi<ProductDetail>;

impl Resource for ProductDetail {
    const PATH: &'static str = "product_details";
    const PAGE_SIZE: u32 = 10;
    const SEARCH_PARAM: Option<&'static str> = Some("name");

    /// Size and color together use the combined sub-path; a product filter
    /// applies only when neither is set.
    fn filter_path(view: &ViewState) -> Option<String> {
        let size = view.filter(FilterField::Size);
        let color = view.filter(FilterField::Color);
        match (size, color) {
            (Some(size), Some(color)) => Some(format!("product_details/{}/{}", size, color)),
            (Some(size), None) => Some(format!("product_details/size/{}", size)),
            (None, Some(color)) => Some(format!("product_details/color/{}", color)),
            (None, None) => view
                .filter(FilterField::Product)
                .map(|id| format!("product_details/product/{}", id)),
        }
    }
}
