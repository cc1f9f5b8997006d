//! Inventories API

use super::resource::{Resource, ResourceApi};
use crate::entities::Inventory;

pub type InventoriesApi = ResourceApi<Inventory>;

impl Resource for Inventory {
    const PATH: &'static str = "inventories";
    const PAGE_SIZE: u32 = 2;
    const SEARCH_PARAM: Option<&'static str> = Some("versionName");
}
