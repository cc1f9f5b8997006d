//! Entity type definitions

pub mod catalog;
pub mod inventory;
pub mod order;
pub mod price;
pub mod product;
pub mod purchase_order;
pub mod supplier;
pub mod user;

pub use catalog::{Category, Color, Size};
pub use inventory::Inventory;
pub use order::{Order, OrderDetail};
pub use price::Price;
pub use product::{Product, ProductDetail};
pub use purchase_order::{PurchaseOrder, PurchaseOrderDetail};
pub use supplier::Supplier;
pub use user::User;
