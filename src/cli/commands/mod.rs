pub mod browse;
pub mod catalog;
pub mod completions;
pub mod config;
pub mod detail;
pub mod inventory;
pub mod login;
pub mod order;
pub mod price;
pub mod product;
pub mod purchase_order;
pub mod supplier;
pub mod user;
