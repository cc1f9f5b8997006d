//! Core module - fundamental types and the list-view machinery

pub mod banner;
pub mod config;
pub mod entity;
pub mod format;
pub mod list_view;
pub mod view;

pub use banner::{TransientBanner, DEFAULT_BANNER_DURATION};
pub use config::{Config, ConfigError};
pub use entity::{Entity, RecordId, Scalar};
pub use list_view::{
    Commit, ListController, ListSource, ListView, Mutation, PendingAction, RequestToken,
    ViewSnapshot,
};
pub use view::{FilterField, ViewState};
