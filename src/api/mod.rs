//! REST client layer - one module per backend resource
//!
//! Every resource module builds paths and query strings and delegates to the
//! shared [`HttpClient`]. List endpoints are normalized into [`PagedResult`]
//! whatever envelope the server happens to use.

pub mod catalog;
pub mod http;
pub mod inventories;
pub mod orders;
pub mod page;
pub mod prices;
pub mod product_details;
pub mod products;
pub mod purchase_orders;
pub mod resource;
pub mod users;

pub use http::{HttpClient, FALLBACK_MESSAGE};
pub use page::PagedResult;
pub use resource::{Resource, ResourceApi, RowAction};

use serde::Deserialize;

/// Client-side API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("decode: {0}")]
    Decode(String),

    #[error("auth: {0}")]
    Auth(String),

    #[error("{0}")]
    Unsupported(String),

    /// An ID or filter value that would not stay a single path segment
    #[error("invalid record ID {0:?}")]
    InvalidId(String),
}

impl ApiError {
    /// Text shown to the user in an error banner
    ///
    /// Server errors surface the body's `message` field as-is; every other
    /// failure collapses to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Auth(message) | ApiError::Unsupported(message) => message.clone(),
            ApiError::InvalidId(_) => self.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Acknowledgement returned by mutation endpoints (`{ "message": ... }`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub(crate) fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
