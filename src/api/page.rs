//! Paged result normalization
//!
//! The backend answers list requests with several envelopes:
//!
//! - `{ "data": { "content": [...], "totalPages": N } }` for paged lists
//! - `{ "data": [...] }` for unpaged lists
//! - `{ "users": [...] }` for the user list
//! - a bare `[...]` from some search endpoints
//!
//! All of them collapse into one [`PagedResult`] here, so nothing above the
//! client layer needs to guess at shapes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

/// A slice of records plus the total page count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> PagedResult<T> {
    /// An unpaged collection, treated as a single page
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn one_page() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageBody<T> {
    content: Vec<T>,
    #[serde(default = "one_page")]
    total_pages: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Paged { data: PageBody<T> },
    Data { data: Vec<T> },
    Users { users: Vec<T> },
    Bare(Vec<T>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

/// Normalize any known list envelope into a [`PagedResult`]
pub fn normalize_list<T: DeserializeOwned>(body: Value, what: &str) -> Result<PagedResult<T>, ApiError> {
    // `{"data": null}` shows up for empty search results
    if body.is_null() || body.get("data").is_some_and(Value::is_null) {
        return Ok(PagedResult::single(Vec::new()));
    }

    // Shape first, rows second, so a bad row reports its own serde error
    let (rows, total_pages) = match serde_json::from_value::<ListEnvelope<Value>>(body) {
        Ok(ListEnvelope::Paged { data }) => (data.content, data.total_pages.max(1)),
        Ok(ListEnvelope::Data { data }) => (data, 1),
        Ok(ListEnvelope::Users { users }) => (users, 1),
        Ok(ListEnvelope::Bare(items)) => (items, 1),
        Err(e) => {
            return Err(ApiError::Decode(format!("unrecognized list response for {}: {}", what, e)));
        }
    };
    let items = serde_json::from_value::<Vec<T>>(Value::Array(rows))
        .map_err(|e| ApiError::Decode(format!("invalid {} row: {}", what, e)))?;
    Ok(PagedResult { items, total_pages })
}

/// Normalize a single-record response (`{ "data": {...} }` or a bare object)
pub fn normalize_one<T: DeserializeOwned>(body: Value, what: &str) -> Result<T, ApiError> {
    serde_json::from_value::<OneEnvelope<T>>(body)
        .map(|env| match env {
            OneEnvelope::Wrapped { data } => data,
            OneEnvelope::Bare(item) => item,
        })
        .map_err(|e| ApiError::Decode(format!("unrecognized record response for {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
        name: String,
    }

    #[test]
    fn test_paged_envelope() {
        let body = json!({"data": {"content": [{"id": 1, "name": "a"}], "totalPages": 4}});
        let page: PagedResult<Row> = normalize_list(body, "rows").unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items, vec![Row { id: 1, name: "a".into() }]);
    }

    #[test]
    fn test_paged_envelope_zero_pages_clamped() {
        let body = json!({"data": {"content": [], "totalPages": 0}});
        let page: PagedResult<Row> = normalize_list(body, "rows").unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_unpaged_envelopes_are_one_page() {
        let data = json!({"data": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]});
        let users = json!({"users": [{"id": 3, "name": "c"}]});
        let bare = json!([{"id": 4, "name": "d"}]);

        let page: PagedResult<Row> = normalize_list(data, "rows").unwrap();
        assert_eq!((page.items.len(), page.total_pages), (2, 1));
        let page: PagedResult<Row> = normalize_list(users, "rows").unwrap();
        assert_eq!(page.items[0].id, 3);
        let page: PagedResult<Row> = normalize_list(bare, "rows").unwrap();
        assert_eq!(page.items[0].name, "d");
    }

    #[test]
    fn test_server_order_preserved() {
        let body = json!({"data": [{"id": 9, "name": "z"}, {"id": 1, "name": "a"}]});
        let page: PagedResult<Row> = normalize_list(body, "rows").unwrap();
        let ids: Vec<u32> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[test]
    fn test_null_data_is_empty() {
        let page: PagedResult<Row> = normalize_list(json!({"data": null}), "rows").unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_unknown_shape_is_decode_error() {
        let err = normalize_list::<Row>(json!({"items": []}), "rows").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_bad_row_keeps_serde_detail() {
        let body = json!({"data": {"content": [{"id": 1, "name": "a"}, {"id": "x", "name": "b"}], "totalPages": 1}});
        match normalize_list::<Row>(body, "rows") {
            Err(ApiError::Decode(detail)) => {
                assert!(detail.starts_with("invalid rows row"), "{}", detail);
                assert!(detail.contains("invalid type"), "{}", detail);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_record_envelopes() {
        let wrapped: Row = normalize_one(json!({"data": {"id": 1, "name": "a"}}), "row").unwrap();
        let bare: Row = normalize_one(json!({"id": 2, "name": "b"}), "row").unwrap();
        assert_eq!(wrapped.id, 1);
        assert_eq!(bare.id, 2);
    }
}
