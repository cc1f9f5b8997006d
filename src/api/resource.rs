//! Generic CRUD client for one resource
//!
//! Paths follow the backend conventions:
//!
//! - `GET    /{path}?page=&limit=`
//! - `GET    /{path}/{id}`
//! - `POST   /{path}`
//! - `PUT    /{path}/{id}`
//! - `DELETE /{path}/delete/{id}`
//!
//! Resource-specific sub-paths (search, parent filters, row actions) are
//! described by the [`Resource`] implementation of each entity.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use super::page::{normalize_list, normalize_one};
use super::{Ack, ApiError, HttpClient, PagedResult};
use crate::core::entity::{is_path_segment, Entity, RecordId};
use crate::core::list_view::ListSource;
use crate::core::view::{FilterField, ViewState};

/// Per-row mutations a list view can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Lock,
    Confirm,
}

impl RowAction {
    /// HTTP method and path for this action on record `id`
    pub fn request(&self, path: &str, id: &RecordId) -> (Method, String) {
        match self {
            RowAction::Delete => (Method::DELETE, format!("{}/delete/{}", path, id)),
            RowAction::Lock => (Method::PUT, format!("{}/lock/{}", path, id)),
            RowAction::Confirm => (Method::PUT, format!("{}/confirm/{}", path, id)),
        }
    }

    /// Verb used in confirmation prompts
    pub fn verb(&self) -> &'static str {
        match self {
            RowAction::Delete => "delete",
            RowAction::Lock => "lock",
            RowAction::Confirm => "confirm",
        }
    }
}

impl std::fmt::Display for RowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}

/// REST routing for an entity type
pub trait Resource: Entity {
    /// Collection path (e.g., "products")
    const PATH: &'static str;

    /// Path used for the default paged list
    const LIST_PATH: &'static str = Self::PATH;

    /// Default page size for list views
    const PAGE_SIZE: u32 = 5;

    /// Query parameter for `GET /{path}/search`, if the resource is searchable
    const SEARCH_PARAM: Option<&'static str> = None;

    /// Row actions the backend supports for this resource
    const ACTIONS: &'static [RowAction] = &[RowAction::Delete];

    /// Sub-path serving the view's field filters, if any apply
    fn filter_path(_view: &ViewState) -> Option<String> {
        None
    }
}

/// Type-safe CRUD client for a single resource
#[derive(Debug, Clone)]
pub struct ResourceApi<T: Resource> {
    client: HttpClient,
    list_path: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceApi<T> {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            list_path: T::LIST_PATH,
            _phantom: PhantomData,
        }
    }

    /// Use a different path for the paged list (e.g., full price history)
    pub fn with_list_path(mut self, path: &'static str) -> Self {
        self.list_path = path;
        self
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// URL for a single item: `/{path}/{id}`
    fn item_path(id: &RecordId) -> Result<String, ApiError> {
        Ok(format!("{}/{}", T::PATH, checked(id)?))
    }

    /// Fetch one page of the collection
    pub async fn list(&self, page: u32, limit: u32) -> Result<PagedResult<T>, ApiError> {
        self.list_with(page, limit, Vec::new()).await
    }

    async fn list_with(
        &self,
        page: u32,
        limit: u32,
        mut extra: Vec<(&str, String)>,
    ) -> Result<PagedResult<T>, ApiError> {
        let mut query = vec![("page", page.max(1).to_string()), ("limit", limit.max(1).to_string())];
        query.append(&mut extra);
        self.list_at(self.list_path, &query).await
    }

    /// Fetch any list-shaped sub-path and normalize it
    pub(crate) async fn list_at(&self, path: &str, query: &[(&str, String)]) -> Result<PagedResult<T>, ApiError> {
        let body = self.client.get(path, query).await?;
        normalize_list(body, T::NAME_PLURAL)
    }

    /// Get a record by ID
    pub async fn get(&self, id: &RecordId) -> Result<T, ApiError> {
        let body = self.client.get(&Self::item_path(id)?, &[]).await?;
        normalize_one(body, T::NAME)
    }

    /// Create a new record from a form payload
    pub async fn create<B: Serialize + ?Sized>(&self, form: &B) -> Result<Ack, ApiError> {
        let body = self.client.send(Method::POST, T::PATH, Some(form)).await?;
        Ok(Ack::from_value(body))
    }

    /// Update an existing record by ID
    pub async fn update<B: Serialize + ?Sized>(&self, id: &RecordId, form: &B) -> Result<Ack, ApiError> {
        let body = self.client.send(Method::PUT, &Self::item_path(id)?, Some(form)).await?;
        Ok(Ack::from_value(body))
    }

    /// Delete a record by ID
    pub async fn delete(&self, id: &RecordId) -> Result<Ack, ApiError> {
        self.perform_action(RowAction::Delete, id).await
    }

    /// Search by the resource's search parameter; results form a single page
    pub async fn search(&self, text: &str) -> Result<PagedResult<T>, ApiError> {
        let param = T::SEARCH_PARAM
            .ok_or_else(|| ApiError::Unsupported(format!("{} cannot be searched", T::NAME_PLURAL)))?;
        let path = format!("{}/search", T::PATH);
        self.list_at(&path, &[(param, text.to_string())]).await
    }

    /// Run a row action, checking that the backend supports it
    pub async fn perform_action(&self, action: RowAction, id: &RecordId) -> Result<Ack, ApiError> {
        if !T::ACTIONS.contains(&action) {
            return Err(ApiError::Unsupported(format!(
                "{} cannot be {}ed",
                T::NAME_PLURAL,
                action.verb().trim_end_matches('e')
            )));
        }
        let (method, path) = action.request(T::PATH, checked(id)?);
        let body = if method == Method::DELETE {
            self.client.delete(&path).await?
        } else {
            self.client.send::<()>(method, &path, None).await?
        };
        Ok(Ack::from_value(body))
    }

    /// Fetch whatever the view state describes
    ///
    /// Search wins over field filters; filters served by a sub-path replace
    /// the paged list; a date filter rides along as a query parameter.
    pub async fn fetch_view(&self, view: &ViewState) -> Result<PagedResult<T>, ApiError> {
        if let Some(text) = &view.search {
            debug!(resource = T::PATH, search = %text, "search");
            return self.search(text).await;
        }
        if let Some((_, value)) = view
            .filters
            .iter()
            .find(|(field, value)| **field != FilterField::Date && !is_path_segment(value))
        {
            return Err(ApiError::InvalidId(value.clone()));
        }
        if let Some(path) = T::filter_path(view) {
            debug!(resource = T::PATH, %path, "filtered list");
            return self.list_at(&path, &[]).await;
        }
        let extra = view
            .filter(FilterField::Date)
            .map(|date| vec![("date", date.to_string())])
            .unwrap_or_default();
        self.list_with(view.page, view.page_size, extra).await
    }
}

/// Refuse IDs that would change the request path
pub(crate) fn checked(id: &RecordId) -> Result<&RecordId, ApiError> {
    if id.is_path_safe() {
        Ok(id)
    } else {
        Err(ApiError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl<T: Resource> ListSource for ResourceApi<T> {
    type Item = T;

    async fn fetch(&self, view: &ViewState) -> Result<PagedResult<T>, ApiError> {
        self.fetch_view(view).await
    }

    async fn perform(&self, action: RowAction, id: &RecordId) -> Result<Ack, ApiError> {
        self.perform_action(action, id).await
    }

    fn supports(&self, action: RowAction) -> bool {
        T::ACTIONS.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_action_paths() {
        let id = RecordId::from(7u64);
        assert_eq!(
            RowAction::Delete.request("products", &id),
            (Method::DELETE, "products/delete/7".to_string())
        );
        assert_eq!(
            RowAction::Lock.request("users", &id),
            (Method::PUT, "users/lock/7".to_string())
        );
        assert_eq!(
            RowAction::Confirm.request("orders", &id),
            (Method::PUT, "orders/confirm/7".to_string())
        );
    }

    #[test]
    fn test_unsafe_id_is_refused() {
        assert!(checked(&RecordId::from(7u64)).is_ok());
        assert!(matches!(checked(&RecordId::new("../users/1")), Err(ApiError::InvalidId(_))));
    }
}
