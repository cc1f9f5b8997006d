//! List-view synchronization
//!
//! Keeps a displayed table consistent with a remote paged collection while
//! the user pages, searches, filters and mutates rows.
//!
//! - Every state change issues exactly one fetch.
//! - A successful fetch replaces the whole collection and the page count; a
//!   failed one leaves the collection alone and raises the error banner.
//! - Fetches may overlap. Each takes a [`RequestToken`] and only the most
//!   recently issued token may commit, so a slow stale response can never
//!   overwrite a newer one.
//! - Mutations are not optimistic: the row action runs first and only on
//!   success is the current page fetched again, exactly once.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::api::{Ack, ApiError, PagedResult, RowAction};
use crate::core::banner::TransientBanner;
use crate::core::entity::RecordId;
use crate::core::view::{FilterField, ViewState};

/// Where a list view gets its rows from and sends its mutations to
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: Clone + Send + Sync;

    /// Fetch the rows described by `view`
    async fn fetch(&self, view: &ViewState) -> Result<PagedResult<Self::Item>, ApiError>;

    /// Run a row action against record `id`
    async fn perform(&self, action: RowAction, id: &RecordId) -> Result<Ack, ApiError>;

    /// Whether `action` is available for these rows
    fn supports(&self, action: RowAction) -> bool;
}

/// Identifies one fetch; only the latest token issued by a view can commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Outcome of applying a fetch result to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Rows and page count replaced
    Applied,
    /// Request failed; rows untouched, banner raised
    Failed,
    /// A newer request was issued meanwhile; result discarded
    Stale,
    /// Nothing was requested (e.g. page out of range)
    Rejected,
}

/// A row action waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: RowAction,
    pub id: RecordId,
}

/// Outcome of a confirmed row action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The server accepted the action; `reload` is the follow-up fetch
    Applied { message: Option<String>, reload: Commit },
    /// The server rejected the action; rows untouched, banner raised
    Failed,
    /// No action was pending
    NothingPending,
}

/// Local state of one list view
#[derive(Debug)]
pub struct ListView<T> {
    state: ViewState,
    items: Vec<T>,
    total_pages: u32,
    loaded: bool,
    latest: u64,
    in_flight: bool,
    pending: Option<PendingAction>,
    banner: TransientBanner,
    clamped: bool,
}

impl<T> ListView<T> {
    pub fn new(state: ViewState, banner_duration: Duration) -> Self {
        Self {
            state,
            items: Vec::new(),
            total_pages: 1,
            loaded: false,
            latest: 0,
            in_flight: false,
            pending: None,
            banner: TransientBanner::new(banner_duration),
            clamped: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether at least one fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Start a fetch, superseding any fetch still in flight
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.latest += 1;
        self.in_flight = true;
        RequestToken(self.latest)
    }

    /// Apply a fetch result if `token` is still the latest
    pub fn commit(
        &mut self,
        token: RequestToken,
        result: Result<PagedResult<T>, ApiError>,
        now: Instant,
    ) -> Commit {
        if token.0 != self.latest {
            debug!(token = token.0, latest = self.latest, "discarding stale response");
            return Commit::Stale;
        }
        self.in_flight = false;

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages.max(1);
                self.loaded = true;
                if self.state.page > self.total_pages {
                    // The collection shrank under us, e.g. the last row of the last page was deleted
                    debug!(page = self.state.page, last = self.total_pages, "page past the end");
                    self.state.page = self.total_pages;
                    self.clamped = true;
                }
                Commit::Applied
            }
            Err(e) => {
                info!(error = %e, "list fetch failed");
                self.banner.show(e.user_message(), now);
                Commit::Failed
            }
        }
    }

    /// Whether the last commit moved the page back inside range; clears the flag
    pub fn take_clamped(&mut self) -> bool {
        std::mem::take(&mut self.clamped)
    }

    /// Raise a banner message at `now`
    pub fn report(&mut self, message: impl Into<String>, now: Instant) {
        self.banner.show(message, now);
    }

    /// The banner message, if still visible at `now`
    pub fn banner(&self, now: Instant) -> Option<&str> {
        self.banner.current(now)
    }
}

/// Read-only copy of a view for rendering
#[derive(Debug, Clone)]
pub struct ViewSnapshot<T> {
    pub state: ViewState,
    pub items: Vec<T>,
    pub total_pages: u32,
    pub loading: bool,
    pub banner: Option<String>,
    pub pending: Option<PendingAction>,
}

/// Drives a [`ListView`] against a [`ListSource`]
///
/// All methods take `&self`; the view sits behind an async mutex that is
/// never held across a request, so fetches can overlap.
pub struct ListController<S: ListSource> {
    source: S,
    view: Mutex<ListView<S::Item>>,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, state: ViewState, banner_duration: Duration) -> Self {
        Self {
            source,
            view: Mutex::new(ListView::new(state, banner_duration)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Copy out the current view for rendering
    pub async fn snapshot(&self) -> ViewSnapshot<S::Item> {
        let view = self.view.lock().await;
        ViewSnapshot {
            state: view.state.clone(),
            items: view.items.clone(),
            total_pages: view.total_pages,
            loading: view.in_flight,
            banner: view.banner(Instant::now()).map(str::to_string),
            pending: view.pending.clone(),
        }
    }

    /// Fetch for the current state
    pub async fn load(&self) -> Commit {
        self.refetch(|_| {}).await
    }

    /// Change the state with `change`, then fetch for the new state
    ///
    /// If the answer shows the page is now past the end, the last page is
    /// fetched instead.
    async fn refetch(&self, change: impl FnOnce(&mut ViewState)) -> Commit {
        let mut change = Some(change);
        loop {
            let (token, state) = {
                let mut view = self.view.lock().await;
                if let Some(change) = change.take() {
                    change(&mut view.state);
                }
                (view.begin_fetch(), view.state.clone())
            };

            let result = self.source.fetch(&state).await;

            let mut view = self.view.lock().await;
            let commit = view.commit(token, result, Instant::now());
            if !view.take_clamped() {
                return commit;
            }
            debug!(page = view.state.page, "fetching last page");
        }
    }

    /// Go to `page`; pages outside 1..=total_pages are rejected with a banner
    pub async fn goto_page(&self, page: u32) -> Commit {
        {
            let mut view = self.view.lock().await;
            let last = view.total_pages;
            if page == 0 || (view.loaded && page > last) {
                view.report(format!("Page {} is out of range (1-{})", page, last), Instant::now());
                return Commit::Rejected;
            }
        }
        self.refetch(|state| state.page = page).await
    }

    pub async fn next_page(&self) -> Commit {
        let (page, last) = {
            let view = self.view.lock().await;
            (view.state.page, view.total_pages)
        };
        if page >= last {
            return Commit::Rejected;
        }
        self.goto_page(page + 1).await
    }

    pub async fn prev_page(&self) -> Commit {
        let page = self.view.lock().await.state.page;
        if page <= 1 {
            return Commit::Rejected;
        }
        self.goto_page(page - 1).await
    }

    /// Enter filtered mode with a free-text search (blank text clears it)
    pub async fn search(&self, text: &str) -> Commit {
        self.refetch(|state| state.set_search(text)).await
    }

    /// Narrow the view by a field filter (blank value removes it)
    pub async fn filter(&self, field: FilterField, value: &str) -> Commit {
        self.refetch(|state| state.set_filter(field, value)).await
    }

    /// Reset search and filters and fetch the unfiltered first page
    pub async fn clear_filter(&self) -> Commit {
        self.refetch(ViewState::clear_filters).await
    }

    /// Stage a row action for confirmation
    ///
    /// Returns false (with a banner) when the rows don't support `action`.
    pub async fn request(&self, action: RowAction, id: RecordId) -> bool {
        let mut view = self.view.lock().await;
        if !self.source.supports(action) {
            view.report(format!("Cannot {} this record", action.verb()), Instant::now());
            return false;
        }
        view.pending = Some(PendingAction { action, id });
        true
    }

    /// Drop the staged action without running it
    pub async fn cancel(&self) {
        self.view.lock().await.pending = None;
    }

    /// Run the staged action; on success fetch the current page once
    pub async fn confirm(&self) -> Mutation {
        let Some(pending) = self.view.lock().await.pending.take() else {
            return Mutation::NothingPending;
        };

        match self.source.perform(pending.action, &pending.id).await {
            Ok(ack) => {
                debug!(action = %pending.action, id = %pending.id, "row action applied");
                let reload = self.load().await;
                Mutation::Applied {
                    message: ack.message,
                    reload,
                }
            }
            Err(e) => {
                info!(action = %pending.action, id = %pending.id, error = %e, "row action failed");
                self.view.lock().await.report(e.user_message(), Instant::now());
                Mutation::Failed
            }
        }
    }

    /// Stage and immediately confirm an action (for callers that confirmed
    /// out of band, such as `--yes`)
    pub async fn apply(&self, action: RowAction, id: RecordId) -> Mutation {
        if !self.request(action, id).await {
            return Mutation::Failed;
        }
        self.confirm().await
    }

    /// Delete record `id`; on success the current page is fetched once
    pub async fn delete(&self, id: RecordId) -> Mutation {
        self.apply(RowAction::Delete, id).await
    }

    /// Run a status action (lock a user, confirm an order) on record `id`
    pub async fn update_status(&self, id: RecordId, action: RowAction) -> Mutation {
        self.apply(action, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner::DEFAULT_BANNER_DURATION;

    fn page(items: &[u32], total: u32) -> Result<PagedResult<u32>, ApiError> {
        Ok(PagedResult {
            items: items.to_vec(),
            total_pages: total,
        })
    }

    #[test]
    fn test_commit_replaces_rows() {
        let mut view = ListView::new(ViewState::new(5), DEFAULT_BANNER_DURATION);
        let token = view.begin_fetch();
        assert!(view.is_loading());
        assert_eq!(view.commit(token, page(&[1, 2], 3), Instant::now()), Commit::Applied);
        assert_eq!(view.items(), &[1, 2]);
        assert_eq!(view.total_pages(), 3);
        assert!(!view.is_loading());
        assert!(view.is_loaded());
    }

    #[test]
    fn test_failed_commit_keeps_rows_and_raises_banner() {
        let now = Instant::now();
        let mut view = ListView::new(ViewState::new(5), DEFAULT_BANNER_DURATION);
        let t1 = view.begin_fetch();
        view.commit(t1, page(&[1, 2], 1), now);

        let t2 = view.begin_fetch();
        let err = ApiError::Server {
            status: 500,
            message: "Lỗi máy chủ".to_string(),
        };
        assert_eq!(view.commit(t2, Err(err), now), Commit::Failed);
        assert_eq!(view.items(), &[1, 2]);
        assert_eq!(view.banner(now), Some("Lỗi máy chủ"));
        assert!(view.banner(now + Duration::from_millis(3000)).is_none());
    }

    #[test]
    fn test_stale_token_cannot_commit() {
        let now = Instant::now();
        let mut view = ListView::new(ViewState::new(5), DEFAULT_BANNER_DURATION);
        let old = view.begin_fetch();
        let new = view.begin_fetch();

        assert_eq!(view.commit(new, page(&[2], 1), now), Commit::Applied);
        assert_eq!(view.commit(old, page(&[1], 1), now), Commit::Stale);
        assert_eq!(view.items(), &[2]);
    }

    #[test]
    fn test_stale_failure_raises_no_banner() {
        let now = Instant::now();
        let mut view: ListView<u32> = ListView::new(ViewState::new(5), DEFAULT_BANNER_DURATION);
        let old = view.begin_fetch();
        let _new = view.begin_fetch();

        let err = ApiError::Decode("x".to_string());
        assert_eq!(view.commit(old, Err(err), now), Commit::Stale);
        assert!(view.banner(now).is_none());
        assert!(view.is_loading());
    }

    #[test]
    fn test_commit_clamps_page_past_the_end() {
        let now = Instant::now();
        let mut state = ViewState::new(5);
        state.page = 2;
        let mut view: ListView<u32> = ListView::new(state, DEFAULT_BANNER_DURATION);

        let token = view.begin_fetch();
        assert_eq!(view.commit(token, page(&[], 1), now), Commit::Applied);
        assert_eq!(view.state().page, 1);
        assert!(view.take_clamped());
        assert!(!view.take_clamped());

        let token = view.begin_fetch();
        view.commit(token, page(&[1], 1), now);
        assert!(!view.take_clamped());
    }
}
