//! List-view synchronization against an in-memory source
//!
//! These run on tokio's paused clock so banner expiry and response
//! ordering are deterministic.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use stockroom::api::{Ack, ApiError, PagedResult, RowAction};
use stockroom::core::{
    Commit, FilterField, ListController, ListSource, Mutation, RecordId, ViewState,
    DEFAULT_BANNER_DURATION,
};

/// Serves `total_pages` pages of numbered rows and records every call
struct ScriptedSource {
    total_pages: AtomicU32,
    actions: &'static [RowAction],
    fetches: Mutex<Vec<ViewState>>,
    performed: Mutex<Vec<(RowAction, RecordId)>>,
    delays: Mutex<VecDeque<Duration>>,
    fail_fetch: Mutex<Option<String>>,
    fail_perform: Option<String>,
}

impl ScriptedSource {
    fn new(total_pages: u32) -> Self {
        Self {
            total_pages: AtomicU32::new(total_pages),
            actions: &[RowAction::Delete],
            fetches: Mutex::new(Vec::new()),
            performed: Mutex::new(Vec::new()),
            delays: Mutex::new(VecDeque::new()),
            fail_fetch: Mutex::new(None),
            fail_perform: None,
        }
    }

    fn failing_perform(mut self, message: &str) -> Self {
        self.fail_perform = Some(message.to_string());
        self
    }

    fn with_delays(self, delays: &[u64]) -> Self {
        *self.delays.lock().unwrap() = delays.iter().map(|ms| Duration::from_millis(*ms)).collect();
        self
    }

    fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    fn last_fetch(&self) -> ViewState {
        self.fetches.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ListSource for ScriptedSource {
    type Item = u32;

    async fn fetch(&self, view: &ViewState) -> Result<PagedResult<u32>, ApiError> {
        self.fetches.lock().unwrap().push(view.clone());
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.fail_fetch.lock().unwrap().clone() {
            return Err(ApiError::Server { status: 500, message });
        }
        if view.search.is_some() {
            return Ok(PagedResult::single(vec![999]));
        }
        let total_pages = self.total_pages.load(Ordering::SeqCst);
        let first = view.page * 10;
        let items = if view.page <= total_pages {
            vec![first, first + 1]
        } else {
            Vec::new()
        };
        Ok(PagedResult { items, total_pages })
    }

    async fn perform(&self, action: RowAction, id: &RecordId) -> Result<Ack, ApiError> {
        self.performed.lock().unwrap().push((action, id.clone()));
        match &self.fail_perform {
            Some(message) => Err(ApiError::Server {
                status: 409,
                message: message.clone(),
            }),
            None => Ok(Ack {
                message: Some("Xóa thành công".to_string()),
            }),
        }
    }

    fn supports(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }
}

fn controller(source: ScriptedSource) -> ListController<ScriptedSource> {
    ListController::new(source, ViewState::new(5), DEFAULT_BANNER_DURATION)
}

#[tokio::test(start_paused = true)]
async fn test_goto_page_fetches_exactly_once() {
    let list = controller(ScriptedSource::new(3));
    assert_eq!(list.load().await, Commit::Applied);

    assert_eq!(list.goto_page(2).await, Commit::Applied);
    assert_eq!(list.source().fetch_count(), 2);
    assert_eq!(list.source().last_fetch().page, 2);

    let snap = list.snapshot().await;
    assert_eq!(snap.items, vec![20, 21]);
    assert_eq!(snap.total_pages, 3);
    assert_eq!(snap.state.page, 2);
    assert!(!snap.loading);
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_page_is_rejected_without_fetch() {
    let list = controller(ScriptedSource::new(2));
    list.load().await;

    assert_eq!(list.goto_page(3).await, Commit::Rejected);
    assert_eq!(list.goto_page(0).await, Commit::Rejected);
    assert_eq!(list.next_page().await, Commit::Applied);
    assert_eq!(list.next_page().await, Commit::Rejected);
    assert_eq!(list.source().fetch_count(), 2);

    let snap = list.snapshot().await;
    assert_eq!(snap.state.page, 2);
    assert!(snap.banner.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_delete_refetches_once() {
    let list = controller(ScriptedSource::new(1));
    list.load().await;

    assert!(list.request(RowAction::Delete, RecordId::from(10u64)).await);
    assert!(list.snapshot().await.pending.is_some());
    // Nothing runs before confirmation
    assert!(list.source().performed.lock().unwrap().is_empty());

    let outcome = list.confirm().await;
    assert_eq!(
        outcome,
        Mutation::Applied {
            message: Some("Xóa thành công".to_string()),
            reload: Commit::Applied,
        }
    );
    assert_eq!(list.source().performed.lock().unwrap().len(), 1);
    assert_eq!(list.source().fetch_count(), 2);
    assert!(list.snapshot().await.pending.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_action_never_runs() {
    let list = controller(ScriptedSource::new(1));
    list.load().await;

    assert!(list.request(RowAction::Delete, RecordId::from(11u64)).await);
    list.cancel().await;
    assert_eq!(list.confirm().await, Mutation::NothingPending);
    assert!(list.source().performed.lock().unwrap().is_empty());
    assert_eq!(list.source().fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unsupported_action_is_refused() {
    let list = controller(ScriptedSource::new(1));
    list.load().await;

    assert!(!list.request(RowAction::Lock, RecordId::from(10u64)).await);
    let snap = list.snapshot().await;
    assert!(snap.pending.is_none());
    assert_eq!(snap.banner.as_deref(), Some("Cannot lock this record"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_delete_keeps_rows_and_banner_expires() {
    let list = controller(ScriptedSource::new(1).failing_perform("Danh mục đang được sử dụng"));
    list.load().await;

    let outcome = list.apply(RowAction::Delete, RecordId::from(10u64)).await;
    assert_eq!(outcome, Mutation::Failed);
    assert_eq!(list.source().fetch_count(), 1);

    let snap = list.snapshot().await;
    assert_eq!(snap.items, vec![10, 11]);
    assert_eq!(snap.banner.as_deref(), Some("Danh mục đang được sử dụng"));

    tokio::time::advance(Duration::from_millis(2999)).await;
    assert!(list.snapshot().await.banner.is_some());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(list.snapshot().await.banner.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_status_update_on_unsupported_rows_fails_without_request() {
    let list = controller(ScriptedSource::new(1));
    list.load().await;

    let outcome = list.update_status(RecordId::from(10u64), RowAction::Confirm).await;
    assert_eq!(outcome, Mutation::Failed);
    assert!(list.source().performed.lock().unwrap().is_empty());
    assert_eq!(list.source().fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetch_keeps_previous_page() {
    let list = controller(ScriptedSource::new(3));
    list.load().await;
    *list.source().fail_fetch.lock().unwrap() = Some("Lỗi máy chủ".to_string());

    assert_eq!(list.goto_page(2).await, Commit::Failed);
    let snap = list.snapshot().await;
    assert_eq!(snap.items, vec![10, 11]);
    assert_eq!(snap.banner.as_deref(), Some("Lỗi máy chủ"));
}

#[tokio::test(start_paused = true)]
async fn test_search_then_clear_returns_to_first_page() {
    let list = controller(ScriptedSource::new(3));
    list.load().await;
    list.goto_page(3).await;

    assert_eq!(list.search("áo thun").await, Commit::Applied);
    let snap = list.snapshot().await;
    assert!(snap.state.is_filtered());
    assert_eq!(snap.items, vec![999]);
    assert_eq!(snap.total_pages, 1);

    list.filter(FilterField::Category, "4").await;
    assert_eq!(list.clear_filter().await, Commit::Applied);

    let fetched = list.source().last_fetch();
    assert_eq!(fetched.page, 1);
    assert!(!fetched.is_filtered());
    assert_eq!(list.snapshot().await.items, vec![10, 11]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_discarded() {
    // First fetch is the initial load; page 2 answers slowly, page 3 quickly
    let list = controller(ScriptedSource::new(5).with_delays(&[0, 500, 10]));
    list.load().await;

    let (slow, fast) = tokio::join!(list.goto_page(2), list.goto_page(3));
    assert_eq!(slow, Commit::Stale);
    assert_eq!(fast, Commit::Applied);

    let snap = list.snapshot().await;
    assert_eq!(snap.items, vec![30, 31]);
    assert_eq!(snap.state.page, 3);
    assert!(!snap.loading);
}

#[tokio::test(start_paused = true)]
async fn test_deleting_last_row_of_last_page_steps_back() {
    let list = controller(ScriptedSource::new(2));
    list.load().await;
    list.goto_page(2).await;

    // The only row on page 2 goes away
    list.source().total_pages.store(1, Ordering::SeqCst);
    let outcome = list.delete(RecordId::from(20u64)).await;
    assert_eq!(
        outcome,
        Mutation::Applied {
            message: Some("Xóa thành công".to_string()),
            reload: Commit::Applied,
        }
    );

    let snap = list.snapshot().await;
    assert_eq!(snap.state.page, 1);
    assert_eq!(snap.total_pages, 1);
    assert_eq!(snap.items, vec![10, 11]);
    // load, page 2, reload of page 2, then page 1
    assert_eq!(list.source().fetch_count(), 4);
    assert_eq!(list.source().last_fetch().page, 1);
}
