//! Per-client attendance history.
//!
//! The history is a derived, transient view: it is rebuilt in full on every
//! fetch and owned exclusively by one client instance. There is no merging
//! and no incremental patching; a fetch either replaces the whole list or
//! leaves it untouched.

use crate::error::KintaiResult;
use crate::event::AttendanceEvent;
use crate::store::AttendanceStore;

/// Where the view is in its fetch cycle. The view is re-enterable
/// indefinitely: `Populated` goes back through `Loading` on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Empty,
    Loading,
    Populated,
}

/// A single user's events, newest first.
#[derive(Debug, Default)]
pub struct HistoryView {
    state: LoadState,
    events: Vec<AttendanceEvent>,
}

impl HistoryView {
    pub fn new() -> Self {
        HistoryView::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The current list, sorted by timestamp descending.
    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    /// Fetch all events for `user_id` and replace the list with the result,
    /// sorted newest first. Equal timestamps keep their arrival order (the
    /// sort is stable).
    ///
    /// With no resolved user this is a no-op: nothing is fetched and no
    /// error is raised. On a fetch error the previous list is preserved so
    /// the caller keeps showing stale-but-valid data.
    pub async fn load<S: AttendanceStore>(
        &mut self,
        store: &S,
        user_id: &str,
    ) -> KintaiResult<()> {
        if user_id.is_empty() {
            return Ok(());
        }

        self.state = LoadState::Loading;

        match store.list(user_id).await {
            Ok(mut events) => {
                events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                self.events = events;
                self.state = LoadState::Populated;
                Ok(())
            }
            Err(e) => {
                self.state = if self.events.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Populated
                };
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use crate::test_store::{MockStore, event_at};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn sorts_newest_first() {
        let store = MockStore::new();
        store.seed(vec![
            event_at("u1", "2024-01-01T09:00:00Z", EventType::Start),
            event_at("u1", "2024-01-01T18:00:00Z", EventType::End),
            event_at("u1", "2024-01-01T12:30:00Z", EventType::Start),
        ]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();

        let events = history.events();
        assert_eq!(events.len(), 3);
        for pair in events.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
        assert_eq!(events[0].kind, EventType::End);
        assert_eq!(history.state(), LoadState::Populated);
    }

    #[tokio::test]
    async fn full_day_scenario_orders_end_before_start() {
        let store = MockStore::new();
        store.seed(vec![
            event_at("u1", "2024-01-01T09:00:00Z", EventType::Start),
            event_at("u1", "2024-01-01T18:00:00Z", EventType::End),
        ]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();

        assert_eq!(history.events()[0].kind, EventType::End);
        assert_eq!(history.events()[1].kind, EventType::Start);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_arrival_order() {
        let store = MockStore::new();
        store.seed(vec![
            event_at("u1", "2024-01-01T09:00:00Z", EventType::Start),
            event_at("u1", "2024-01-01T09:00:00Z", EventType::End),
        ]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();

        assert_eq!(history.events()[0].kind, EventType::Start);
        assert_eq!(history.events()[1].kind, EventType::End);
    }

    #[tokio::test]
    async fn missing_user_is_a_noop() {
        let store = MockStore::new();
        let mut history = HistoryView::new();

        history.load(&store, "").await.unwrap();

        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
        assert_eq!(history.state(), LoadState::Empty);
        assert!(history.events().is_empty());
    }

    #[tokio::test]
    async fn only_the_requested_users_events_are_returned() {
        let store = MockStore::new();
        store.seed(vec![
            event_at("u1", "2024-01-01T09:00:00Z", EventType::Start),
            event_at("u2", "2024-01-01T10:00:00Z", EventType::Start),
        ]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();

        assert_eq!(history.events().len(), 1);
        assert_eq!(history.events()[0].user_id, "u1");
    }

    #[tokio::test]
    async fn empty_history_loads_without_error() {
        let store = MockStore::new();
        let mut history = HistoryView::new();

        history.load(&store, "u2").await.unwrap();

        assert!(history.events().is_empty());
        assert_eq!(history.state(), LoadState::Populated);
    }

    #[tokio::test]
    async fn fetch_failure_preserves_previous_list() {
        let store = MockStore::new();
        store.seed(vec![
            event_at("u1", "2024-01-01T09:00:00Z", EventType::Start),
            event_at("u1", "2024-01-01T18:00:00Z", EventType::End),
        ]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();
        let before = history.events().to_vec();

        store.fail_list.store(true, Ordering::SeqCst);
        assert!(history.load(&store, "u1").await.is_err());

        assert_eq!(history.events(), before.as_slice());
        assert_eq!(history.state(), LoadState::Populated);
    }

    #[tokio::test]
    async fn fetch_failure_on_empty_view_stays_empty() {
        let store = MockStore::new();
        store.fail_list.store(true, Ordering::SeqCst);

        let mut history = HistoryView::new();
        assert!(history.load(&store, "u1").await.is_err());

        assert!(history.events().is_empty());
        assert_eq!(history.state(), LoadState::Empty);
    }

    #[tokio::test]
    async fn refresh_replaces_the_whole_list() {
        let store = MockStore::new();
        store.seed(vec![event_at("u1", "2024-01-01T09:00:00Z", EventType::Start)]);

        let mut history = HistoryView::new();
        history.load(&store, "u1").await.unwrap();
        assert_eq!(history.events().len(), 1);

        store.seed(vec![
            event_at("u1", "2024-01-02T09:00:00Z", EventType::Start),
            event_at("u1", "2024-01-02T17:00:00Z", EventType::End),
        ]);
        history.load(&store, "u1").await.unwrap();

        assert_eq!(history.events().len(), 2);
        assert_eq!(
            history.events()[0].timestamp,
            "2024-01-02T17:00:00Z"
                .parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap()
        );
    }
}
