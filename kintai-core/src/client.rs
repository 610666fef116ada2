//! The attendance client: recorder and history wired together.

use crate::error::KintaiResult;
use crate::event::{AttendanceEvent, EventType};
use crate::history::HistoryView;
use crate::recorder::Recorder;
use crate::store::AttendanceStore;

/// One client instance: a recorder, a history view, and the store they
/// share. The only signal between the two components is the refresh that
/// follows a successful punch.
#[derive(Debug)]
pub struct AttendanceClient<S> {
    store: S,
    recorder: Recorder,
    history: HistoryView,
}

impl<S: AttendanceStore> AttendanceClient<S> {
    pub fn new(store: S) -> Self {
        AttendanceClient {
            store,
            recorder: Recorder::new(),
            history: HistoryView::new(),
        }
    }

    pub fn history(&self) -> &HistoryView {
        &self.history
    }

    /// Record one punch for `user_id` and, once the append is acknowledged,
    /// refresh the history for that same user.
    ///
    /// A failed refresh is swallowed: the punch is already durable and the
    /// previous list stays visible (stale but valid). There is no guarantee
    /// that another client instance observes the new event immediately.
    pub async fn record_event(
        &mut self,
        user_id: &str,
        kind: EventType,
    ) -> KintaiResult<AttendanceEvent> {
        let event = self.recorder.record(&self.store, user_id, kind).await?;

        let _ = self.history.load(&self.store, user_id).await;

        Ok(event)
    }

    /// Fetch and re-sort the full history for `user_id`.
    pub async fn load_history(&mut self, user_id: &str) -> KintaiResult<()> {
        self.history.load(&self.store, user_id).await
    }
}
