//! In-memory store used by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::Notify;

use crate::error::{KintaiError, KintaiResult};
use crate::event::AttendanceEvent;
use crate::store::AttendanceStore;

/// Test double for the attendance store: keeps events in arrival order,
/// counts calls, and can be told to fail or to park appends on a gate.
#[derive(Default)]
pub(crate) struct MockStore {
    pub events: Mutex<Vec<AttendanceEvent>>,
    pub append_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub fail_append: AtomicBool,
    pub fail_list: AtomicBool,
    append_gate: Option<Notify>,
}

impl MockStore {
    pub fn new() -> Self {
        MockStore::default()
    }

    /// Appends block until `release_append` is called.
    pub fn gated() -> Self {
        MockStore {
            append_gate: Some(Notify::new()),
            ..MockStore::default()
        }
    }

    pub fn release_append(&self) {
        if let Some(gate) = &self.append_gate {
            gate.notify_one();
        }
    }

    pub fn seed(&self, events: Vec<AttendanceEvent>) {
        *self.events.lock().unwrap() = events;
    }

    pub fn stored(&self) -> Vec<AttendanceEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AttendanceStore for MockStore {
    async fn append(&self, event: &AttendanceEvent) -> KintaiResult<()> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.append_gate {
            gate.notified().await;
        }

        if self.fail_append.load(Ordering::SeqCst) {
            return Err(KintaiError::Store("append failed".into()));
        }

        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn list(&self, user_id: &str) -> KintaiResult<Vec<AttendanceEvent>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_list.load(Ordering::SeqCst) {
            return Err(KintaiError::Store("list failed".into()));
        }

        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Shorthand for building events with a fixed timestamp in tests.
pub(crate) fn event_at(
    user_id: &str,
    ts: &str,
    kind: crate::event::EventType,
) -> AttendanceEvent {
    AttendanceEvent {
        user_id: user_id.to_string(),
        timestamp: ts.parse().unwrap(),
        kind,
    }
}
