//! Punch recorder.
//!
//! Produces exactly one `AttendanceEvent` per invocation and submits it to
//! the store. A single outstanding-operation flag rejects repeat punches
//! while a submission is in flight, so a rapid double trigger cannot append
//! twice.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{KintaiError, KintaiResult};
use crate::event::{AttendanceEvent, EventType};
use crate::store::AttendanceStore;

/// Fixed confirmation shown after a successful punch, one per event type.
pub fn confirmation(kind: EventType) -> &'static str {
    match kind {
        EventType::Start => "Clocked in.",
        EventType::End => "Clocked out.",
    }
}

#[derive(Debug, Default)]
pub struct Recorder {
    in_flight: AtomicBool,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Stamp the current instant, assemble the event and append it.
    ///
    /// Preconditions are checked before anything is submitted: an empty
    /// `user_id` fails with `MissingUser` and performs zero append calls,
    /// and a punch arriving while another is in flight fails with `Busy`.
    /// On append failure no partial state is retained and nothing retries.
    pub async fn record<S: AttendanceStore>(
        &self,
        store: &S,
        user_id: &str,
        kind: EventType,
    ) -> KintaiResult<AttendanceEvent> {
        if user_id.is_empty() {
            return Err(KintaiError::MissingUser);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(KintaiError::Busy);
        }

        let event = AttendanceEvent::punched_now(user_id, kind);
        let result = store.append(&event).await;
        self.in_flight.store(false, Ordering::Release);

        result.map(|()| event)
    }
}
