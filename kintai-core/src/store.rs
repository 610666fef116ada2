//! Attendance store contract.
//!
//! The network store is an external collaborator; the client consumes it
//! through exactly two operations. Implementations live in their own
//! crates (e.g. `kintai-store-http`) so the core stays transport-free.

use serde::{Deserialize, Serialize};

use crate::error::KintaiResult;
use crate::event::AttendanceEvent;

/// The two operations the attendance store exposes.
///
/// `append` is not assumed idempotent, and failures carry no structured
/// taxonomy beyond the error message. `list` returns the user's events in
/// unspecified order; ordering is the caller's job.
pub trait AttendanceStore {
    /// Durably append one event.
    fn append(
        &self,
        event: &AttendanceEvent,
    ) -> impl Future<Output = KintaiResult<()>> + Send;

    /// Fetch all events recorded for `user_id`, in unspecified order.
    fn list(
        &self,
        user_id: &str,
    ) -> impl Future<Output = KintaiResult<Vec<AttendanceEvent>>> + Send;
}

/// Wire envelope of the store's list response: `{ "items": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<AttendanceEvent>,
}
