//! Store-neutral attendance event types.
//!
//! An `AttendanceEvent` is a single clock-in or clock-out punch tied to one
//! user and one instant. Events are created once, at punch time, and are
//! never mutated or deleted afterwards. The serde field names are the wire
//! shape of the attendance API and must round-trip exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single clock-in or clock-out record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEvent {
    /// Opaque stable identifier of the acting user, supplied by the
    /// identity collaborator.
    pub user_id: String,

    /// Captured on the client at submission time, not server-assigned.
    /// Serialized as RFC 3339 text so the store can sort it lexically.
    pub timestamp: DateTime<Utc>,

    /// Clock-in or clock-out.
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl AttendanceEvent {
    /// Build an event for `user_id`, stamped with the current instant.
    pub fn punched_now(user_id: &str, kind: EventType) -> Self {
        AttendanceEvent {
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The two punch kinds. No other value is valid on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Start,
    End,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Start => "start",
            EventType::End => "end",
        }
    }
}
