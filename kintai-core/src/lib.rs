//! Core types for the kintai attendance tracker.
//!
//! This crate provides the shared types used by the CLI and by store
//! backends:
//! - `AttendanceEvent` and `EventType` for clock-in/clock-out punches
//! - `AttendanceStore` for the network store contract (append/list)
//! - `Identity` for the signed-in user capability
//! - `Recorder` and `HistoryView` for the client-side punch logic

pub mod client;
pub mod error;
pub mod event;
pub mod history;
pub mod identity;
pub mod recorder;
pub mod store;

pub use client::AttendanceClient;
pub use error::{KintaiError, KintaiResult};
pub use event::{AttendanceEvent, EventType};
pub use history::{HistoryView, LoadState};
pub use identity::Identity;
pub use recorder::Recorder;
pub use store::{AttendanceStore, ListResponse};

#[cfg(test)]
pub(crate) mod test_store;
