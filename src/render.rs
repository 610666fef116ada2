//! Terminal rendering for attendance events.

use chrono::Local;
use kintai_core::{AttendanceEvent, EventType};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        match self {
            EventType::Start => "IN ".green().to_string(),
            EventType::End => "OUT".red().to_string(),
        }
    }
}

impl Render for AttendanceEvent {
    fn render(&self) -> String {
        let local = self.timestamp.with_timezone(&Local);

        format!(
            "{} {}",
            self.kind.render(),
            local.format("%Y-%m-%d %H:%M").to_string().dimmed()
        )
    }
}
