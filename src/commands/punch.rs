use anyhow::Result;
use kintai_core::{AttendanceClient, EventType, Identity, recorder};
use kintai_store_http::HttpStore;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::render::Render;
use crate::session::Session;

/// How much of the refreshed history to echo after a punch
const RECENT_PUNCHES: usize = 5;

pub async fn run(kind: EventType) -> Result<()> {
    let session = Session::load()?;
    let store = HttpStore::from_env()?;
    let mut client = AttendanceClient::new(store);

    let spinner = create_spinner("Punching".to_string());
    let result = client.record_event(session.id(), kind).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            println!("{}", recorder::confirmation(kind).green());

            for event in client.history().events().iter().take(RECENT_PUNCHES) {
                println!("   {}", event.render());
            }
        }
        Err(_) => println!("{}", "Failed to record your punch. Please try again.".red()),
    }

    Ok(())
}
