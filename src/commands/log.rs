use anyhow::Result;
use kintai_core::{HistoryView, Identity};
use kintai_store_http::HttpStore;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::render::Render;
use crate::session::Session;

pub async fn run() -> Result<()> {
    let session = Session::load()?;
    let store = HttpStore::from_env()?;
    let mut history = HistoryView::new();

    let spinner = create_spinner("Fetching history".to_string());
    let result = history.load(&store, session.id()).await;
    spinner.finish_and_clear();

    println!("Punch history for {}", session.display_label().bold());

    match result {
        Ok(()) => {
            if history.events().is_empty() {
                println!("   {}", "No punches recorded yet.".dimmed());
            } else {
                for event in history.events() {
                    println!("   {}", event.render());
                }
            }
        }
        // Keep whatever is on screen; just report the fetch error.
        Err(e) => eprintln!("   {}", e.to_string().red()),
    }

    Ok(())
}
