use anyhow::Result;
use kintai_core::Identity;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(user_id: String, label: Option<String>) -> Result<()> {
    if user_id.trim().is_empty() {
        anyhow::bail!("User id must not be empty");
    }

    let session = Session::new(user_id, label);
    session.save()?;

    println!(
        "Welcome, {}! Punches will be recorded for {}.",
        session.display_label().green(),
        session.id()
    );

    Ok(())
}
