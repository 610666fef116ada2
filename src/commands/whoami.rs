use anyhow::Result;
use kintai_core::Identity;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run() -> Result<()> {
    let session = Session::load()?;

    println!(
        "Signed in as {} ({})",
        session.display_label().green(),
        session.id()
    );

    Ok(())
}
