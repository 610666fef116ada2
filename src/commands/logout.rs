use anyhow::Result;
use kintai_core::Identity;

use crate::session::Session;

pub fn run() -> Result<()> {
    if !Session::exists() {
        println!("Not signed in.");
        return Ok(());
    }

    let session = Session::load()?;
    session.sign_out()?;
    println!("Signed out.");

    Ok(())
}
