mod commands;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kintai_core::EventType;

#[derive(Parser)]
#[command(name = "kintai")]
#[command(about = "Record clock-in/clock-out punches and view your attendance history")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clock in
    In,
    /// Clock out
    Out,
    /// Show your punch history, newest first
    Log,
    /// Sign in with a user id
    Login {
        user_id: String,

        /// Display name shown in greetings (defaults to the user id)
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Sign out and forget the session
    Logout,
    /// Show who is signed in
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::In => commands::punch::run(EventType::Start).await,
        Commands::Out => commands::punch::run(EventType::End).await,
        Commands::Log => commands::log::run().await,
        Commands::Login { user_id, label } => commands::login::run(user_id, label),
        Commands::Logout => commands::logout::run(),
        Commands::Whoami => commands::whoami::run(),
    }
}
