//! Contact Assistant - Main entry point
//!
//! Starts the interactive assistant: logging to stderr, configuration from
//! the environment, then the prompt loop on stdin/stdout until the user
//! says goodbye.

use anyhow::Result;
use contact_assistant::models::AddressBook;
use contact_assistant::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr only so the conversation on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant with a {}-day birthday horizon",
        config.birthday_horizon_days
    );

    let mut book = AddressBook::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut book, &config, stdin.lock(), stdout.lock())?;

    info!("Session ended");
    Ok(())
}
