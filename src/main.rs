//! Credential Registry - Entry Point
//!
//! An in-memory console password manager that flags weak passwords.

use credential_registry::error::SessionError;
use credential_registry::error::handlers::{exit_code, handle_error};
use credential_registry::utils::logging::setup_logging;
use credential_registry::{AppConfig, run_session};
use log::info;
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main]
async fn main() {
    setup_logging();

    if let Err(e) = run().await {
        handle_error(&e);
        eprintln!("{}", e);
        std::process::exit(exit_code(&e));
    }
}

async fn run() -> Result<(), SessionError> {
    let config = AppConfig::load()?;
    info!(
        "Starting credential registry (min password length {})",
        config.min_password_length
    );

    let registry = run_session(BufReader::new(stdin()), stdout(), &config).await?;
    info!("Session ended with {} registered user(s)", registry.len());
    Ok(())
}
