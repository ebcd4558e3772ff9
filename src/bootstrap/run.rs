use std::io;

use tracing::info;

use nope_core::AppConfig;

use super::wiring;
use crate::card::run_card;
use crate::cli::Command;
use crate::web;

/// Dispatch a parsed CLI command against a loaded config.
///
/// # Errors
///
/// - `serve`: the listener cannot bind or the server stops with an error.
/// - `card`: the HTTP client cannot be built or stdout cannot be written.
///   Upstream failures are not errors here; the card shows them.
pub async fn run_app(config: AppConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve => {
            info!("Initializing state...");
            let state = wiring::web_state(&config)?;
            web::serve(&config, state).await
        }
        Command::Card { url, copy } => {
            let source = wiring::card_source(&config, url.as_deref())?;
            let clipboard = nope_platform::system_clipboard();
            let mut stdout = io::stdout().lock();
            run_card(source, clipboard, copy, &mut stdout).await
        }
    }
}
