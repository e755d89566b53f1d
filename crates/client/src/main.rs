//! Arena client binary.
//!
//! Terminal front end for 1 vs 1 battles: loads content from the data
//! directory, lets the player pick or randomize a matchup and shows the
//! battle round by round.
//!
//! # Examples
//!
//! ```bash
//! # Replay a session
//! ARENA_SEED=42 cargo run -p arena-client
//!
//! # Watch battles without pausing, keeping event logs
//! ARENA_AUTO_ADVANCE=true ARENA_ROUND_DELAY_MS=200 ARENA_EVENT_LOG=1 cargo run -p arena-client
//! ```

mod app;
mod config;
mod input;
mod logging;
mod render;
mod terminal;

use anyhow::Result;

use crate::app::App;
use crate::config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let session_id = logging::session_id(config.session_id.as_deref());
    let session_dir = logging::setup_logging(&session_id)?;

    tracing::info!("Starting arena client");
    tracing::info!("Session ID: {}", session_id);

    // 3. Load content and run the menu loop
    let mut app = App::new(&config, session_dir)?;
    app.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
