//! Pedra Viewer - terminal inventory browser for stone (pedra) items
//!
//! Lists a player's stones and opens a details modal for the selected one,
//! showing its image reference, name, tier, enhancement level and status
//! bonuses.
//!
//! # Architecture
//!
//! - **Presentation Layer**: ratatui components, including the stone details modal
//! - **Application Layer**: state management and event handling
//! - **Domain Layer**: stone display requests, name parsing, inventory loading

pub mod app;
pub mod config;
pub mod error;
pub mod pedra;
pub mod ui;

pub use app::App;
pub use error::{AppError, AppResult};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when RUST_LOG is unset
pub fn default_log_filter(level: &str) -> String {
    format!("pedra_viewer={}", level.to_ascii_lowercase())
}

/// Initialize the logging system
///
/// Logs go to stderr so they never interleave with the alternate screen.
/// RUST_LOG wins over `default_level` (normally `app.log_level` from the
/// configuration).
pub fn initialize_logging(default_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
