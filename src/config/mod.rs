//! Configuration management module
//!
//! Provides configuration management with:
//! - TOML-based configuration files
//! - Per-section defaults so partial files are accepted
//! - Validation

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// UI configuration
    pub ui: UIConfig,
    /// Stone details modal configuration
    pub modal: ModalConfig,
    /// Inventory source configuration
    pub inventory: InventoryConfig,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./pedra-viewer.toml
    /// 2. ~/.config/pedra-viewer/config.toml
    /// 3. Default configuration
    pub async fn load() -> AppResult<Self> {
        info!("Loading application configuration");

        let mut candidates = vec![PathBuf::from("./pedra-viewer.toml")];
        if let Some(config_path) = Self::get_user_config_path() {
            candidates.push(config_path);
        }

        Self::load_first_existing(&candidates).await
    }

    /// Load the first candidate file that exists
    ///
    /// Missing files are skipped. A file that exists but does not parse or
    /// validate is an error, so a broken config never silently turns into
    /// the defaults.
    pub async fn load_first_existing<P: AsRef<Path>>(candidates: &[P]) -> AppResult<Self> {
        for path in candidates {
            let path = path.as_ref();
            match Self::load_from_file(path).await {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    return Ok(config);
                }
                Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!("No configuration at {}", path.display());
                }
                Err(e) => {
                    warn!("Invalid configuration in {}: {}", path.display(), e);
                    return Err(e);
                }
            }
        }

        info!("Using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::application(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).await?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        debug!("Validating configuration");

        if !LOG_LEVELS.contains(&self.app.log_level.to_ascii_lowercase().as_str()) {
            return Err(AppError::config(format!(
                "app.log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        if self.ui.refresh_rate_ms == 0 {
            return Err(AppError::config("ui.refresh_rate_ms must be greater than 0"));
        }

        if !(20..=100).contains(&self.modal.width_percent) {
            return Err(AppError::config(
                "modal.width_percent must be between 20 and 100",
            ));
        }

        if !(20..=100).contains(&self.modal.height_percent) {
            return Err(AppError::config(
                "modal.height_percent must be between 20 and 100",
            ));
        }

        if self.modal.show_action_button && self.modal.action_label.trim().is_empty() {
            return Err(AppError::config(
                "modal.action_label must not be empty when the action button is shown",
            ));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Get user configuration directory path
    fn get_user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("pedra-viewer");
            path.push("config.toml");
            path
        })
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            }
            .to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Theme name
    pub theme: String,
    /// Enable mouse support
    pub enable_mouse: bool,
    /// Event poll interval in milliseconds
    pub refresh_rate_ms: u64,
    /// Rows moved by PageUp/PageDown in the inventory list
    pub page_size: usize,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            enable_mouse: true,
            refresh_rate_ms: 100,
            page_size: 10,
        }
    }
}

/// Stone details modal configuration
///
/// The dismiss switches decide which triggers get wired when the modal is
/// created. The buttons are only laid out (and therefore clickable) when
/// their `show_*` switch is on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Popup width as a percentage of the screen
    pub width_percent: u16,
    /// Popup height as a percentage of the screen
    pub height_percent: u16,
    /// Close when the backdrop outside the popup is clicked
    pub dismiss_on_backdrop_click: bool,
    /// Close on Escape
    pub dismiss_on_escape: bool,
    /// Draw the `[x]` close button in the title bar
    pub show_close_button: bool,
    /// Draw the footer action button
    pub show_action_button: bool,
    /// Footer action button label
    pub action_label: String,
    /// Text shown when the stone has no status bonuses
    pub empty_status_text: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            width_percent: 60,
            height_percent: 70,
            dismiss_on_backdrop_click: true,
            dismiss_on_escape: true,
            show_close_button: true,
            show_action_button: true,
            action_label: "Close".to_string(),
            empty_status_text: "This stone has no status bonuses".to_string(),
        }
    }
}

/// Inventory source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// JSON file holding the stone list, used when none is given on the command line
    pub path: PathBuf,
    /// Sort stones by tier and enhancement on load
    pub sort_on_load: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pedras.json"),
            sort_on_load: true,
        }
    }
}
