//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wp_core::{DayWindow, Roster};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON file holding the current event snapshot.
    pub events_path: PathBuf,

    /// Visible hours and grid constants.
    #[serde(default)]
    pub window: DayWindow,

    /// Everyone whose calendar can be shown.
    #[serde(default)]
    pub participants: Roster,

    /// Participant IDs shown when none are given on the command line.
    #[serde(default)]
    pub selected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            events_path: data_dir.join("events.json"),
            window: DayWindow::default(),
            participants: Roster::default(),
            selected: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations, optionally layering a
    /// specific file on top.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WP_*, nested keys via WP_WINDOW__START_HOUR)
        figment = figment.merge(Env::prefixed("WP_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for weekplan.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("weekplan"))
}

/// Returns the platform-specific data directory for weekplan.
///
/// On Linux: `~/.local/share/weekplan`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("weekplan"))
}
