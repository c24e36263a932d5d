//! Configuration file support for controls.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/controls/config.toml`. The file binds application actions to
//! keys and mouse buttons by name.
//!
//! If no config file exists, an empty binding table is used.

pub mod keybindings;

// Re-export commonly used types at module level
pub use keybindings::{BindingError, InvalidBinding, KeyBinding, KeybindingsConfig, Trigger};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [bindings]
/// quit = ["Escape", "Ctrl+Q"]
/// move_forward = ["W", "Up"]
/// select = ["MouseLeft"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Action name to list of keybindings, e.g. `quit = ["Escape", "Ctrl+Q"]`
    #[serde(default)]
    pub bindings: KeybindingsConfig,
}

impl Config {
    /// Drops entries that cannot be used and logs a warning for each.
    ///
    /// Binding strings naming unknown keys or buttons are removed so the rest
    /// of the table stays usable.
    fn validate(&mut self) {
        let removed = self.bindings.sanitize();
        if removed > 0 {
            warn!("Ignored {} invalid keybinding(s)", removed);
        }
    }

    /// Parses TOML text without validating individual bindings.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/controls/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("controls");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read_unvalidated(path)?;
        config.validate();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Reads a config file as written, keeping invalid bindings for reporting.
    pub fn read_unvalidated(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Saves the current configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, Self::example_toml())?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example shipped with the crate.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema of the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
