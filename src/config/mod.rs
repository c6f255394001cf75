//! Configuration file support for vdraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/vdraw/config.toml`. Settings cover the working colors and
//! starting tool of the canvas, and where and how raster exports are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig};

use crate::draw::{BLUE, Color, RED};
use crate::export::{ExportSettings, expand_tilde};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// foreground_color = "red"
/// background_color = [0, 0, 255]
/// default_tool = "filled-circle"
///
/// [export]
/// format = "png"
/// directory = "~/Pictures/vdraw"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas defaults (colors, starting tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Raster export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates configuration values, replacing unusable ones with defaults.
    ///
    /// Unknown color names fall back to the default color for that slot and an
    /// empty filename template falls back to the default template. A warning is
    /// logged for each replacement.
    fn validate_and_clamp(&mut self) {
        if !self.drawing.foreground_color.is_known() {
            warn!(
                "Invalid foreground_color {:?}, falling back to red",
                self.drawing.foreground_color
            );
            self.drawing.foreground_color = ColorSpec::Rgb([RED.r, RED.g, RED.b]);
        }

        if !self.drawing.background_color.is_known() {
            warn!(
                "Invalid background_color {:?}, falling back to blue",
                self.drawing.background_color
            );
            self.drawing.background_color = ColorSpec::Rgb([BLUE.r, BLUE.g, BLUE.b]);
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, using the default");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Foreground color the canvas starts with.
    pub fn foreground(&self) -> Color {
        self.drawing.foreground_color.to_color(RED)
    }

    /// Background color the canvas starts with.
    pub fn background(&self) -> Color {
        self.drawing.background_color.to_color(BLUE)
    }

    /// Export settings with `~/` expanded in the directory.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            directory: expand_tilde(&self.export.directory),
            filename_template: self.export.filename_template.clone(),
            format: self.export.format,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vdraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax or values
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}
