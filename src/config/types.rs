//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the working colors and tool the canvas starts with.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Foreground (stroke/outline) color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_foreground")]
    pub foreground_color: ColorSpec,

    /// Background (fill) color used by filled circles
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,

    /// Tool selected at startup: "line", "circle" or "filled-circle". None by default.
    #[serde(default)]
    pub default_tool: Option<Tool>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            foreground_color: default_foreground(),
            background_color: default_background(),
            default_tool: None,
        }
    }
}

/// Raster export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Image format when none is given: "jpg", "png" or "gif"
    #[serde(default)]
    pub format: ExportFormat,

    /// Directory for exports without an explicit file name (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template for generated names (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

fn default_foreground() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_export_directory() -> String {
    crate::export::file::default_export_directory()
        .to_string_lossy()
        .into_owned()
}

pub(crate) fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
