//! Data types for raster export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Raster encoding of an exported drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossy JPEG
    #[serde(alias = "jpeg")]
    Jpg,
    /// Lossless PNG
    #[default]
    Png,
    /// Lossless GIF
    Gif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Jpg, ExportFormat::Png, ExportFormat::Gif];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpg => "jpg",
            ExportFormat::Png => "png",
            ExportFormat::Gif => "gif",
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            ExportFormat::Jpg => image::ImageFormat::Jpeg,
            ExportFormat::Png => image::ImageFormat::Png,
            ExportFormat::Gif => image::ImageFormat::Gif,
        }
    }

    /// Format implied by a path's extension, if it names a supported one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            "png" => Ok(ExportFormat::Png),
            "gif" => Ok(ExportFormat::Gif),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Errors that can occur during raster export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the drawing is empty")]
    EmptyDrawing,

    #[error("Unsupported export format '{0}' (expected jpg, png or gif)")]
    UnsupportedFormat(String),

    #[error("Drawing is too large to export ({width}x{height} pixels)")]
    TooLarge { width: i64, height: i64 },

    #[error("Cairo rendering failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Could not read rendered pixels: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively_with_jpeg_alias() {
        assert_eq!("JPEG".parse::<ExportFormat>().unwrap(), ExportFormat::Jpg);
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert!(matches!(
            "bmp".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(name)) if name == "bmp"
        ));
    }

    #[test]
    fn format_from_path_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/out.GIF")),
            Some(ExportFormat::Gif)
        );
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/out")), None);
        assert_eq!(ExportFormat::from_path(Path::new("out.txt")), None);
    }
}
