//! Raster export of drawings.
//!
//! This module provides:
//! - Bounding-box computation and cairo rendering into an image buffer
//! - Encoding to JPEG, PNG or GIF through the `image` crate
//! - Output file naming (templated names, extension handling)

pub mod file;
pub mod raster;
pub mod types;

pub use file::{
    ExportSettings, ensure_directory_exists, expand_tilde, generate_filename, resolve_output_path,
};
pub use raster::{drawing_extent, export_objects, render_image, write_image};
pub use types::{ExportError, ExportFormat};
