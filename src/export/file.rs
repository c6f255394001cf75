//! Output path handling for exported images.

use super::types::{ExportError, ExportFormat};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how exports without an explicit file name are written.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Directory generated file names are placed in.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Default encoding.
    pub format: ExportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: ExportFormat::Png,
        }
    }
}

/// `<pictures>/vdraw`, falling back to the home directory.
pub fn default_export_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vdraw")
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - Encoding whose extension is appended
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, format: ExportFormat) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format.extension())
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|source| ExportError::Io {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Resolves the file an export to `target` writes.
///
/// A directory gets a generated file name from `template`. Any other path gets
/// `format`'s extension appended unless it already ends in a supported one.
pub fn resolve_output_path(target: &Path, format: ExportFormat, template: &str) -> PathBuf {
    if target.is_dir() {
        return target.join(generate_filename(template, format));
    }
    if ExportFormat::from_path(target).is_some() {
        return target.to_path_buf();
    }
    let mut name = target.as_os_str().to_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
