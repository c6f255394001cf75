//! The open document: model, current path, saved state and file commands.

use crate::draw::{
    ChangeEvent, Color, DecodeError, DrawingModel, DrawingModelListener, LineFailure, ModelError,
    decode_document, encode_document,
};
use crate::export::{self, ExportError, ExportFormat};
use crate::input::Canvas;
use log::{debug, info, warn};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by document commands.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document has no file path; use save-as")]
    NoPath,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid properties: {0}")]
    Edit(#[from] DecodeError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Result of [`Session::open`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Objects appended to the model.
    pub loaded: usize,
    /// Lines that could not be decoded, with 1-based line numbers.
    pub failures: Vec<LineFailure>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Model listener that flips to "unsaved" on any change event.
#[derive(Debug)]
struct SavedFlag {
    saved: Cell<bool>,
}

impl DrawingModelListener for SavedFlag {
    fn model_changed(&self, _source: &DrawingModel, _event: &ChangeEvent) {
        if self.saved.replace(false) {
            debug!("Document now has unsaved changes");
        }
    }
}

/// One open drawing document.
///
/// Owns the canvas (and through it the model), the path the document was opened
/// from or last saved to, and whether the model has changed since the last save.
pub struct Session {
    canvas: Canvas,
    current_path: Option<PathBuf>,
    saved: Rc<SavedFlag>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty, saved document with no path.
    pub fn new() -> Self {
        Self::with_canvas(Canvas::new())
    }

    /// Wraps an existing canvas. The document starts out saved.
    pub fn with_canvas(canvas: Canvas) -> Self {
        let saved = Rc::new(SavedFlag {
            saved: Cell::new(true),
        });
        canvas.model().subscribe(saved.clone());
        Self {
            canvas,
            current_path: None,
            saved,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn model(&self) -> &DrawingModel {
        self.canvas.model()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// True when the model changed since the document was created, opened or saved.
    pub fn has_unsaved_changes(&self) -> bool {
        !self.saved.saved.get()
    }

    /// Display labels of all objects in model order (`Line 1`, `Circle 2`, ...).
    pub fn labels(&self) -> Vec<String> {
        self.model().iter().map(|object| object.label()).collect()
    }

    /// Reads `path` and appends every decodable line to the model.
    ///
    /// Lines that fail to decode are skipped and reported in the returned
    /// [`LoadReport`]; the rest still load. On success the document's path
    /// becomes `path`. Opening into an empty document with no failures leaves it
    /// saved.
    pub fn open(&mut self, path: &Path) -> Result<LoadReport, SessionError> {
        let text = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let was_pristine = self.model().is_empty() && !self.has_unsaved_changes();
        let decoded = decode_document(&text);
        let loaded = decoded.objects.len();
        for object in decoded.objects {
            self.canvas.model_mut().add(object);
        }

        if decoded.failures.is_empty() {
            info!("Opened {} ({} objects)", path.display(), loaded);
        } else {
            warn!(
                "Opened {} with {} unreadable lines ({} objects loaded)",
                path.display(),
                decoded.failures.len(),
                loaded
            );
        }

        self.current_path = Some(path.to_path_buf());
        if was_pristine && decoded.failures.is_empty() {
            self.saved.saved.set(true);
        }

        Ok(LoadReport {
            loaded,
            failures: decoded.failures,
        })
    }

    /// Writes the document to its current path.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let path = self.current_path.clone().ok_or(SessionError::NoPath)?;
        self.write_to(&path)
    }

    /// Makes `path` the document's path, then saves.
    pub fn save_as(&mut self, path: &Path) -> Result<(), SessionError> {
        self.current_path = Some(path.to_path_buf());
        self.write_to(path)
    }

    fn write_to(&mut self, path: &Path) -> Result<(), SessionError> {
        let text = encode_document(self.model());
        fs::write(path, text).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.saved.saved.set(true);
        info!("Saved {} objects to {}", self.model().len(), path.display());
        Ok(())
    }

    /// Renders the drawing to a raster image at `path`.
    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<(), SessionError> {
        export::export_objects(self.model().objects(), path, format)?;
        Ok(())
    }

    /// Replaces the properties of object `index` from edit-form fields, then notifies.
    ///
    /// Fields follow the edit order (plain red, green, blue for every color). On a
    /// parse failure the object is left untouched and no event fires.
    pub fn edit_object(&mut self, index: usize, fields: &[&str]) -> Result<(), SessionError> {
        let model = self.canvas.model_mut();
        model.get_mut(index)?.apply_fields(fields)?;
        model.mark_changed(index)?;
        Ok(())
    }

    /// Replaces the stroke color of object `index` and, when given and applicable,
    /// its fill color, then notifies.
    pub fn recolor(
        &mut self,
        index: usize,
        stroke: Color,
        fill: Option<Color>,
    ) -> Result<(), SessionError> {
        let model = self.canvas.model_mut();
        let object = model.get_mut(index)?;
        object.set_stroke_color(stroke);
        if let Some(fill) = fill
            && !object.set_fill_color(fill)
        {
            debug!("{} has no fill; fill color ignored", object);
        }
        model.mark_changed(index)?;
        Ok(())
    }
}
