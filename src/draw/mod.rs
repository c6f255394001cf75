//! Drawing objects, the document model, and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: 8-bit RGB color with predefined constants
//! - [`GeometricalObject`]: the closed set of drawable objects (line, circle, filled circle)
//! - [`DrawingModel`]: ordered object store with change notification
//! - Text encoding/decoding of documents and rendering onto a [`Surface`]

pub mod codec;
pub mod color;
pub mod dirty;
pub mod model;
pub mod object;
pub mod render;

// Re-export commonly used types at module level
pub use codec::{
    DecodeError, DecodedDocument, FormatReason, LineFailure, decode_document, decode_object,
    encode_document,
};
pub use color::Color;
pub use dirty::DirtyTracker;
pub use model::{ChangeEvent, ChangeKind, DrawingModel, DrawingModelListener, ModelError};
pub use object::{Circle, FilledCircle, GeometricalObject, Line};
pub use render::{CairoSurface, Surface, render_objects, render_scene};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
