//! Document session support.
//!
//! A [`Session`] is one open drawing: it loads documents with the skip-and-continue
//! policy, saves them back in the text format, exports rasters, applies property
//! edits, and tracks whether there are unsaved changes.

mod document;

pub use document::{LoadReport, Session, SessionError};
