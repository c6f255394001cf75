//! Library exports for the vdraw drawing editor core.
//!
//! Exposes the document model, the gesture state machine, document sessions,
//! raster export and configuration so that hosts (the `vdraw` binary, GUI front
//! ends, tests) share one implementation.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::Session;
