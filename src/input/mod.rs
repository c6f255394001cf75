//! Input handling and the gesture state machine.
//!
//! This module translates pointer clicks and motion into drawing objects. It
//! holds the active tool's drawer strategy, the foreground/background colors,
//! and the two-click gesture state (idle, armed).

pub mod canvas;
pub mod drawer;
pub mod tool;
#[cfg(test)]
mod tests;

// Re-export commonly used types at module level
pub use canvas::{Canvas, GestureState, RepaintRequests};
pub use drawer::{CircleDrawer, FilledCircleDrawer, LineDrawer, ObjectDrawer};
pub use tool::Tool;
