//! Small geometry and color helpers shared across the crate.
//!
//! This module provides:
//! - [`Point`]: integer pointer/canvas coordinates
//! - [`Rect`]: axis-aligned rectangle used for bounds and dirty regions
//! - [`Extent`]: overflow-free inclusive pixel range that converts to a [`Rect`]
//! - Name-to-color mapping used by the configuration system and the CLI

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry
// ============================================================================

/// Integer position on the canvas, as delivered by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, truncated toward zero.
    ///
    /// Matches the radius rule of the circle tools: `(0,0)` to `(3,4)` is `5`,
    /// `(0,0)` to `(1,1)` is `1`.
    pub fn distance_truncated(self, other: Point) -> i32 {
        let dx = (other.x as f64) - (self.x as f64);
        let dy = (other.y as f64) - (self.y as f64);
        (dx * dx + dy * dy).sqrt() as i32
    }
}

/// Axis-aligned rectangle helper used for object bounds and dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Overlap of the two rectangles, or `None` when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let right = |r: &Rect| i64::from(r.x) + i64::from(r.width);
        let bottom = |r: &Rect| i64::from(r.y) + i64::from(r.height);
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let width = right(self).min(right(other)) - i64::from(x);
        let height = bottom(self).min(bottom(other)) - i64::from(y);
        Rect::new(
            x,
            y,
            i32::try_from(width).ok()?,
            i32::try_from(height).ok()?,
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Inclusive pixel extent in 64-bit coordinates.
///
/// Object geometry is `i32` based, so `center ± radius` and `max - min + 1` can
/// leave the `i32` range. They never leave `i64`; conversion to a [`Rect`] is
/// the checked step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Extent {
    /// Extent spanning both corners, in either order.
    pub fn spanning(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Square of side `2 * radius + 1` centered on `(x, y)`.
    pub fn around(x: i32, y: i32, radius: i32) -> Self {
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(radius));
        Self::spanning(x - r, y - r, x + r, y + r)
    }

    /// Smallest extent covering both.
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Pixel count along X; a single point is 1 wide.
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }

    /// The same pixels as a [`Rect`], or `None` when origin or size exceed `i32`.
    pub fn to_rect(self) -> Option<Rect> {
        Rect::new(
            i32::try_from(self.min_x).ok()?,
            i32::try_from(self.min_y).ok()?,
            i32::try_from(self.width()).ok()?,
            i32::try_from(self.height()).ok()?,
        )
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the command line to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses either a color name or an `r,g,b` triple of 0-255 components.
pub fn parse_color(spec: &str) -> Option<Color> {
    if let Some(color) = name_to_color(spec.trim()) {
        return Some(color);
    }

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    Some(Color::new(r, g, b))
}
