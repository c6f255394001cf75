//! RGB color type and predefined color constants.

/// Represents an opaque RGB color with 8-bit components.
///
/// This is the color model of the text document format: every color is stored
/// as three integers in the range 0-255.
///
/// # Examples
///
/// ```
/// use vdraw::draw::Color;
/// let red = Color::new(255, 0, 0);
/// assert_eq!(red.to_cairo_rgb(), (1.0, 0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to Cairo's floating-point components (0.0 - 1.0).
    pub fn to_cairo_rgb(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color, the default foreground
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined green color
pub const GREEN: Color = Color::new(0, 255, 0);

/// Predefined blue color, the default background
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Color = Color::new(255, 128, 0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::new(255, 0, 255);

/// Predefined white color, used to clear the canvas
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined black color
pub const BLACK: Color = Color::new(0, 0, 0);
