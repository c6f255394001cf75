//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// foreground_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// background_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Named colors are mapped with `util::name_to_color()`. Unknown names fall
    /// back to `fallback` with a warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {:?}", name, fallback);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }

    /// Whether a named color is one `name_to_color` knows.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, ORANGE, RED};

    #[test]
    fn named_and_rgb_specs_convert() {
        assert_eq!(ColorSpec::Name("orange".into()).to_color(RED), ORANGE);
        assert_eq!(
            ColorSpec::Rgb([1, 2, 3]).to_color(RED),
            Color::new(1, 2, 3)
        );
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let spec = ColorSpec::Name("mauve".into());
        assert!(!spec.is_known());
        assert_eq!(spec.to_color(BLUE), BLUE);
    }
}
