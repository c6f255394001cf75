//! Drawing tool selection.

use super::drawer::{CircleDrawer, FilledCircleDrawer, LineDrawer, ObjectDrawer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines which object the two-click gesture places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Straight line from the first click to the second
    Line,
    /// Circle outline centered on the first click, through the second
    Circle,
    /// Filled circle; outline in the foreground color, interior in the background color
    #[serde(alias = "fcircle")]
    FilledCircle,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Line, Tool::Circle, Tool::FilledCircle];

    /// Creates a fresh drawer strategy for this tool.
    pub fn drawer(self) -> Box<dyn ObjectDrawer> {
        match self {
            Tool::Line => Box::new(LineDrawer::default()),
            Tool::Circle => Box::new(CircleDrawer::default()),
            Tool::FilledCircle => Box::new(FilledCircleDrawer::default()),
        }
    }

    /// Stable lowercase name, as accepted by [`Tool::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Circle => "circle",
            Tool::FilledCircle => "filled-circle",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(Tool::Line),
            "circle" => Ok(Tool::Circle),
            "filled-circle" | "filled_circle" | "fcircle" => Ok(Tool::FilledCircle),
            other => Err(format!(
                "unknown tool '{}' (expected line, circle or filled-circle)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Line".parse::<Tool>().unwrap(), Tool::Line);
        assert_eq!("fcircle".parse::<Tool>().unwrap(), Tool::FilledCircle);
        assert_eq!("filled_circle".parse::<Tool>().unwrap(), Tool::FilledCircle);
        assert!("triangle".parse::<Tool>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for tool in Tool::ALL {
            assert_eq!(tool.to_string().parse::<Tool>().unwrap(), tool);
            assert_eq!(tool.drawer().tool(), tool);
        }
    }
}
