//! Geometrical object definitions.
//!
//! A drawing is made of three object kinds. They form a closed set, so they are
//! modelled as one enum and every consumer (codec, renderer, exporter) matches on
//! it exhaustively.

use super::color::Color;
use crate::util::{Extent, Rect};
use std::fmt;
use std::num::NonZeroU32;

/// Straight line segment between two points.
#[derive(Clone, Debug)]
pub struct Line {
    index: Option<NonZeroU32>,
    /// Starting X coordinate
    pub start_x: i32,
    /// Starting Y coordinate
    pub start_y: i32,
    /// Ending X coordinate
    pub end_x: i32,
    /// Ending Y coordinate
    pub end_y: i32,
    /// Stroke color
    pub color: Color,
}

/// Circle outline.
#[derive(Clone, Debug)]
pub struct Circle {
    index: Option<NonZeroU32>,
    /// Center X coordinate
    pub center_x: i32,
    /// Center Y coordinate
    pub center_y: i32,
    /// Radius in pixels, never negative
    pub radius: i32,
    /// Outline color
    pub color: Color,
}

/// Circle with a filled interior and a separately colored outline.
#[derive(Clone, Debug)]
pub struct FilledCircle {
    index: Option<NonZeroU32>,
    /// Center X coordinate
    pub center_x: i32,
    /// Center Y coordinate
    pub center_y: i32,
    /// Radius in pixels, never negative
    pub radius: i32,
    /// Outline color
    pub outline_color: Color,
    /// Interior color
    pub area_color: Color,
}

impl Line {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color) -> Self {
        Self {
            index: None,
            start_x,
            start_y,
            end_x,
            end_y,
            color,
        }
    }
}

impl Circle {
    pub fn new(center_x: i32, center_y: i32, radius: i32, color: Color) -> Self {
        Self {
            index: None,
            center_x,
            center_y,
            radius,
            color,
        }
    }
}

impl FilledCircle {
    pub fn new(
        center_x: i32,
        center_y: i32,
        radius: i32,
        outline_color: Color,
        area_color: Color,
    ) -> Self {
        Self {
            index: None,
            center_x,
            center_y,
            radius,
            outline_color,
            area_color,
        }
    }
}

// Equality is geometry and colors. The model index is bookkeeping of the owning
// model and does not survive the text format.

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.start_x, self.start_y, self.end_x, self.end_y, self.color)
            == (other.start_x, other.start_y, other.end_x, other.end_y, other.color)
    }
}

impl Eq for Line {}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        (self.center_x, self.center_y, self.radius, self.color)
            == (other.center_x, other.center_y, other.radius, other.color)
    }
}

impl Eq for Circle {}

impl PartialEq for FilledCircle {
    fn eq(&self, other: &Self) -> bool {
        (
            self.center_x,
            self.center_y,
            self.radius,
            self.outline_color,
            self.area_color,
        ) == (
            other.center_x,
            other.center_y,
            other.radius,
            other.outline_color,
            other.area_color,
        )
    }
}

impl Eq for FilledCircle {}

/// Which of the two numbering sequences an object draws its index from.
///
/// Lines are numbered on their own; circles and filled circles share one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCounter {
    Lines,
    Circles,
}

/// One object of a drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometricalObject {
    Line(Line),
    Circle(Circle),
    FilledCircle(FilledCircle),
}

impl GeometricalObject {
    /// Name used in the text document format (`LINE`, `CIRCLE`, `FCIRCLE`).
    pub fn format_name(&self) -> &'static str {
        match self {
            GeometricalObject::Line(_) => "LINE",
            GeometricalObject::Circle(_) => "CIRCLE",
            GeometricalObject::FilledCircle(_) => "FCIRCLE",
        }
    }

    /// Variant name used in display labels.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GeometricalObject::Line(_) => "Line",
            GeometricalObject::Circle(_) => "Circle",
            GeometricalObject::FilledCircle(_) => "FilledCircle",
        }
    }

    pub fn index_counter(&self) -> IndexCounter {
        match self {
            GeometricalObject::Line(_) => IndexCounter::Lines,
            GeometricalObject::Circle(_) | GeometricalObject::FilledCircle(_) => {
                IndexCounter::Circles
            }
        }
    }

    /// The 1-based index assigned when the object was added to a model, if any.
    pub fn index(&self) -> Option<u32> {
        self.index_slot().map(NonZeroU32::get)
    }

    fn index_slot(&self) -> Option<NonZeroU32> {
        match self {
            GeometricalObject::Line(line) => line.index,
            GeometricalObject::Circle(circle) => circle.index,
            GeometricalObject::FilledCircle(circle) => circle.index,
        }
    }

    /// Stores the index handed out by the owning model on insertion.
    ///
    /// A copy of an object that already sits in a model is renumbered.
    pub(crate) fn assign_index(&mut self, index: NonZeroU32) {
        let slot = match self {
            GeometricalObject::Line(line) => &mut line.index,
            GeometricalObject::Circle(circle) => &mut circle.index,
            GeometricalObject::FilledCircle(circle) => &mut circle.index,
        };
        *slot = Some(index);
    }

    /// Human-readable label (`Line 3`, `Circle 1`), for lists and logs only.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Stroke color for lines and circles, outline color for filled circles.
    pub fn stroke_color(&self) -> Color {
        match self {
            GeometricalObject::Line(line) => line.color,
            GeometricalObject::Circle(circle) => circle.color,
            GeometricalObject::FilledCircle(circle) => circle.outline_color,
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        match self {
            GeometricalObject::Line(line) => line.color = color,
            GeometricalObject::Circle(circle) => circle.color = color,
            GeometricalObject::FilledCircle(circle) => circle.outline_color = color,
        }
    }

    /// Interior color; only filled circles have one.
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            GeometricalObject::FilledCircle(circle) => Some(circle.area_color),
            _ => None,
        }
    }

    /// Replaces the interior color. Returns `false` for objects without an interior.
    pub fn set_fill_color(&mut self, color: Color) -> bool {
        match self {
            GeometricalObject::FilledCircle(circle) => {
                circle.area_color = color;
                true
            }
            _ => false,
        }
    }

    /// Pixel extent of the object: line endpoints, or `center ± radius` for circles.
    ///
    /// Both ends are inclusive, so a zero-length line or zero-radius circle covers
    /// one pixel. Computed in `i64`, so any decodable object has an extent.
    pub fn extent(&self) -> Extent {
        match self {
            GeometricalObject::Line(line) => Extent::spanning(
                line.start_x.into(),
                line.start_y.into(),
                line.end_x.into(),
                line.end_y.into(),
            ),
            GeometricalObject::Circle(Circle {
                center_x,
                center_y,
                radius,
                ..
            })
            | GeometricalObject::FilledCircle(FilledCircle {
                center_x,
                center_y,
                radius,
                ..
            }) => Extent::around(*center_x, *center_y, *radius),
        }
    }

    /// [`GeometricalObject::extent`] as a rectangle; `None` when it does not fit `i32`.
    pub fn bounds(&self) -> Option<Rect> {
        self.extent().to_rect()
    }
}

impl fmt::Display for GeometricalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(index) => write!(f, "{} {}", self.kind_name(), index),
            None => write!(f, "{}", self.kind_name()),
        }
    }
}

impl From<Line> for GeometricalObject {
    fn from(line: Line) -> Self {
        GeometricalObject::Line(line)
    }
}

impl From<Circle> for GeometricalObject {
    fn from(circle: Circle) -> Self {
        GeometricalObject::Circle(circle)
    }
}

impl From<FilledCircle> for GeometricalObject {
    fn from(circle: FilledCircle) -> Self {
        GeometricalObject::FilledCircle(circle)
    }
}
