//! Object drawer strategies: turn two pointer points and two colors into one object.
//!
//! A drawer is asked to draw repeatedly while a gesture is armed (live preview) and
//! once more on the committing click. Each call replaces the drawer's current
//! object, which the canvas reads back through [`ObjectDrawer::current_object`].

use super::tool::Tool;
use crate::draw::{Circle, Color, FilledCircle, GeometricalObject, Line};
use crate::util::Point;

/// Strategy producing a preview or final object from a gesture.
pub trait ObjectDrawer {
    /// Tool this drawer implements.
    fn tool(&self) -> Tool;

    /// Builds the object for `start`..`end` and stores it as the current object.
    ///
    /// # Arguments
    /// * `start` - First click of the gesture
    /// * `end` - Current pointer position or second click
    /// * `foreground` - Stroke/outline color
    /// * `background` - Fill color, used by filled shapes only
    fn draw(&mut self, start: Point, end: Point, foreground: Color, background: Color);

    /// Last object produced by [`ObjectDrawer::draw`], or `None` before the first call.
    fn current_object(&self) -> Option<&GeometricalObject>;
}

/// Places lines with the raw gesture coordinates; start need not precede end.
#[derive(Debug, Default)]
pub struct LineDrawer {
    current: Option<GeometricalObject>,
}

impl ObjectDrawer for LineDrawer {
    fn tool(&self) -> Tool {
        Tool::Line
    }

    fn draw(&mut self, start: Point, end: Point, foreground: Color, _background: Color) {
        self.current = Some(Line::new(start.x, start.y, end.x, end.y, foreground).into());
    }

    fn current_object(&self) -> Option<&GeometricalObject> {
        self.current.as_ref()
    }
}

/// Places circle outlines centered on the first click.
#[derive(Debug, Default)]
pub struct CircleDrawer {
    current: Option<GeometricalObject>,
}

impl ObjectDrawer for CircleDrawer {
    fn tool(&self) -> Tool {
        Tool::Circle
    }

    fn draw(&mut self, start: Point, end: Point, foreground: Color, _background: Color) {
        let radius = start.distance_truncated(end);
        self.current = Some(Circle::new(start.x, start.y, radius, foreground).into());
    }

    fn current_object(&self) -> Option<&GeometricalObject> {
        self.current.as_ref()
    }
}

/// Places filled circles: outline from the foreground, interior from the background.
#[derive(Debug, Default)]
pub struct FilledCircleDrawer {
    current: Option<GeometricalObject>,
}

impl ObjectDrawer for FilledCircleDrawer {
    fn tool(&self) -> Tool {
        Tool::FilledCircle
    }

    fn draw(&mut self, start: Point, end: Point, foreground: Color, background: Color) {
        let radius = start.distance_truncated(end);
        self.current =
            Some(FilledCircle::new(start.x, start.y, radius, foreground, background).into());
    }

    fn current_object(&self) -> Option<&GeometricalObject> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    #[test]
    fn nothing_before_first_draw() {
        for tool in Tool::ALL {
            assert!(tool.drawer().current_object().is_none());
        }
    }

    #[test]
    fn line_keeps_raw_coordinates() {
        let mut drawer = LineDrawer::default();
        drawer.draw(Point::new(10, 10), Point::new(-5, 2), RED, BLUE);
        assert_eq!(
            drawer.current_object(),
            Some(&GeometricalObject::from(Line::new(10, 10, -5, 2, RED)))
        );
    }

    #[test]
    fn circle_radius_is_truncated_distance() {
        let mut drawer = CircleDrawer::default();
        drawer.draw(Point::new(0, 0), Point::new(3, 4), RED, BLUE);
        assert_eq!(
            drawer.current_object(),
            Some(&GeometricalObject::from(Circle::new(0, 0, 5, RED)))
        );

        drawer.draw(Point::new(0, 0), Point::new(1, 1), BLUE, RED);
        assert_eq!(
            drawer.current_object(),
            Some(&GeometricalObject::from(Circle::new(0, 0, 1, BLUE)))
        );
    }

    #[test]
    fn filled_circle_uses_both_colors() {
        let mut drawer = FilledCircleDrawer::default();
        drawer.draw(Point::new(7, 7), Point::new(7, 7), RED, BLUE);
        assert_eq!(
            drawer.current_object(),
            Some(&GeometricalObject::from(FilledCircle::new(7, 7, 0, RED, BLUE)))
        );
    }
}
