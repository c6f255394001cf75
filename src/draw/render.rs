//! Rendering of drawing objects onto an abstract 2-D surface.
//!
//! Objects never talk to cairo directly. They render through [`Surface`], which
//! [`CairoSurface`] implements for a `cairo::Context`. The same code path is used
//! for the interactive canvas and for raster export.

use super::color::{Color, WHITE};
use super::object::GeometricalObject;
use crate::util::Rect;
use std::f64::consts::PI;

/// Stroke width used for lines and circle outlines.
pub const STROKE_WIDTH: f64 = 1.0;

/// Minimal drawing surface the objects render onto.
///
/// Coordinates are canvas pixels; the surface decides how they map to its backing store.
pub trait Surface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Strokes a straight segment from `(x1, y1)` to `(x2, y2)`.
    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// Fills a circle's interior.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// Restricts later drawing to the union of `regions`. Surfaces without
    /// clipping redraw everything, which is also correct.
    fn clip_to(&mut self, _regions: &[Rect]) {}
}

/// [`Surface`] backed by a cairo drawing context.
pub struct CairoSurface<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoSurface<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }

    fn set_color(&self, color: Color) {
        let (r, g, b) = color.to_cairo_rgb();
        self.ctx.set_source_rgb(r, g, b);
    }

    fn circle_path(&self, cx: i32, cy: i32, radius: i32) {
        self.ctx.new_sub_path();
        self.ctx
            .arc(cx as f64 + 0.5, cy as f64 + 0.5, radius as f64, 0.0, 2.0 * PI);
    }
}

impl Surface for CairoSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.set_color(color);
        let _ = self.ctx.paint();
    }

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.set_color(color);
        self.ctx.set_line_width(STROKE_WIDTH);
        self.ctx.set_line_cap(cairo::LineCap::Square);

        // Pixel centers, so one-pixel strokes land on whole pixels
        self.ctx.move_to(x1 as f64 + 0.5, y1 as f64 + 0.5);
        self.ctx.line_to(x2 as f64 + 0.5, y2 as f64 + 0.5);
        let _ = self.ctx.stroke();
    }

    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.set_color(color);
        self.ctx.set_line_width(STROKE_WIDTH);
        if radius == 0 {
            self.ctx
                .rectangle(cx as f64, cy as f64, STROKE_WIDTH, STROKE_WIDTH);
            let _ = self.ctx.fill();
            return;
        }
        self.circle_path(cx, cy, radius);
        let _ = self.ctx.stroke();
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius == 0 {
            return;
        }
        self.set_color(color);
        self.circle_path(cx, cy, radius);
        let _ = self.ctx.fill();
    }

    fn clip_to(&mut self, regions: &[Rect]) {
        self.ctx.reset_clip();
        self.ctx.new_path();
        for rect in regions {
            self.ctx.rectangle(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
        self.ctx.clip();
    }
}

impl GeometricalObject {
    /// Renders the object onto `surface`.
    ///
    /// A filled circle paints its interior first, then the outline on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            GeometricalObject::Line(line) => surface.stroke_line(
                line.start_x,
                line.start_y,
                line.end_x,
                line.end_y,
                line.color,
            ),
            GeometricalObject::Circle(circle) => surface.stroke_circle(
                circle.center_x,
                circle.center_y,
                circle.radius,
                circle.color,
            ),
            GeometricalObject::FilledCircle(circle) => {
                surface.fill_circle(
                    circle.center_x,
                    circle.center_y,
                    circle.radius,
                    circle.area_color,
                );
                surface.stroke_circle(
                    circle.center_x,
                    circle.center_y,
                    circle.radius,
                    circle.outline_color,
                );
            }
        }
    }
}

/// Renders all objects in order (first object = bottom layer).
///
/// # Arguments
/// * `surface` - Surface to render to
/// * `objects` - Objects in insertion order
pub fn render_objects<'a, S, I>(surface: &mut S, objects: I)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a GeometricalObject>,
{
    for object in objects {
        object.render(surface);
    }
}

/// Full repaint: clear to white, draw every object, then the optional preview on top.
///
/// # Arguments
/// * `surface` - Surface to render to
/// * `objects` - Committed objects in insertion order
/// * `preview` - In-progress object of an armed gesture, drawn topmost
pub fn render_scene<'a, S, I>(surface: &mut S, objects: I, preview: Option<&GeometricalObject>)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a GeometricalObject>,
{
    surface.clear(WHITE);
    render_objects(surface, objects);
    if let Some(preview) = preview {
        preview.render(surface);
    }
}
