//! Canvas controller: the two-click gesture state machine and repaint requests.

use super::drawer::ObjectDrawer;
use super::tool::Tool;
use crate::draw::{
    BLUE, ChangeEvent, Color, DirtyTracker, DrawingModel, DrawingModelListener, GeometricalObject,
    RED, Surface, render_scene,
};
use crate::util::{Point, Rect};
use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Gesture state machine.
///
/// A gesture is two clicks: the first captures the start point, the second
/// commits the object the active drawer builds from both points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// First point captured, waiting for the second click
    Armed {
        /// Position of the first click
        start: Point,
    },
}

/// Repaint bookkeeping fed by model change events.
///
/// Subscribed to the canvas' own model so that every event, whoever caused it,
/// requests a repaint of the objects it names.
#[derive(Debug, Default)]
pub struct RepaintRequests {
    pending: Cell<bool>,
    dirty: RefCell<DirtyTracker>,
}

impl RepaintRequests {
    fn request_full(&self) {
        self.pending.set(true);
        self.dirty.borrow_mut().mark_full();
    }
}

impl DrawingModelListener for RepaintRequests {
    fn model_changed(&self, source: &DrawingModel, event: &ChangeEvent) {
        self.pending.set(true);
        self.dirty.borrow_mut().record_event(source, event);
    }
}

/// Interactive drawing surface controller.
///
/// Owns the document model, the active drawer, the two working colors and the
/// gesture state. Pointer events come in through [`Canvas::on_click`] and
/// [`Canvas::on_pointer_move`]; the host polls [`Canvas::needs_redraw`] and calls
/// [`Canvas::repaint`] (damaged regions only) or [`Canvas::render`] (everything).
pub struct Canvas {
    model: DrawingModel,
    state: GestureState,
    drawer: Option<Box<dyn ObjectDrawer>>,
    foreground: Color,
    background: Color,
    /// Latest pointer position seen while armed; cleared when the gesture commits
    pointer: Option<Point>,
    repaint: Rc<RepaintRequests>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an idle canvas over an empty model, red foreground and blue background.
    pub fn new() -> Self {
        Self::with_model(DrawingModel::new())
    }

    /// Creates an idle canvas over an existing model.
    pub fn with_model(model: DrawingModel) -> Self {
        let repaint = Rc::new(RepaintRequests::default());
        model.subscribe(repaint.clone());
        let canvas = Self {
            model,
            state: GestureState::Idle,
            drawer: None,
            foreground: RED,
            background: BLUE,
            pointer: None,
            repaint,
        };
        canvas.repaint.request_full();
        canvas
    }

    pub fn model(&self) -> &DrawingModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut DrawingModel {
        &mut self.model
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Tool of the active drawer, if any.
    pub fn tool(&self) -> Option<Tool> {
        self.drawer.as_ref().map(|drawer| drawer.tool())
    }

    /// Selects the drawer for `tool`, or none.
    ///
    /// An armed gesture stays armed with its start point; only the preview shape changes.
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.set_drawer(tool.map(Tool::drawer));
    }

    /// Installs a drawer strategy. See [`Canvas::set_tool`].
    pub fn set_drawer(&mut self, drawer: Option<Box<dyn ObjectDrawer>>) {
        debug!(
            "Drawer changed to {:?} while {:?}",
            drawer.as_ref().map(|d| d.tool()),
            self.state
        );
        self.drawer = drawer;
        if let (GestureState::Armed { start }, Some(pointer)) = (self.state, self.pointer) {
            self.update_preview(start, pointer);
        }
        self.repaint.request_full();
    }

    /// Handles a click at `(x, y)`.
    ///
    /// # Behavior
    /// - No drawer selected: ignored
    /// - Idle: captures the start point and arms the gesture
    /// - Armed: commits the drawer's object to the model and returns to Idle
    pub fn on_click(&mut self, x: i32, y: i32) {
        let position = Point::new(x, y);
        let Some(drawer) = self.drawer.as_mut() else {
            debug!("Click at {:?} ignored, no drawer selected", position);
            return;
        };

        match self.state {
            GestureState::Idle => {
                debug!("Gesture armed at {:?}", position);
                self.state = GestureState::Armed { start: position };
                self.repaint.request_full();
            }
            GestureState::Armed { start } => {
                drawer.draw(start, position, self.foreground, self.background);
                let object = drawer.current_object().cloned();
                self.state = GestureState::Idle;
                self.pointer = None;
                if let Some(object) = object {
                    debug!("Gesture {:?} -> {:?} committed", start, position);
                    self.model.add(object);
                }
                self.repaint.request_full();
            }
        }
    }

    /// Handles pointer motion. Only an armed gesture reacts, by refreshing the preview.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if let GestureState::Armed { start } = self.state {
            let position = Point::new(x, y);
            self.pointer = Some(position);
            self.update_preview(start, position);
            self.repaint.request_full();
        }
    }

    fn update_preview(&mut self, start: Point, end: Point) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.draw(start, end, self.foreground, self.background);
        }
    }

    /// In-progress object, present while armed once the pointer has moved.
    pub fn preview(&self) -> Option<&GeometricalObject> {
        match (self.state, self.pointer) {
            (GestureState::Armed { .. }, Some(_)) => self
                .drawer
                .as_ref()
                .and_then(|drawer| drawer.current_object()),
            _ => None,
        }
    }

    /// Whether something changed since the last [`Canvas::render`].
    pub fn needs_redraw(&self) -> bool {
        self.repaint.pending.get()
    }

    /// Drains the regions damaged since the last repaint, clipped to `viewport`.
    ///
    /// Full damage is reported as the viewport itself.
    pub fn take_dirty_regions(&mut self, viewport: Rect) -> Vec<Rect> {
        self.repaint.dirty.borrow_mut().take_regions(viewport)
    }

    /// Repaints the whole scene: clear, committed objects in order, preview on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_scene(surface, &self.model, self.preview());
        self.repaint.dirty.borrow_mut().clear();
        self.repaint.pending.set(false);
    }

    /// Repaints only what changed since the last repaint, clipped to `viewport`.
    ///
    /// Returns the regions that were redrawn so the host can present just those;
    /// nothing is drawn when the list is empty.
    pub fn repaint<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Rect) -> Vec<Rect> {
        let regions = self.repaint.dirty.borrow_mut().take_regions(viewport);
        if !regions.is_empty() {
            surface.clip_to(&regions);
            render_scene(surface, &self.model, self.preview());
        }
        self.repaint.pending.set(false);
        regions
    }
}
