use super::*;
use crate::draw::render::recording::{Op, RecordingSurface};
use crate::draw::{
    BLUE, ChangeEvent, ChangeKind, Color, DrawingModel, DrawingModelListener, FilledCircle, GREEN,
    GeometricalObject, Line, RED, WHITE,
};
use crate::util::{Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct EventLog {
    events: RefCell<Vec<(ChangeEvent, GeometricalObject)>>,
}

impl DrawingModelListener for EventLog {
    fn model_changed(&self, source: &DrawingModel, event: &ChangeEvent) {
        let object = source
            .get(event.index0)
            .expect("event index is within the model")
            .clone();
        self.events.borrow_mut().push((*event, object));
    }
}

fn viewport() -> Rect {
    Rect::new(0, 0, 100, 100).unwrap()
}

fn canvas_with_log(tool: Option<Tool>) -> (Canvas, Rc<EventLog>) {
    let mut canvas = Canvas::new();
    let log = Rc::new(EventLog::default());
    canvas.model().subscribe(log.clone());
    canvas.set_tool(tool);
    (canvas, log)
}

#[test]
fn two_clicks_commit_exactly_one_object() {
    let (mut canvas, log) = canvas_with_log(Some(Tool::Circle));
    assert_eq!(canvas.state(), GestureState::Idle);

    canvas.on_click(0, 0);
    assert_eq!(
        canvas.state(),
        GestureState::Armed {
            start: Point::new(0, 0)
        }
    );
    assert!(log.events.borrow().is_empty());

    canvas.on_click(3, 4);
    assert_eq!(canvas.state(), GestureState::Idle);

    let events = log.events.borrow();
    assert_eq!(events.len(), 1);
    let (event, object) = &events[0];
    assert_eq!(event.kind, ChangeKind::Added);
    assert_eq!((event.index0, event.index1), (0, 0));
    match object {
        GeometricalObject::Circle(circle) => {
            assert_eq!((circle.center_x, circle.center_y), (0, 0));
            assert_eq!(circle.radius, 5);
            assert_eq!(circle.color, RED);
        }
        other => panic!("expected a circle, got {:?}", other),
    }
    assert_eq!(object.index(), Some(1));
}

#[test]
fn clicks_without_drawer_are_ignored() {
    let (mut canvas, log) = canvas_with_log(None);
    canvas.on_click(1, 1);
    canvas.on_click(5, 5);
    canvas.on_pointer_move(9, 9);
    assert_eq!(canvas.state(), GestureState::Idle);
    assert!(canvas.model().is_empty());
    assert!(log.events.borrow().is_empty());
}

#[test]
fn pointer_moves_while_idle_do_nothing() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Line));
    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    assert!(!canvas.needs_redraw());

    canvas.on_pointer_move(4, 4);
    assert!(!canvas.needs_redraw());
    assert!(canvas.preview().is_none());
}

#[test]
fn pointer_move_while_armed_updates_preview() {
    let (mut canvas, log) = canvas_with_log(Some(Tool::Line));
    canvas.on_click(10, 10);
    assert!(canvas.preview().is_none());

    canvas.on_pointer_move(20, 15);
    assert_eq!(
        canvas.preview(),
        Some(&GeometricalObject::from(Line::new(10, 10, 20, 15, RED)))
    );
    assert!(canvas.needs_redraw());
    assert!(log.events.borrow().is_empty());
    assert_eq!(
        canvas.state(),
        GestureState::Armed {
            start: Point::new(10, 10)
        }
    );
}

#[test]
fn preview_is_cleared_after_commit() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Line));
    canvas.on_click(0, 0);
    canvas.on_pointer_move(2, 2);
    canvas.on_click(3, 3);
    assert!(canvas.preview().is_none());

    canvas.on_click(5, 5);
    assert!(canvas.preview().is_none());
}

#[test]
fn drawer_swap_keeps_armed_start_point() {
    let (mut canvas, log) = canvas_with_log(Some(Tool::Line));
    canvas.on_click(1, 2);
    canvas.on_pointer_move(4, 6);

    canvas.set_tool(Some(Tool::FilledCircle));
    assert_eq!(
        canvas.state(),
        GestureState::Armed {
            start: Point::new(1, 2)
        }
    );
    assert_eq!(
        canvas.preview(),
        Some(&GeometricalObject::from(FilledCircle::new(1, 2, 5, RED, BLUE)))
    );

    canvas.on_click(4, 6);
    let events = log.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].1.format_name(), "FCIRCLE");
}

#[test]
fn deselecting_drawer_while_armed_blocks_commit() {
    let (mut canvas, log) = canvas_with_log(Some(Tool::Circle));
    canvas.on_click(0, 0);
    canvas.set_tool(None);
    canvas.on_click(5, 5);
    assert!(log.events.borrow().is_empty());

    canvas.set_tool(Some(Tool::Circle));
    canvas.on_click(6, 8);
    let events = log.events.borrow();
    assert_eq!(events.len(), 1);
    match &events[0].1 {
        GeometricalObject::Circle(circle) => {
            assert_eq!((circle.center_x, circle.center_y, circle.radius), (0, 0, 10));
        }
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn zero_radius_circle_is_committed() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Circle));
    canvas.on_click(7, 7);
    canvas.on_click(7, 7);
    match canvas.model().get(0).unwrap() {
        GeometricalObject::Circle(circle) => assert_eq!(circle.radius, 0),
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn colors_are_read_at_commit_time() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::FilledCircle));
    canvas.on_click(0, 0);
    canvas.set_foreground(GREEN);
    canvas.set_background(WHITE);
    canvas.on_click(0, 2);
    assert_eq!(
        canvas.model().get(0).unwrap().fill_color(),
        Some(WHITE)
    );
    assert_eq!(canvas.model().get(0).unwrap().stroke_color(), GREEN);
}

#[test]
fn render_draws_objects_then_preview() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Line));
    canvas.on_click(0, 0);
    canvas.on_click(1, 1);
    canvas.set_foreground(Color::new(1, 2, 3));
    canvas.on_click(5, 5);
    canvas.on_pointer_move(6, 7);

    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    assert_eq!(
        surface.ops,
        vec![
            Op::Clear(WHITE),
            Op::Line(0, 0, 1, 1, RED),
            Op::Line(5, 5, 6, 7, Color::new(1, 2, 3)),
        ]
    );
    assert!(!canvas.needs_redraw());
}

#[test]
fn model_edits_request_repaint_of_object_bounds() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Circle));
    canvas.on_click(10, 10);
    canvas.on_click(10, 12);
    canvas.render(&mut RecordingSurface::default());
    assert!(canvas.take_dirty_regions(viewport()).is_empty());

    canvas
        .model_mut()
        .get_mut(0)
        .unwrap()
        .set_stroke_color(GREEN);
    canvas.model().mark_changed(0).unwrap();

    assert!(canvas.needs_redraw());
    assert_eq!(
        canvas.take_dirty_regions(viewport()),
        vec![Rect::new(8, 8, 5, 5).unwrap()]
    );
}

#[test]
fn repaint_clips_to_damage_and_skips_clean_frames() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Line));
    canvas.on_click(0, 0);
    canvas.on_click(3, 3);
    canvas.render(&mut RecordingSurface::default());

    let mut idle = RecordingSurface::default();
    assert!(canvas.repaint(&mut idle, viewport()).is_empty());
    assert!(idle.ops.is_empty());

    canvas.model_mut().get_mut(0).unwrap().set_stroke_color(BLUE);
    canvas.model().mark_changed(0).unwrap();

    let mut surface = RecordingSurface::default();
    let regions = canvas.repaint(&mut surface, viewport());
    assert_eq!(regions, vec![Rect::new(0, 0, 4, 4).unwrap()]);
    assert_eq!(
        surface.ops,
        vec![
            Op::Clip(regions.clone()),
            Op::Clear(WHITE),
            Op::Line(0, 0, 3, 3, BLUE),
        ]
    );
    assert!(!canvas.needs_redraw());
}

#[test]
fn gesture_steps_damage_the_whole_viewport() {
    let (mut canvas, _log) = canvas_with_log(Some(Tool::Circle));
    canvas.render(&mut RecordingSurface::default());

    canvas.on_click(10, 10);
    assert_eq!(canvas.take_dirty_regions(viewport()), vec![viewport()]);
    canvas.on_pointer_move(12, 10);
    assert_eq!(canvas.take_dirty_regions(viewport()), vec![viewport()]);
}
