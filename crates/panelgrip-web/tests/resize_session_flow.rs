//! End-to-end drag session flows through a minimal fake host.
//!
//! The host mirrors what a DOM embedder does with each dispatch: it writes
//! `applied_width` to its element style, executes listener commands, and
//! records every `on_resize` delivery. The tests then assert on the host's
//! observable surface only, the way an embedder would experience the
//! controller.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use panelgrip_web::{
    AttachmentPoint, ControllerDispatch, HandleSide, ListenerCommand, ResizeController,
    ResizeOptions, StartingWidth,
};

struct FakeHost {
    controller: ResizeController,
    element_width: String,
    document_listeners: u32,
    resize_log: Rc<RefCell<Vec<f64>>>,
}

impl FakeHost {
    fn new(options: ResizeOptions) -> Self {
        let resize_log: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&resize_log);
        let mut controller = ResizeController::new(options, move |width| {
            sink.borrow_mut().push(width);
        })
        .expect("valid options");
        controller.bind(AttachmentPoint::Panel);
        controller.bind(AttachmentPoint::LeftHandle);
        controller.bind(AttachmentPoint::RightHandle);
        let element_width = controller.style().width;
        Self {
            controller,
            element_width,
            document_listeners: 0,
            resize_log,
        }
    }

    fn apply(&mut self, dispatch: ControllerDispatch) {
        if let Some(width) = dispatch.applied_width {
            // Direct style mutation, the way the embedder applies it.
            self.element_width = format!("{}px", width as i64);
        }
        match dispatch.listener_command {
            Some(ListenerCommand::Attach) => self.document_listeners += 1,
            Some(ListenerCommand::Detach) => self.document_listeners -= 1,
            None => {}
        }
    }

    fn mouse_down(&mut self, side: HandleSide, x: f64) {
        let dispatch = self.controller.pointer_down(side, x);
        self.apply(dispatch);
    }

    fn mouse_move(&mut self, x: f64) {
        let dispatch = self.controller.pointer_move(x);
        self.apply(dispatch);
    }

    fn mouse_up(&mut self) {
        let dispatch = self.controller.pointer_up();
        self.apply(dispatch);
    }

    fn resizes(&self) -> Vec<f64> {
        self.resize_log.borrow().clone()
    }
}

#[test]
fn consecutive_sessions_from_both_handles() {
    let mut host = FakeHost::new(ResizeOptions::new(500.0));
    assert_eq!(host.element_width, "500px");

    host.mouse_down(HandleSide::Right, 0.0);
    host.mouse_move(100.0);
    host.mouse_up();
    assert_eq!(host.element_width, "600px");
    assert_eq!(host.resizes(), vec![600.0]);
    assert_eq!(host.document_listeners, 0);

    host.mouse_down(HandleSide::Left, 0.0);
    host.mouse_move(-100.0);
    host.mouse_up();
    assert_eq!(host.element_width, "700px");
    assert_eq!(host.resizes(), vec![600.0, 700.0]);
    assert_eq!(host.document_listeners, 0);
}

#[test]
fn listeners_are_scoped_to_one_session() {
    let mut host = FakeHost::new(ResizeOptions::new(500.0));

    host.mouse_down(HandleSide::Right, 0.0);
    assert_eq!(host.document_listeners, 1);

    // A nested pointer-down must not double-subscribe.
    host.mouse_down(HandleSide::Left, 10.0);
    assert_eq!(host.document_listeners, 1);

    host.mouse_move(40.0);
    host.mouse_up();
    assert_eq!(host.document_listeners, 0);

    // Stray document events between sessions change nothing.
    host.mouse_move(80.0);
    host.mouse_up();
    assert_eq!(host.element_width, "540px");
    assert_eq!(host.resizes(), vec![540.0]);
}

#[test]
fn bounded_drag_tracks_the_pointer_through_the_clamp() {
    let mut host = FakeHost::new(
        ResizeOptions::new(500.0)
            .with_min_width(400.0)
            .with_max_width(600.0),
    );

    host.mouse_down(HandleSide::Right, 0.0);
    host.mouse_move(-300.0);
    assert_eq!(host.element_width, "400px");
    host.mouse_move(50.0);
    assert_eq!(host.element_width, "550px");
    host.mouse_move(400.0);
    assert_eq!(host.element_width, "600px");
    host.mouse_up();

    assert_eq!(host.resizes(), vec![600.0]);
}

#[test]
fn symbolic_start_becomes_concrete_after_the_first_drag() {
    let mut host = FakeHost::new(ResizeOptions::new(StartingWidth::content_width()));
    assert_eq!(host.element_width, "var(--content-width-medium)");

    host.mouse_down(HandleSide::Right, 0.0);
    host.mouse_move(32.0);
    host.mouse_up();

    // Medium fallback baseline (768) plus the drag delta.
    assert_eq!(host.element_width, "800px");
    assert_eq!(host.controller.style().width, "800px");
    assert_eq!(host.resizes(), vec![800.0]);
}

#[test]
fn teardown_mid_drag_releases_listeners_and_stays_silent() {
    let mut host = FakeHost::new(ResizeOptions::new(500.0));

    host.mouse_down(HandleSide::Right, 0.0);
    host.mouse_move(120.0);
    assert_eq!(host.document_listeners, 1);

    let dispatch = host.controller.teardown();
    host.apply(dispatch);

    assert_eq!(host.document_listeners, 0);
    assert_eq!(host.resizes(), Vec::<f64>::new());
    // The last applied width is still on the element; no commit happened.
    assert_eq!(host.element_width, "620px");
}
