#![forbid(unsafe_code)]

//! Drag-to-resize controller: attachment slots, listener lifecycle, and the
//! resize callback.
//!
//! [`ResizeController`] is the embedder's single entry point. The host binds
//! its panel element and one or two edge handles to the controller's
//! attachment slots, forwards pointer lifecycle events, and applies the
//! returned [`ControllerDispatch`] values:
//!
//! - `applied_width`: write this pixel width to the panel element style
//!   immediately, so the panel tracks the pointer with no visible lag.
//! - `listener_command`: bind or release the document-level move/up
//!   listeners. The subscription is scoped to one drag session: `Attach` is
//!   emitted on session open and `Detach` on every exit path (commit or
//!   teardown), so handlers never leak across sessions.
//! - `resized`: the final clamped width, already delivered to the
//!   `on_resize` callback exactly once.
//!
//! # Invariants
//!
//! 1. `on_resize` fires exactly once per completed drag, with the final
//!    clamped width, never with intermediate values.
//! 2. Every `Attach` is paired with exactly one `Detach`.
//! 3. `teardown` never invokes `on_resize`: a destroyed component cannot
//!    fire callbacks.
//! 4. A pointer-down for an unbound handle, or while a session is active,
//!    is a silent no-op with an explicit [`IgnoredReason`].

use std::fmt;

use panelgrip_core::machine::{DragEffect, DragTransition, ResizeMachine};
use panelgrip_core::width::WidthBounds;
use panelgrip_core::{HandleSide, PanelStyle, ResizeMachineError, StartingWidth};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Controller configuration.
///
/// `min_width > max_width` is deliberately not validated; the clamp resolves
/// contradictory bounds to the min bound (documented undefined input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOptions {
    /// Initial width: literal pixels or a symbolic content-width token.
    pub starting_width: StartingWidth,
    /// Lower clamp bound in pixels; unbounded when absent.
    pub min_width: Option<f64>,
    /// Upper clamp bound in pixels; unbounded when absent.
    pub max_width: Option<f64>,
}

impl ResizeOptions {
    /// Options with the given starting width and no clamp bounds.
    #[must_use]
    pub fn new(starting_width: impl Into<StartingWidth>) -> Self {
        Self {
            starting_width: starting_width.into(),
            min_width: None,
            max_width: None,
        }
    }

    /// Set the lower clamp bound.
    #[must_use]
    pub const fn with_min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Set the upper clamp bound.
    #[must_use]
    pub const fn with_max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    const fn bounds(&self) -> WidthBounds {
        WidthBounds::new(self.min_width, self.max_width)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeConfigError {
    NonFiniteStartingWidth { value: f64 },
    Machine(ResizeMachineError),
}

impl fmt::Display for ResizeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteStartingWidth { value } => {
                write!(f, "starting width {value} is not finite")
            }
            Self::Machine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ResizeConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Machine(err) => Some(err),
            Self::NonFiniteStartingWidth { .. } => None,
        }
    }
}

impl From<ResizeMachineError> for ResizeConfigError {
    fn from(err: ResizeMachineError) -> Self {
        Self::Machine(err)
    }
}

// ---------------------------------------------------------------------------
// Host surface
// ---------------------------------------------------------------------------

/// Attachment slots the embedding UI binds to concrete visual elements.
///
/// All slots are unbound at construction. An unbound handle simply never
/// initiates a drag; its absence is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    Panel,
    LeftHandle,
    RightHandle,
}

/// Document-listener command for the host.
///
/// The move/up listeners live on the document, not the handle, so the drag
/// keeps tracking the pointer outside the element bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    /// Bind document-level move/up listeners for the session that just opened.
    Attach,
    /// Release the session's document-level listeners.
    Detach,
}

/// Deterministic reason why a pointer event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// No element is bound to the handle slot for this side.
    HandleUnbound,
    /// A drag session is already active; the new pointer-down is dropped.
    SessionAlreadyActive,
    /// Move/up arrived with no session open.
    NoActiveSession,
    /// The coordinate was NaN or infinite.
    NonFiniteInput,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerDispatch {
    /// Pixel width to write to the panel element style now.
    pub applied_width: Option<f64>,
    /// Document-listener command for the host to execute.
    pub listener_command: Option<ListenerCommand>,
    /// Final width delivered to `on_resize` by this dispatch.
    pub resized: Option<f64>,
    /// Why the event was ignored, when it was.
    pub ignored: Option<IgnoredReason>,
    /// Underlying machine transition, for hosts that trace sessions.
    pub transition: Option<DragTransition>,
}

impl ControllerDispatch {
    fn ignored(reason: IgnoredReason) -> Self {
        Self {
            ignored: Some(reason),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// ResizeController
// ---------------------------------------------------------------------------

/// Drag-to-resize controller for one panel with up to two edge handles.
///
/// The controller holds no strong ownership of the rendered element: the
/// panel slot is a weak back-reference modeled as the last width the host
/// reported or the controller applied. Width math lives in the machine from
/// `panelgrip-core`; this type adds slot bookkeeping, origin-width
/// resolution, listener scoping, and the callback.
pub struct ResizeController {
    starting_width: StartingWidth,
    machine: ResizeMachine,
    on_resize: Box<dyn FnMut(f64)>,
    panel_bound: bool,
    left_bound: bool,
    right_bound: bool,
    /// Last concrete pixel width; `None` until a symbolic starting width is
    /// replaced by a measurement or a drag.
    live_width: Option<f64>,
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("dragging", &self.machine.is_active())
            .field("live_width", &self.live_width)
            .finish()
    }
}

impl ResizeController {
    /// Construct a controller with validated configuration.
    ///
    /// `on_resize` is invoked exactly once per completed drag with the final
    /// clamped pixel width.
    pub fn new(
        options: ResizeOptions,
        on_resize: impl FnMut(f64) + 'static,
    ) -> Result<Self, ResizeConfigError> {
        if let StartingWidth::Px(px) = options.starting_width
            && !px.is_finite()
        {
            return Err(ResizeConfigError::NonFiniteStartingWidth { value: px });
        }
        let machine = ResizeMachine::new(options.bounds())?;
        Ok(Self {
            starting_width: options.starting_width,
            machine,
            on_resize: Box::new(on_resize),
            panel_bound: false,
            left_bound: false,
            right_bound: false,
            live_width: options.starting_width.px(),
        })
    }

    /// Computed style descriptor for the panel: the live pixel width once
    /// one exists, otherwise the starting width's style (which may be a CSS
    /// variable reference).
    #[must_use]
    pub fn style(&self) -> PanelStyle {
        match self.live_width {
            Some(width) => PanelStyle::px(width),
            None => self.starting_width.style(),
        }
    }

    /// Bind an attachment slot to a rendered element.
    pub fn bind(&mut self, point: AttachmentPoint) {
        *self.slot_mut(point) = true;
    }

    /// Release an attachment slot.
    pub fn unbind(&mut self, point: AttachmentPoint) {
        *self.slot_mut(point) = false;
    }

    /// Whether a slot currently has an element bound.
    #[must_use]
    pub const fn is_bound(&self, point: AttachmentPoint) -> bool {
        match point {
            AttachmentPoint::Panel => self.panel_bound,
            AttachmentPoint::LeftHandle => self.left_bound,
            AttachmentPoint::RightHandle => self.right_bound,
        }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.machine.is_active()
    }

    /// Sync the panel's measured width from the live element.
    ///
    /// Ignored mid-drag (the session recomputes from its own origin) and for
    /// non-finite measurements.
    pub fn set_measured_width(&mut self, px: f64) {
        if px.is_finite() && !self.machine.is_active() {
            self.live_width = Some(px);
        }
    }

    /// Pointer-down on a handle: open a drag session.
    ///
    /// The origin width is the controller's live width record, falling back
    /// to the starting width's pixel baseline (the medium preset default
    /// when symbolic). On success the host must attach the document-level
    /// move/up listeners.
    pub fn pointer_down(&mut self, side: HandleSide, x: f64) -> ControllerDispatch {
        let handle_bound = match side {
            HandleSide::Left => self.left_bound,
            HandleSide::Right => self.right_bound,
        };
        if !handle_bound {
            return ControllerDispatch::ignored(IgnoredReason::HandleUnbound);
        }

        let origin_width = self
            .live_width
            .unwrap_or_else(|| self.starting_width.baseline_px());
        let transition = match self.machine.pointer_down(side, x, origin_width) {
            Ok(transition) => transition,
            Err(_) => return ControllerDispatch::ignored(IgnoredReason::NonFiniteInput),
        };
        match transition.effect {
            DragEffect::SessionOpened { .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?side, origin_x = x, origin_width, "resize session opened");
                ControllerDispatch {
                    listener_command: Some(ListenerCommand::Attach),
                    transition: Some(transition),
                    ..ControllerDispatch::default()
                }
            }
            _ => ControllerDispatch {
                ignored: Some(IgnoredReason::SessionAlreadyActive),
                transition: Some(transition),
                ..ControllerDispatch::default()
            },
        }
    }

    /// Pointer-move during an active session: update the live width.
    ///
    /// The returned `applied_width` must be written to the panel element
    /// immediately (direct style mutation, not deferred).
    pub fn pointer_move(&mut self, x: f64) -> ControllerDispatch {
        let transition = match self.machine.pointer_move(x) {
            Ok(transition) => transition,
            Err(_) => return ControllerDispatch::ignored(IgnoredReason::NonFiniteInput),
        };
        match transition.effect {
            DragEffect::WidthChanged { width, .. } => {
                self.live_width = Some(width);
                ControllerDispatch {
                    applied_width: Some(width),
                    transition: Some(transition),
                    ..ControllerDispatch::default()
                }
            }
            _ => ControllerDispatch {
                ignored: Some(IgnoredReason::NoActiveSession),
                transition: Some(transition),
                ..ControllerDispatch::default()
            },
        }
    }

    /// Pointer-up: close the session, release the document listeners, and
    /// fire `on_resize` exactly once with the final clamped width.
    pub fn pointer_up(&mut self) -> ControllerDispatch {
        let transition = self.machine.pointer_up();
        match transition.effect {
            DragEffect::Committed { width, .. } => {
                self.live_width = Some(width);
                (self.on_resize)(width);
                #[cfg(feature = "tracing")]
                tracing::debug!(width, "resize committed");
                ControllerDispatch {
                    applied_width: Some(width),
                    listener_command: Some(ListenerCommand::Detach),
                    resized: Some(width),
                    transition: Some(transition),
                    ..ControllerDispatch::default()
                }
            }
            _ => ControllerDispatch {
                ignored: Some(IgnoredReason::NoActiveSession),
                transition: Some(transition),
                ..ControllerDispatch::default()
            },
        }
    }

    /// Release any active session on component destruction.
    ///
    /// Detaches the session's document listeners without invoking
    /// `on_resize`: a torn-down component must not fire callbacks.
    pub fn teardown(&mut self) -> ControllerDispatch {
        match self.machine.force_cancel() {
            Some(transition) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("resize session canceled on teardown");
                ControllerDispatch {
                    listener_command: Some(ListenerCommand::Detach),
                    transition: Some(transition),
                    ..ControllerDispatch::default()
                }
            }
            None => ControllerDispatch::default(),
        }
    }

    fn slot_mut(&mut self, point: AttachmentPoint) -> &mut bool {
        match point {
            AttachmentPoint::Panel => &mut self.panel_bound,
            AttachmentPoint::LeftHandle => &mut self.left_bound,
            AttachmentPoint::RightHandle => &mut self.right_bound,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
