#![forbid(unsafe_code)]

//! Drag-to-resize lifecycle machine.
//!
//! [`ResizeMachine`] converts a pointer-down / pointer-move / pointer-up
//! sequence on an edge handle into a clamped panel width. Each lifecycle
//! call emits one [`DragTransition`] with deterministic telemetry fields, in
//! the same shape the host controller consumes.
//!
//! # State Machine
//!
//! ```text
//! Idle -> Dragging -> Idle   (pointer_up commits, force_cancel does not)
//! ```
//!
//! There is no activation threshold: the session opens on pointer-down and
//! the first move already changes the width, so the panel tracks the pointer
//! with no dead zone.
//!
//! # Invariants
//!
//! 1. At most one session is active; a pointer-down during an active session
//!    is ignored with an explicit `Noop` diagnostic.
//! 2. The width after move *n* is `clamp(origin_width + widen_delta(x_n −
//!    origin_x))`: exactly the cumulative delta, recomputed from the session
//!    origin, never an accumulation of per-move increments.
//! 3. Every committed width satisfies the configured bounds.
//! 4. `pointer_up` commits the last clamped width and never recomputes; a
//!    session with no moves commits its origin width.
//! 5. `force_cancel` ends a session with zero commits.
//! 6. `transition_id` is strictly increasing per machine.
//!
//! # Failure Modes
//!
//! Non-finite coordinates or origin widths are rejected without touching the
//! machine state. There are no other failure modes: out-of-protocol events
//! (move while idle, nested pointer-down) degrade to `Noop` effects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::HandleSide;
use crate::width::WidthBounds;

// ---------------------------------------------------------------------------
// State and transitions
// ---------------------------------------------------------------------------

/// Lifecycle state of the resize machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    Idle,
    Dragging {
        /// Edge handle that opened the session.
        side: HandleSide,
        /// Pointer X at session start.
        origin_x: f64,
        /// Panel width at session start.
        origin_width: f64,
        /// Last clamped width (the origin width until the first move).
        width: f64,
    },
}

/// Explicit no-op diagnostics for lifecycle calls that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    SessionAlreadyActive,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    SessionOpened {
        side: HandleSide,
        origin_x: f64,
        origin_width: f64,
    },
    WidthChanged {
        side: HandleSide,
        /// Clamped width to apply to the panel immediately.
        width: f64,
        /// Cumulative pointer delta since the session opened.
        total_delta: f64,
    },
    Committed {
        side: HandleSide,
        /// Final clamped width, reported to the host exactly once.
        width: f64,
    },
    Canceled {
        side: HandleSide,
    },
    Noop {
        reason: DragNoopReason,
    },
}

/// One state-machine transition with deterministic telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragState,
    pub to: DragState,
    pub effect: DragEffect,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Validation errors for machine construction and pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMachineError {
    NonFiniteCoordinate { x: f64 },
    NonFiniteOriginWidth { width: f64 },
    NonFiniteBound,
}

impl fmt::Display for ResizeMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { x } => {
                write!(f, "pointer coordinate {x} is not finite")
            }
            Self::NonFiniteOriginWidth { width } => {
                write!(f, "origin width {width} is not finite")
            }
            Self::NonFiniteBound => write!(f, "width bounds must be finite"),
        }
    }
}

impl std::error::Error for ResizeMachineError {}

// ---------------------------------------------------------------------------
// ResizeMachine
// ---------------------------------------------------------------------------

/// Runtime lifecycle machine for one resizable panel.
///
/// The machine is pure width math: it knows nothing about elements,
/// listeners, or callbacks. The host controller resolves the origin width,
/// forwards pointer lifecycle calls, and interprets the emitted effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeMachine {
    state: DragState,
    bounds: WidthBounds,
    transition_counter: u64,
}

impl ResizeMachine {
    /// Construct a machine with the given clamp bounds.
    ///
    /// Bounds must be finite where configured. `min > max` is not validated;
    /// see [`WidthBounds::clamp`] for the resulting behavior.
    pub fn new(bounds: WidthBounds) -> Result<Self, ResizeMachineError> {
        if !bounds.is_finite() {
            return Err(ResizeMachineError::NonFiniteBound);
        }
        Ok(Self {
            state: DragState::Idle,
            bounds,
            transition_counter: 0,
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Configured clamp bounds.
    #[must_use]
    pub const fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Open a drag session.
    ///
    /// `origin_width` is the panel's concrete width at session start, as
    /// resolved by the host. A pointer-down while a session is already
    /// active is ignored (`Noop { SessionAlreadyActive }`): the original
    /// session keeps its origin and continues.
    pub fn pointer_down(
        &mut self,
        side: HandleSide,
        x: f64,
        origin_width: f64,
    ) -> Result<DragTransition, ResizeMachineError> {
        if !x.is_finite() {
            return Err(ResizeMachineError::NonFiniteCoordinate { x });
        }
        if !origin_width.is_finite() {
            return Err(ResizeMachineError::NonFiniteOriginWidth {
                width: origin_width,
            });
        }

        let from = self.state;
        let effect = match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging {
                    side,
                    origin_x: x,
                    origin_width,
                    width: origin_width,
                };
                DragEffect::SessionOpened {
                    side,
                    origin_x: x,
                    origin_width,
                }
            }
            DragState::Dragging { .. } => DragEffect::Noop {
                reason: DragNoopReason::SessionAlreadyActive,
            },
        };
        Ok(self.transition(from, effect))
    }

    /// Process a pointer move during an active session.
    ///
    /// Recomputes the width from the session origin so each move reflects
    /// the full cumulative delta, then clamps to the configured bounds.
    pub fn pointer_move(&mut self, x: f64) -> Result<DragTransition, ResizeMachineError> {
        if !x.is_finite() {
            return Err(ResizeMachineError::NonFiniteCoordinate { x });
        }

        let from = self.state;
        let effect = match self.state {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            DragState::Dragging {
                side,
                origin_x,
                origin_width,
                ..
            } => {
                let total_delta = x - origin_x;
                let width = self
                    .bounds
                    .clamp(origin_width + side.widen_delta(total_delta));
                self.state = DragState::Dragging {
                    side,
                    origin_x,
                    origin_width,
                    width,
                };
                DragEffect::WidthChanged {
                    side,
                    width,
                    total_delta,
                }
            }
        };
        Ok(self.transition(from, effect))
    }

    /// Close the session and commit the last clamped width.
    ///
    /// Takes no coordinate: the commit is exactly the width produced by the
    /// final move (or the origin width when no move occurred), never a fresh
    /// computation.
    pub fn pointer_up(&mut self) -> DragTransition {
        let from = self.state;
        let effect = match self.state {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            DragState::Dragging { side, width, .. } => {
                self.state = DragState::Idle;
                DragEffect::Committed { side, width }
            }
        };
        self.transition(from, effect)
    }

    /// Unconditionally return to `Idle` without committing.
    ///
    /// Safety valve for host teardown mid-drag: the session ends, no
    /// callback-facing `Committed` effect is produced. Returns `None` when
    /// the machine is already idle.
    pub fn force_cancel(&mut self) -> Option<DragTransition> {
        let from = self.state;
        match from {
            DragState::Idle => None,
            DragState::Dragging { side, .. } => {
                self.state = DragState::Idle;
                Some(self.transition(from, DragEffect::Canceled { side }))
            }
        }
    }

    fn transition(&mut self, from: DragState, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
