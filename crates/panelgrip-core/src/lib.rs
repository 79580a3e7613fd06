#![forbid(unsafe_code)]

//! Core: pointer event vocabulary, width model, and the drag-to-resize
//! lifecycle machine.
//!
//! # Role in panelgrip
//! `panelgrip-core` is the deterministic model layer. It owns the edge-handle
//! vocabulary, the width/style model (pixel and symbolic widths, clamp
//! bounds), and [`machine::ResizeMachine`], the state machine that turns a
//! pointer-down / move / up sequence into a clamped panel width.
//!
//! # How it fits in the system
//! The host-facing controller (`panelgrip-web`) consumes this crate: it
//! resolves the drag origin width from its element slot, forwards pointer
//! lifecycle calls to the machine, and translates the emitted transitions
//! into style writes, listener commands, and the resize callback. Nothing in
//! this crate assumes a DOM or any particular embedder.

pub mod event;
pub mod machine;
pub mod width;

pub use event::HandleSide;
pub use machine::{
    DragEffect, DragNoopReason, DragState, DragTransition, ResizeMachine, ResizeMachineError,
};
pub use width::{ContentWidthPreset, PanelStyle, StartingWidth, WidthBounds};
