#![forbid(unsafe_code)]

//! Host-facing resize controller for DOM-like embedders.
//!
//! # Role in panelgrip
//! `panelgrip-web` wraps the deterministic machine from `panelgrip-core`
//! with everything a browser-style host needs: attachment slots for the
//! panel and its edge handles, document-listener lifecycle commands scoped
//! to one drag session, the computed panel style, and the `on_resize`
//! callback fired exactly once per completed drag.
//!
//! The controller stays host-driven and synchronous: the embedder forwards
//! pointer lifecycle events and interprets the returned
//! [`controller::ControllerDispatch`] (style writes, listener binding);
//! there are no hidden side effects on the host.

pub mod controller;

pub use controller::{
    AttachmentPoint, ControllerDispatch, IgnoredReason, ListenerCommand, ResizeConfigError,
    ResizeController, ResizeOptions,
};
pub use panelgrip_core::{ContentWidthPreset, HandleSide, PanelStyle, StartingWidth};
