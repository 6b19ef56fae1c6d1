#![forbid(unsafe_code)]

//! Resize-constraint engine for drag-handle resizable elements.
//!
//! # Role in sizegrip
//! This crate turns raw pointer-drag deltas into validated, bounded
//! `(width, height)` pairs and drives the resize lifecycle of a single
//! element. Rendering, styling, and pointer capture live with the host;
//! this crate only consumes `{node, delta_x, delta_y, phase}` samples
//! and announces committed sizes.
//!
//! # Primary responsibilities
//! - **resolve**: substitute measured extents for `auto` dimensions.
//! - **constrain**: aspect-ratio lock plus min/max clamping with slack
//!   accumulation, so boundary contact never oscillates.
//! - **lifecycle**: the `Idle` ⇄ `Resizing` state machine with
//!   commit-before-callback transition ordering.
//! - **resizable**: the host-facing shim wiring the three together
//!   behind a declarative configuration surface.
//!
//! # How it fits in the system
//! The host's drag collaborator produces [`DragEvent`]s and hands them
//! to [`Resizable::handle_drag`]; the host's rendering layer implements
//! [`Measure`] so `auto` sizes can be resolved at mount and refreshed
//! at gesture start. Committed sizes flow back out through the
//! `on_resize*` callback slots.

pub mod constrain;
pub mod lifecycle;
pub mod resizable;
pub mod resolve;

pub use constrain::{Constraints, MIN_FLOOR, Slack, constrain};
pub use lifecycle::{ResizeController, ResizeNotice};
pub use resizable::{Authority, DraggableOpts, Resizable, ResizableConfig, ResizeCallback};
pub use resolve::resolve_size;

pub use sizegrip_core::{
    DeclaredSize, Dimension, DragAxis, DragEvent, DragPhase, Measure, Measured, NodeId,
    NotMeasurable, ResizeHandle, Size,
};
