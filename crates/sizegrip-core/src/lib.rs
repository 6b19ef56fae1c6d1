#![forbid(unsafe_code)]

//! Core: geometry, drag-phase events, and measurement contracts.
//!
//! # Role in sizegrip
//! `sizegrip-core` is the vocabulary layer. It owns the size/dimension
//! primitives, the normalized drag-phase event type that the engine
//! consumes, and the measurement seam to the host's rendering layer.
//!
//! # Primary responsibilities
//! - **Dimension / Size**: declared extents (fixed pixels or content-derived)
//!   and resolved pixel pairs.
//! - **DragEvent**: canonical drag samples (`start`/`drag`/`stop` plus deltas).
//! - **Measure**: the contract a mounted host element fulfils so `auto`
//!   dimensions can be resolved from rendered content.
//!
//! # How it fits in the system
//! The engine crate (`sizegrip`) consumes these types and drives the
//! resize lifecycle; the host application produces `DragEvent`s from its
//! pointer-drag collaborator and implements [`Measure`] over its node
//! handles. Neither side depends on the other's internals.

pub mod event;
pub mod geometry;
pub mod measure;

pub use event::{DragAxis, DragEvent, DragPhase, NodeId, ResizeHandle};
pub use geometry::{DeclaredSize, Dimension, Size};
pub use measure::{Measure, Measured, NotMeasurable};
