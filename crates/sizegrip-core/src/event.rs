#![forbid(unsafe_code)]

//! Drag-phase events and drag policy types.
//!
//! The external pointer-drag collaborator delivers a stream of
//! [`DragEvent`]s per gesture: exactly one `Start`, any number of
//! `Drag`s, then one `Stop`. Phases of one gesture never interleave
//! with another gesture on the same instance. The engine trusts but
//! does not verify this contract; malformed sequences degrade to
//! no-op transitions rather than errors.

use serde::{Deserialize, Serialize};

/// Opaque handle to the host element being resized.
///
/// The engine never dereferences a `NodeId`; it only flows through to
/// callbacks and the measurement collaborator, which map it back to a
/// real element on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw host handle.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host handle.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Phase of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPhase {
    /// Gesture begins; deltas carried on this sample are ignored.
    Start,
    /// Pointer moved while dragging; repeatable.
    Drag,
    /// Gesture ends; the final deltas still pass through the pipeline.
    Stop,
}

/// One raw sample from the external drag collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub node: NodeId,
    pub phase: DragPhase,
    /// Horizontal pointer movement since the previous sample, in pixels.
    pub delta_x: f64,
    /// Vertical pointer movement since the previous sample, in pixels.
    pub delta_y: f64,
}

impl DragEvent {
    /// Create a sample.
    #[inline]
    pub const fn new(node: NodeId, phase: DragPhase, delta_x: f64, delta_y: f64) -> Self {
        Self {
            node,
            phase,
            delta_x,
            delta_y,
        }
    }

    /// Both deltas are finite numbers.
    #[inline]
    #[must_use]
    pub fn has_finite_deltas(&self) -> bool {
        self.delta_x.is_finite() && self.delta_y.is_finite()
    }
}

/// Which axes a drag may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragAxis {
    /// Both axes follow the pointer.
    #[default]
    Both,
    /// Width only; height stays at the committed value.
    Horizontal,
    /// Height only; width stays at the committed value.
    Vertical,
    /// Neither axis; every drag sample is a no-op.
    None,
}

impl DragAxis {
    /// Whether width may change under this policy.
    #[inline]
    #[must_use]
    pub const fn allows_width(self) -> bool {
        matches!(self, Self::Both | Self::Horizontal)
    }

    /// Whether height may change under this policy.
    #[inline]
    #[must_use]
    pub const fn allows_height(self) -> bool {
        matches!(self, Self::Both | Self::Vertical)
    }
}

/// Compass placement of the drag handle on the element.
///
/// West and north placements invert the respective delta sign: dragging
/// a west handle further left grows the element, so the raw negative
/// `delta_x` must count as positive growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeHandle {
    North,
    NorthEast,
    East,
    #[default]
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeHandle {
    /// Sign multipliers `(sx, sy)` applied to raw deltas for this placement.
    #[must_use]
    pub const fn delta_signs(self) -> (f64, f64) {
        let sx = match self {
            Self::West | Self::SouthWest | Self::NorthWest => -1.0,
            _ => 1.0,
        };
        let sy = match self {
            Self::North | Self::NorthEast | Self::NorthWest => -1.0,
            _ => 1.0,
        };
        (sx, sy)
    }
}
