#![forbid(unsafe_code)]

//! Measurement seam to the host's rendering layer.
//!
//! Resolving an `Auto` dimension needs the node's rendered extent. The
//! host implements [`Measure`] over its own element handles; the engine
//! calls it only when resolution actually requires a measurement.
//!
//! # Failure Modes
//!
//! - Measuring before the element is mounted fails with
//!   [`NotMeasurable`]. This is a precondition violation on the caller's
//!   side: it is not retried and aborts the resolve call.

use crate::event::NodeId;
use std::fmt;

/// Measured on-screen extent of a mounted element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measured {
    pub client_width: f64,
    pub client_height: f64,
}

impl Measured {
    /// Create a measurement snapshot.
    #[inline]
    pub const fn new(client_width: f64, client_height: f64) -> Self {
        Self {
            client_width,
            client_height,
        }
    }
}

/// Measurement collaborator, callable only once the element is mounted.
///
/// Each call is a fresh snapshot; implementations must not cache on
/// behalf of the engine.
pub trait Measure {
    /// Snapshot the node's rendered extent.
    ///
    /// # Errors
    ///
    /// [`NotMeasurable`] if the node is not mounted yet.
    fn measure(&self, node: NodeId) -> Result<Measured, NotMeasurable>;
}

/// Measurement was requested before the element was mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotMeasurable {
    pub node: NodeId,
}

impl fmt::Display for NotMeasurable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {} is not mounted and cannot be measured",
            self.node.get()
        )
    }
}

impl std::error::Error for NotMeasurable {}
