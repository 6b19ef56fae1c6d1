#![forbid(unsafe_code)]

//! Size primitives.
//!
//! Extents are `f64` pixels. A [`Dimension`] is what the owner declares
//! (a fixed pixel value or the `Auto` sentinel); a [`Size`] is what the
//! engine works with after resolution.

use serde::{Deserialize, Serialize};

/// A single declared extent: fixed pixels or derived from rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Fixed extent in pixels.
    Px(f64),
    /// Derive from the node's rendered content at resolve time.
    #[default]
    Auto,
}

impl Dimension {
    /// Whether this dimension needs measurement to resolve.
    #[inline]
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The fixed pixel value, if declared.
    #[inline]
    #[must_use]
    pub const fn px(self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(v),
            Self::Auto => None,
        }
    }
}

/// A resolved width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Width/height ratio. `None` when height is zero (ratio undefined).
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f64> {
        if self.height == 0.0 {
            None
        } else {
            Some(self.width / self.height)
        }
    }
}

/// The owner-declared size: one [`Dimension`] per axis, prior to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeclaredSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl DeclaredSize {
    /// Both axes fixed in pixels.
    #[inline]
    pub const fn px(width: f64, height: f64) -> Self {
        Self {
            width: Dimension::Px(width),
            height: Dimension::Px(height),
        }
    }

    /// Both axes derived from rendered content.
    #[inline]
    pub const fn auto() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
        }
    }

    /// Whether any axis needs measurement to resolve.
    #[inline]
    #[must_use]
    pub const fn needs_measurement(self) -> bool {
        self.width.is_auto() || self.height.is_auto()
    }
}
