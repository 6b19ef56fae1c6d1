#![forbid(unsafe_code)]

//! Constraint solving: aspect-ratio lock, min/max clamping, slack.
//!
//! [`constrain`] is a pure function from one candidate size to the size
//! the engine may commit. Slack is the accumulated difference between
//! what the pointer asked for and what the bounds allowed; it is fed
//! back into the next candidate so that reversing the drag direction
//! does not unclamp until the pointer has retraced the overshoot.
//!
//! # Invariants
//!
//! 1. With neither `min` nor `max` configured, `constrain` is the
//!    identity on the candidate and leaves slack untouched.
//! 2. While candidates keep pushing past the same bound, slack
//!    magnitude on that axis is non-decreasing.
//! 3. The aspect-ratio step is a fixed point: applying it twice with
//!    the same committed size yields the same output.
//!
//! # Failure Modes
//!
//! - `min > max` on an axis is not validated. Min is applied first and
//!   max last, so the max bound wins; the committed size can then sit
//!   below `min`. Known latent inconsistency, preserved deliberately.
//! - Non-finite candidates are the caller's responsibility; the shim
//!   drops non-finite drag samples before they reach the solver.

use serde::{Deserialize, Serialize};
use sizegrip_core::Size;

/// Default minimum floor when no `min` bound is configured, keeping
/// degenerate zero or negative sizes out of committed state.
pub const MIN_FLOOR: Size = Size::new(20.0, 20.0);

/// Per-axis accumulated clamp excess.
///
/// Positive slack means the pointer travelled past a max bound (or
/// negative past a min bound) and that distance must be paid back
/// before the size moves again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slack {
    pub w: f64,
    pub h: f64,
}

impl Slack {
    /// No accumulated excess.
    pub const ZERO: Self = Self { w: 0.0, h: 0.0 };

    /// Whether both axes carry no excess.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.w == 0.0 && self.h == 0.0
    }
}

/// Bounds and ratio policy, immutable for the span of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Per-axis lower bounds. Absent means the [`MIN_FLOOR`] default.
    pub min: Option<Size>,
    /// Per-axis upper bounds. Absent means unbounded.
    pub max: Option<Size>,
    /// Force width/height to keep the committed size's ratio.
    pub lock_aspect_ratio: bool,
}

impl Constraints {
    /// No bounds, no ratio lock: `constrain` becomes the identity.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
        lock_aspect_ratio: false,
    };

    /// Whether any clamping bound is configured.
    #[inline]
    #[must_use]
    pub const fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Apply ratio lock and bounds to `candidate`, threading slack through.
///
/// Returns the size the caller may commit together with the updated
/// slack. Order of operations is part of the observable contract:
/// ratio lock, short-circuit when unbounded, slack pre-application,
/// clamp (min then max), slack accumulation.
#[must_use]
pub fn constrain(
    candidate: Size,
    current: Size,
    slack: Slack,
    constraints: &Constraints,
) -> (Size, Slack) {
    let mut width = candidate.width;
    let mut height = candidate.height;

    // Derive height from the candidate width, then re-derive width from
    // that height. Algebraically idempotent, but the two-step order is
    // observable under floating point and is kept exactly.
    if constraints.lock_aspect_ratio
        && let Some(ratio) = current.aspect_ratio()
    {
        height = width / ratio;
        width = height * ratio;
    }

    if !constraints.has_bounds() {
        return (Size::new(width, height), slack);
    }

    // Reapply prior clamp excess so reversing direction does not
    // unclamp until the overshoot is retraced.
    let (asked_w, asked_h) = (width, height);
    width += slack.w;
    height += slack.h;

    let min = constraints.min.unwrap_or(MIN_FLOOR);
    width = width.max(min.width);
    height = height.max(min.height);
    if let Some(max) = constraints.max {
        width = width.min(max.width);
        height = height.min(max.height);
    }

    let updated = Slack {
        w: slack.w + (asked_w - width),
        h: slack.h + (asked_h - height),
    };
    (Size::new(width, height), updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(min: (f64, f64), max: (f64, f64)) -> Constraints {
        Constraints {
            min: Some(Size::new(min.0, min.1)),
            max: Some(Size::new(max.0, max.1)),
            lock_aspect_ratio: false,
        }
    }

    #[test]
    fn unbounded_is_identity_and_slack_untouched() {
        let slack = Slack { w: 3.0, h: -2.0 };
        let candidate = Size::new(-50.0, 10_000.0);
        let (out, out_slack) = constrain(candidate, Size::new(1.0, 1.0), slack, &Constraints::UNBOUNDED);
        assert_eq!(out, candidate);
        assert_eq!(out_slack, slack);
    }

    #[test]
    fn clamps_to_bounds() {
        let (out, slack) = constrain(
            Size::new(10.0, 600.0),
            Size::new(100.0, 100.0),
            Slack::ZERO,
            &bounded((20.0, 20.0), (500.0, 500.0)),
        );
        assert_eq!(out, Size::new(20.0, 500.0));
        assert_eq!(slack, Slack { w: -10.0, h: 100.0 });
    }

    #[test]
    fn floor_applies_when_only_max_configured() {
        let constraints = Constraints {
            min: None,
            max: Some(Size::new(500.0, 500.0)),
            lock_aspect_ratio: false,
        };
        let (out, _) = constrain(
            Size::new(5.0, 5.0),
            Size::new(100.0, 100.0),
            Slack::ZERO,
            &constraints,
        );
        assert_eq!(out, MIN_FLOOR);
    }

    #[test]
    fn slack_accumulates_while_pinned_and_defers_unclamp() {
        let constraints = bounded((20.0, 20.0), (500.0, 500.0));
        let current = Size::new(500.0, 100.0);

        // Push 10 past the max: stays pinned, slack records the overshoot.
        let (out, slack) = constrain(Size::new(510.0, 100.0), current, Slack::ZERO, &constraints);
        assert_eq!(out.width, 500.0);
        assert_eq!(slack.w, 10.0);

        // Push 10 more: slack keeps growing, not compounding.
        let (out, slack) = constrain(Size::new(510.0, 100.0), current, slack, &constraints);
        assert_eq!(out.width, 500.0);
        assert_eq!(slack.w, 20.0);

        // Reverse by 5: still pinned, the overshoot is being paid back.
        let (out, slack) = constrain(Size::new(495.0, 100.0), current, slack, &constraints);
        assert_eq!(out.width, 500.0);
        assert_eq!(slack.w, 15.0);

        // Reverse past the remaining slack: finally unclamps.
        let (out, slack) = constrain(Size::new(480.0, 100.0), current, slack, &constraints);
        assert_eq!(out.width, 495.0);
        assert_eq!(slack.w, 0.0);
    }

    #[test]
    fn aspect_lock_recomputes_height_then_width() {
        let constraints = Constraints {
            min: None,
            max: None,
            lock_aspect_ratio: true,
        };
        // Committed 100x50 (ratio 2), candidate width 110.
        let (out, _) = constrain(
            Size::new(110.0, 50.0),
            Size::new(100.0, 50.0),
            Slack::ZERO,
            &constraints,
        );
        assert_eq!(out, Size::new(110.0, 55.0));
    }

    #[test]
    fn aspect_lock_is_a_fixed_point() {
        let constraints = Constraints {
            min: None,
            max: None,
            lock_aspect_ratio: true,
        };
        let current = Size::new(100.0, 50.0);
        let (once, _) = constrain(Size::new(137.0, 50.0), current, Slack::ZERO, &constraints);
        let (twice, _) = constrain(once, current, Slack::ZERO, &constraints);
        assert_eq!(once, twice);
    }

    #[test]
    fn aspect_lock_skipped_when_ratio_undefined() {
        let constraints = Constraints {
            min: None,
            max: None,
            lock_aspect_ratio: true,
        };
        let (out, _) = constrain(
            Size::new(110.0, 0.0),
            Size::new(100.0, 0.0),
            Slack::ZERO,
            &constraints,
        );
        assert_eq!(out, Size::new(110.0, 0.0));
    }

    #[test]
    fn min_above_max_lets_max_win() {
        let (out, _) = constrain(
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            Slack::ZERO,
            &bounded((300.0, 300.0), (200.0, 200.0)),
        );
        // Min is applied first, max last: the committed size sits below min.
        assert_eq!(out, Size::new(200.0, 200.0));
    }
}
