#![forbid(unsafe_code)]

//! Resize lifecycle: the `Idle` ⇄ `Resizing` state machine.
//!
//! [`ResizeController`] is a stateful processor that converts drag-phase
//! samples into committed size updates. Transitions are two-phase: the
//! state commit happens inside [`apply`](ResizeController::apply), and
//! the returned [`ResizeNotice`] tells the caller which callback to
//! dispatch *afterwards*. A callback that synchronously reads the
//! controller therefore always sees the post-transition state.
//!
//! # State Machine
//!
//! - **start** (`Idle → Resizing`): deltas ignored, start notice emitted.
//! - **drag** (`Resizing → Resizing`): candidate = committed + permitted
//!   deltas, constrained, committed only when it actually changed.
//! - **stop** (`Resizing → Idle`): the final deltas run through the
//!   pipeline once more, then slack resets and the stop notice fires.
//!
//! # Invariants
//!
//! 1. Slack is exactly zero whenever the controller is idle.
//! 2. A drag sample whose constrained result equals the committed size
//!    produces no notice and no size mutation.
//! 3. Notices are emitted only after the commit for that phase is
//!    visible through [`size`](ResizeController::size).
//!
//! # Failure Modes
//!
//! - Malformed phase sequences (`drag` or `stop` while idle, double
//!   `start`) are tolerated as no-op transitions; the external drag
//!   collaborator is trusted but not verified.
//! - A gesture whose `stop` never arrives leaves the controller in
//!   `Resizing` permanently; there is no watchdog, by contract with the
//!   event source.

use crate::constrain::{Constraints, Slack, constrain};
use sizegrip_core::{DragAxis, DragEvent, DragPhase, NodeId, Size};

/// What a committed transition asks the caller to announce.
///
/// `phase` selects the callback slot (`Start`/`Drag`/`Stop` map to
/// `on_resize_start`/`on_resize`/`on_resize_stop`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeNotice {
    pub node: NodeId,
    pub size: Size,
    pub phase: DragPhase,
}

/// State machine turning drag-phase samples into validated size commits.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeController {
    resizing: bool,
    current: Size,
    slack: Slack,
}

impl ResizeController {
    /// Create an idle controller holding the initial resolved size.
    #[must_use]
    pub fn new(initial: Size) -> Self {
        Self {
            resizing: false,
            current: initial,
            slack: Slack::ZERO,
        }
    }

    /// Last committed, constraint-satisfying size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.current
    }

    /// True strictly between a `start` and the matching `stop`.
    #[inline]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Accumulated clamp excess for the active gesture.
    #[inline]
    #[must_use]
    pub fn slack(&self) -> Slack {
        self.slack
    }

    /// Overwrite the committed size. Callers enforce the authority
    /// policy: the owner may only write while the controller is idle.
    pub(crate) fn set_size(&mut self, size: Size) {
        self.current = size;
    }

    /// Apply one drag-phase sample.
    ///
    /// Deltas must already be finite and adjusted for handle placement
    /// and transform scale. Returns the notice to dispatch after the
    /// commit, or `None` when the sample was a no-op.
    pub fn apply(
        &mut self,
        event: &DragEvent,
        axis: DragAxis,
        constraints: &Constraints,
    ) -> Option<ResizeNotice> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "resize_transition",
            phase = ?event.phase,
            node = event.node.get(),
            resizing = self.resizing
        )
        .entered();

        match event.phase {
            DragPhase::Start => {
                if self.resizing {
                    return None;
                }
                self.resizing = true;
                Some(ResizeNotice {
                    node: event.node,
                    size: self.current,
                    phase: DragPhase::Start,
                })
            }
            DragPhase::Drag => {
                if !self.resizing {
                    return None;
                }
                self.drag_step(event, axis, constraints)
            }
            DragPhase::Stop => {
                if !self.resizing {
                    return None;
                }
                // The final position must itself satisfy constraints.
                let _ = self.drag_step(event, axis, constraints);
                self.resizing = false;
                self.slack = Slack::ZERO;
                Some(ResizeNotice {
                    node: event.node,
                    size: self.current,
                    phase: DragPhase::Stop,
                })
            }
        }
    }

    fn drag_step(
        &mut self,
        event: &DragEvent,
        axis: DragAxis,
        constraints: &Constraints,
    ) -> Option<ResizeNotice> {
        let dw = if axis.allows_width() { event.delta_x } else { 0.0 };
        let dh = if axis.allows_height() { event.delta_y } else { 0.0 };

        // No permitted axis moved: skip the solver entirely so pinned
        // slack does not churn on phantom samples.
        if dw == 0.0 && dh == 0.0 {
            return None;
        }

        let candidate = Size::new(self.current.width + dw, self.current.height + dh);
        let (next, slack) = constrain(candidate, self.current, self.slack, constraints);

        // Slack commits even when the size is pinned; the size commit
        // and notice are suppressed to avoid redundant re-layout.
        self.slack = slack;
        if next == self.current {
            return None;
        }

        self.current = next;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = next.width,
            height = next.height,
            "resize committed"
        );
        Some(ResizeNotice {
            node: event.node,
            size: next,
            phase: DragPhase::Drag,
        })
    }
}
