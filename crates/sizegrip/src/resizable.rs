#![forbid(unsafe_code)]

//! Host-integration shim: configuration surface, callbacks, authority.
//!
//! [`Resizable`] is what an owning application holds. It wires the
//! resolver, the constraint solver, and the lifecycle controller behind
//! a declarative [`ResizableConfig`], dispatches the `on_resize*`
//! callbacks after each commit, and arbitrates size authority: the
//! owner's size wins at rest, the gesture's size wins mid-drag.

use crate::constrain::Constraints;
use crate::lifecycle::{ResizeController, ResizeNotice};
use crate::resolve::resolve_size;
use serde::{Deserialize, Serialize};
use sizegrip_core::{
    DeclaredSize, Dimension, DragAxis, DragEvent, DragPhase, Measure, NodeId, NotMeasurable,
    ResizeHandle, Size,
};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque pass-through settings for the external drag collaborator.
///
/// Validated at the host boundary, forwarded unchanged via
/// [`ResizableConfig::draggable_opts`]; the engine never reads the
/// contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggableOpts(pub BTreeMap<String, String>);

/// Declarative configuration for one [`Resizable`] instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizableConfig {
    /// Initial / authoritative-at-rest width.
    pub width: Dimension,
    /// Initial / authoritative-at-rest height.
    pub height: Dimension,
    /// Visual extent of the drag handle; pass-through, unused by the core.
    pub handle_size: f64,
    /// Compass placement of the handle; flips delta signs for west/north.
    pub handle: ResizeHandle,
    /// Keep the committed width/height ratio while dragging.
    pub lock_aspect_ratio: bool,
    /// Which axes a drag may change.
    pub axis: DragAxis,
    /// Per-axis lower bounds; absent means the default floor.
    pub min_constraints: Option<Size>,
    /// Per-axis upper bounds; absent means unbounded.
    pub max_constraints: Option<Size>,
    /// Divisor for raw deltas when the host surface is scale-transformed.
    pub transform_scale: f64,
    /// Forwarded unchanged to the drag collaborator.
    pub draggable_opts: DraggableOpts,
}

impl Default for ResizableConfig {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            handle_size: 20.0,
            handle: ResizeHandle::SouthEast,
            lock_aspect_ratio: false,
            axis: DragAxis::Both,
            min_constraints: None,
            max_constraints: None,
            transform_scale: 1.0,
            draggable_opts: DraggableOpts::default(),
        }
    }
}

impl ResizableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    pub fn handle_size(mut self, handle_size: f64) -> Self {
        self.handle_size = handle_size;
        self
    }

    pub fn handle(mut self, handle: ResizeHandle) -> Self {
        self.handle = handle;
        self
    }

    pub fn lock_aspect_ratio(mut self, lock: bool) -> Self {
        self.lock_aspect_ratio = lock;
        self
    }

    pub fn axis(mut self, axis: DragAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn min_constraints(mut self, min: Size) -> Self {
        self.min_constraints = Some(min);
        self
    }

    pub fn max_constraints(mut self, max: Size) -> Self {
        self.max_constraints = Some(max);
        self
    }

    pub fn transform_scale(mut self, scale: f64) -> Self {
        self.transform_scale = scale;
        self
    }

    pub fn draggable_opts(mut self, opts: DraggableOpts) -> Self {
        self.draggable_opts = opts;
        self
    }

    /// The declared size prior to resolution.
    #[inline]
    #[must_use]
    pub const fn declared_size(&self) -> DeclaredSize {
        DeclaredSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Bounds and ratio policy handed to the solver each gesture.
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> Constraints {
        Constraints {
            min: self.min_constraints,
            max: self.max_constraints,
            lock_aspect_ratio: self.lock_aspect_ratio,
        }
    }
}

/// Who currently owns the committed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authority {
    /// At rest: owner-supplied sizes apply immediately.
    #[default]
    Owner,
    /// Mid-gesture: the lifecycle owns the size; owner updates defer.
    Gesture,
}

/// Callback invoked after a committed transition: `(event, notice)`.
pub type ResizeCallback = Box<dyn FnMut(&DragEvent, &ResizeNotice)>;

/// A resizable element instance: lifecycle plus host wiring.
pub struct Resizable {
    config: ResizableConfig,
    controller: ResizeController,
    pending_owner_size: Option<Size>,
    on_resize_start: Option<ResizeCallback>,
    on_resize: Option<ResizeCallback>,
    on_resize_stop: Option<ResizeCallback>,
}

impl fmt::Debug for Resizable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resizable")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("pending_owner_size", &self.pending_owner_size)
            .finish_non_exhaustive()
    }
}

impl Resizable {
    /// Create an instance whose initial size is already resolved.
    #[must_use]
    pub fn with_size(config: ResizableConfig, size: Size) -> Self {
        Self {
            config,
            controller: ResizeController::new(size),
            pending_owner_size: None,
            on_resize_start: None,
            on_resize: None,
            on_resize_stop: None,
        }
    }

    /// Create an instance, resolving `width`/`height` against the
    /// mounted node.
    ///
    /// # Errors
    ///
    /// [`NotMeasurable`] when an axis is `auto` and the node is not
    /// mounted yet.
    pub fn mount(
        config: ResizableConfig,
        node: NodeId,
        measurer: &dyn Measure,
    ) -> Result<Self, NotMeasurable> {
        let size = resolve_size(config.declared_size(), node, measurer)?;
        Ok(Self::with_size(config, size))
    }

    /// Install the gesture-start callback.
    pub fn on_resize_start(mut self, f: impl FnMut(&DragEvent, &ResizeNotice) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    /// Install the per-commit callback.
    pub fn on_resize(mut self, f: impl FnMut(&DragEvent, &ResizeNotice) + 'static) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }

    /// Install the gesture-stop callback.
    pub fn on_resize_stop(mut self, f: impl FnMut(&DragEvent, &ResizeNotice) + 'static) -> Self {
        self.on_resize_stop = Some(Box::new(f));
        self
    }

    /// The declarative configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ResizableConfig {
        &self.config
    }

    /// Last committed size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.controller.size()
    }

    /// Whether a gesture is in flight.
    #[inline]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.controller.is_resizing()
    }

    /// Who owns the size right now, derived from the lifecycle state.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Authority {
        if self.controller.is_resizing() {
            Authority::Gesture
        } else {
            Authority::Owner
        }
    }

    /// Owner-supplied size update.
    ///
    /// The owner is authoritative at rest: while idle the size applies
    /// immediately. During a gesture the update is deferred and applied
    /// once the gesture stops (after `on_resize_stop` has observed the
    /// gesture's final size).
    pub fn set_size(&mut self, size: Size) {
        match self.authority() {
            Authority::Owner => self.controller.set_size(size),
            Authority::Gesture => self.pending_owner_size = Some(size),
        }
    }

    /// Feed one sample from the external drag collaborator.
    ///
    /// On `Start`, `auto` axes are re-resolved against a fresh
    /// measurement so content growth between gestures is picked up;
    /// fixed axes keep the committed value. Non-finite moving deltas —
    /// raw, or produced by a degenerate `transform_scale` — are dropped
    /// at this boundary, per the solver's contract; a non-finite `stop`
    /// still ends the gesture with its final delta discarded. Returns
    /// the notice that was dispatched, if any.
    ///
    /// # Errors
    ///
    /// [`NotMeasurable`] when a `Start` sample needs measurement and
    /// the node cannot be measured; same fail-fast precondition as
    /// [`Resizable::mount`].
    pub fn handle_drag(
        &mut self,
        event: &DragEvent,
        measurer: &dyn Measure,
    ) -> Result<Option<ResizeNotice>, NotMeasurable> {
        if event.phase == DragPhase::Start && !self.controller.is_resizing() {
            self.refresh_auto_axes(event.node, measurer)?;
        }

        let (sx, sy) = self.config.handle.delta_signs();
        let scale = self.config.transform_scale;
        let mut adjusted = DragEvent {
            delta_x: sx * event.delta_x / scale,
            delta_y: sy * event.delta_y / scale,
            ..*event
        };
        if !adjusted.has_finite_deltas() {
            match adjusted.phase {
                // Start ignores deltas anyway.
                DragPhase::Start => {}
                // A garbage moving sample is dropped whole.
                DragPhase::Drag => return Ok(None),
                // The gesture must still end; only its final delta is
                // discarded.
                DragPhase::Stop => {
                    adjusted.delta_x = 0.0;
                    adjusted.delta_y = 0.0;
                }
            }
        }

        let constraints = self.config.constraints();
        let Some(notice) = self
            .controller
            .apply(&adjusted, self.config.axis, &constraints)
        else {
            return Ok(None);
        };

        // Commit already happened inside the controller; dispatching
        // here preserves commit-before-callback ordering.
        let slot = match notice.phase {
            DragPhase::Start => &mut self.on_resize_start,
            DragPhase::Drag => &mut self.on_resize,
            DragPhase::Stop => &mut self.on_resize_stop,
        };
        if let Some(cb) = slot.as_mut() {
            cb(event, &notice);
        }

        // Back at rest: a size the owner supplied mid-gesture lands now.
        if notice.phase == DragPhase::Stop
            && let Some(size) = self.pending_owner_size.take()
        {
            self.controller.set_size(size);
        }

        Ok(Some(notice))
    }

    // Auto axes track rendered content while at rest: take a fresh
    // measurement for them. Fixed axes keep the committed value, which
    // already reflects owner overrides and earlier gestures.
    fn refresh_auto_axes(
        &mut self,
        node: NodeId,
        measurer: &dyn Measure,
    ) -> Result<(), NotMeasurable> {
        let declared = self.config.declared_size();
        if !declared.needs_measurement() {
            return Ok(());
        }
        let committed = self.controller.size();
        let at_rest = DeclaredSize {
            width: match declared.width {
                Dimension::Auto => Dimension::Auto,
                Dimension::Px(_) => Dimension::Px(committed.width),
            },
            height: match declared.height {
                Dimension::Auto => Dimension::Auto,
                Dimension::Px(_) => Dimension::Px(committed.height),
            },
        };
        let size = resolve_size(at_rest, node, measurer)?;
        self.controller.set_size(size);
        Ok(())
    }
}
