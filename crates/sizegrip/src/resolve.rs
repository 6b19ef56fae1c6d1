#![forbid(unsafe_code)]

//! Effective-size resolution.
//!
//! Maps an owner-declared [`DeclaredSize`] to a concrete [`Size`],
//! substituting the node's measured rendered extent for any `auto`
//! axis. Pure snapshot: nothing is cached, and measurement happens only
//! when at least one axis actually needs it.

use sizegrip_core::{DeclaredSize, Measure, NodeId, NotMeasurable, Size};

/// Resolve a declared size against a measurement snapshot.
///
/// Fixed axes pass through unchanged; `auto` axes take the node's
/// measured client extent. When both axes are fixed the measurement
/// collaborator is never consulted, so an unmounted node is fine.
///
/// # Errors
///
/// [`NotMeasurable`] when an axis needs measurement and the node is not
/// mounted. Treat as a precondition violation, not a retryable state.
pub fn resolve_size(
    declared: DeclaredSize,
    node: NodeId,
    measurer: &dyn Measure,
) -> Result<Size, NotMeasurable> {
    match (declared.width.px(), declared.height.px()) {
        (Some(width), Some(height)) => Ok(Size::new(width, height)),
        (width, height) => {
            let measured = measurer.measure(node)?;
            Ok(Size::new(
                width.unwrap_or(measured.client_width),
                height.unwrap_or(measured.client_height),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizegrip_core::{Dimension, Measured};
    use std::cell::Cell;

    struct FixedMeasurer {
        extent: Measured,
        calls: Cell<u32>,
    }

    impl FixedMeasurer {
        fn new(client_width: f64, client_height: f64) -> Self {
            Self {
                extent: Measured::new(client_width, client_height),
                calls: Cell::new(0),
            }
        }
    }

    impl Measure for FixedMeasurer {
        fn measure(&self, _node: NodeId) -> Result<Measured, NotMeasurable> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.extent)
        }
    }

    struct Unmounted;

    impl Measure for Unmounted {
        fn measure(&self, node: NodeId) -> Result<Measured, NotMeasurable> {
            Err(NotMeasurable { node })
        }
    }

    #[test]
    fn fixed_axes_pass_through_without_measuring() {
        let measurer = FixedMeasurer::new(640.0, 480.0);
        let size = resolve_size(DeclaredSize::px(100.0, 50.0), NodeId::new(1), &measurer).unwrap();
        assert_eq!(size, Size::new(100.0, 50.0));
        assert_eq!(measurer.calls.get(), 0);
    }

    #[test]
    fn auto_axis_takes_measured_extent() {
        let measurer = FixedMeasurer::new(640.0, 480.0);
        let declared = DeclaredSize {
            width: Dimension::Px(100.0),
            height: Dimension::Auto,
        };
        let size = resolve_size(declared, NodeId::new(1), &measurer).unwrap();
        assert_eq!(size, Size::new(100.0, 480.0));
        assert_eq!(measurer.calls.get(), 1);
    }

    #[test]
    fn fully_auto_takes_both_measured_extents() {
        let measurer = FixedMeasurer::new(640.0, 480.0);
        let size = resolve_size(DeclaredSize::auto(), NodeId::new(1), &measurer).unwrap();
        assert_eq!(size, Size::new(640.0, 480.0));
        assert_eq!(measurer.calls.get(), 1);
    }

    #[test]
    fn unmounted_node_fails_only_when_measurement_needed() {
        let node = NodeId::new(9);
        assert!(resolve_size(DeclaredSize::px(10.0, 10.0), node, &Unmounted).is_ok());
        let err = resolve_size(DeclaredSize::auto(), node, &Unmounted).unwrap_err();
        assert_eq!(err.node, node);
    }
}
