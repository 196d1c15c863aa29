//! Timeline panning.
//!
//! The selection (and the current marker with it) rides along with the visible window,
//! so a pan only commits when the shifted window stays inside total and the shifted
//! selection stays inside allowed. Anything else is dropped as a whole.

use crate::core::constraints::Constraints;
use crate::core::units::Unit;
use crate::error::Result;
use crate::mapping::translate::scale;

/// Pan the model by `delta` model units. Returns whether the pan committed.
pub fn pan(model: &mut Constraints, delta: Unit) -> bool {
    if delta == 0 {
        return false;
    }
    let visible = model.visible().shifted(delta);
    let selected = model.selected().shifted(delta);
    if !model.total().contains_range(&visible) || !model.allowed().contains_range(&selected) {
        tracing::debug!(delta, %visible, %selected, "pan rejected");
        return false;
    }
    model.shift_window(delta);
    true
}

/// Pan the model by a pixel delta measured against the projected `view`.
///
/// Returns the applied model delta, or `None` when the pan was rejected.
pub fn pan_by_pixels(model: &mut Constraints, view: &Constraints, delta_px: Unit) -> Result<Option<Unit>> {
    let delta = scale(delta_px, view.visible(), model.visible())?;
    Ok(pan(model, delta).then_some(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constraints::Bounds;
    use crate::core::range::Range;
    use crate::mapping::projection::project;
    use crossbeam::channel;

    fn range(lower: Unit, upper: Unit) -> Range {
        Range::new(lower, upper).unwrap()
    }

    fn model() -> Constraints {
        Constraints::strict(Bounds {
            total: range(-500, 1500),
            allowed: range(0, 1000),
            selected: range(400, 600),
            visible: range(0, 1000),
            current: 500,
            min_range: 50,
            multiplier: 1.0,
        })
        .unwrap()
    }

    #[test]
    fn test_pan_shifts_window_selection_and_current() {
        let mut model = model();
        assert!(pan(&mut model, 100));

        assert_eq!(model.visible(), &range(100, 1100));
        assert_eq!(model.selected(), &range(500, 700));
        assert_eq!(model.current(), 600);
        assert!(model.check().is_ok());
    }

    #[test]
    fn test_pan_rejected_when_window_leaves_total() {
        let mut model = model();
        assert!(!pan(&mut model, -501));
        assert_eq!(model.visible(), &range(0, 1000));
        assert_eq!(model.selected(), &range(400, 600));
        assert_eq!(model.current(), 500);
    }

    #[test]
    fn test_pan_rejected_when_selection_leaves_allowed() {
        let mut model = model();
        // window could move 500 but the selection only 400
        assert!(!pan(&mut model, 450));
        assert_eq!(model.visible(), &range(0, 1000));
        assert!(pan(&mut model, 400));
        assert_eq!(model.selected(), &range(800, 1000));
    }

    #[test]
    fn test_rejected_pan_does_not_notify() {
        let (tx, rx) = channel::unbounded();
        let mut model = model();
        model.subscribe(&tx);

        assert!(!pan(&mut model, 10_000));
        assert!(!pan(&mut model, 0));
        assert!(rx.try_recv().is_err());

        assert!(pan(&mut model, 10));
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_pan_by_pixels() {
        let mut model = model();
        let view = project(&model, &range(0, 500)).unwrap();

        // 1 px = 2 units
        assert_eq!(pan_by_pixels(&mut model, &view, 25).unwrap(), Some(50));
        assert_eq!(model.visible(), &range(50, 1050));
        assert_eq!(pan_by_pixels(&mut model, &view, 1_000).unwrap(), None);
        assert_eq!(model.visible(), &range(50, 1050));
    }
}
