//! Projection of whole [`Constraints`] between model space and view space.
//!
//! The model's visible window is stretched over the viewport, every other range is
//! mapped with the same affine transform. Values outside the window land outside
//! the viewport, which is what the renderer needs for partially visible areas.

use crate::core::constraints::{Bounds, Constraints};
use crate::core::range::Range;
use crate::core::units::Unit;
use crate::error::Result;
use crate::mapping::translate::{scale, translate, translate_unclamped};

/// Project model-space constraints onto `viewport` (pixels).
///
/// Fails with `DegenerateRange` when the model's visible window has zero width.
/// The result is built tolerantly since rounding may push a bound by one pixel.
pub fn project(model: &Constraints, viewport: &Range) -> Result<Constraints> {
    let visible = model.visible();
    let map_range = |range: &Range| -> Result<Range> {
        Range::new(
            translate_unclamped(range.lower(), visible, viewport)?,
            translate_unclamped(range.upper(), visible, viewport)?,
        )
    };

    let bounds = Bounds {
        total: map_range(model.total())?,
        allowed: map_range(model.allowed())?,
        selected: map_range(model.selected())?,
        visible: map_range(visible)?,
        current: translate_unclamped(model.current(), visible, viewport)?,
        min_range: scale(model.min_range(), visible, viewport)?,
        multiplier: model.multiplier(),
    };
    let projected = Constraints::tolerant(bounds);
    tracing::debug!(%model, %projected, "projected constraints into view");
    Ok(projected)
}

/// Map a single view-space position back into model space, clamped to the model's
/// visible window
pub fn transfer_bound(x: Unit, view: &Constraints, model: &Constraints) -> Result<Unit> {
    translate(x, view.visible(), model.visible())
}
