//! Everything the renderer needs to draw one frame, in view space.
//!
//! Nothing here draws. Disabled areas are the parts of total outside allowed, the scale
//! pattern is tiled over the allowed part and anchored to the content so it scrolls
//! with it.

use crate::core::constraints::Constraints;
use crate::core::range::Range;
use crate::core::units::Unit;
use crate::gesture::handle::HandlePair;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// Rounded bar outline
    pub clip: Range,
    pub disabled_start: Option<Range>,
    pub disabled_end: Option<Range>,
    /// Allowed part of the viewport, covered by the scale pattern
    pub pattern_area: Option<Range>,
    /// Offset of the first pattern tile boundary from the viewport start
    pub pattern_phase: Unit,
    /// Selection fill, clamped to the viewport
    pub selected: Range,
    pub current_x: Unit,
    pub left_handle_x: Unit,
    pub right_handle_x: Unit,
}

impl BarGeometry {
    pub fn new(view: &Constraints, handles: &HandlePair, viewport: &Range, pattern_step: Unit) -> Self {
        let total = view.total();
        let allowed = view.allowed();
        let disabled = |lower: Unit, upper: Unit| {
            Some(Range::spanning(lower, upper).clamped(viewport)).filter(|area| !area.is_empty())
        };

        Self {
            clip: view.visible().clone(),
            disabled_start: disabled(total.lower(), allowed.lower()),
            disabled_end: disabled(allowed.upper(), total.upper()),
            pattern_area: allowed.overlap(viewport).filter(|area| !area.is_empty()),
            pattern_phase: (total.lower() - viewport.lower()).rem_euclid(pattern_step.max(1)),
            selected: view.selected().clamped(viewport),
            current_x: view.current(),
            left_handle_x: handles.left().position(),
            right_handle_x: handles.right().position(),
        }
    }
}
