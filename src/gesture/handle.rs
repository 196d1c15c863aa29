//! The two draggable boundaries of the selection, in view space.
//!
//! Each handle moves inside its own bounds. The left one can't pass the current marker
//! nor come closer than `min_range` to the right one, and vice versa. Whenever one
//! handle moves the other one's bounds are recomputed.

use crate::core::constraints::Constraints;
use crate::core::range::Range;
use crate::core::units::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One boundary of the selection
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    side: Side,
    position: Unit,
    bounds: Range,
}

impl Handle {
    /// `position` is taken as is, it is only clamped once the handle is dragged
    pub fn new(side: Side, position: Unit, bounds: Range) -> Self {
        Self { side, position, bounds }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Unit {
        self.position
    }

    pub fn bounds(&self) -> &Range {
        &self.bounds
    }

    /// Move towards `x`, stopping at the bounds
    pub fn drag_to(&mut self, x: Unit) -> Unit {
        self.position = self.bounds.clamp(x);
        self.position
    }

    fn set_bounds(&mut self, lower: Unit, upper: Unit) {
        self.bounds.set_from(&Range::spanning(lower, upper));
    }
}

/// Both handles plus the view constraints they were derived from
#[derive(Debug, Clone, PartialEq)]
pub struct HandlePair {
    left: Handle,
    right: Handle,
    current: Unit,
    min_range: Unit,
}

impl HandlePair {
    /// Place the handles on the edges of the projected selection.
    ///
    /// The left handle may travel from the visible start (or the allowed start if that
    /// is further in) up to current, the right one from current to the visible end.
    pub fn from_view(view: &Constraints) -> Self {
        let current = view.current();
        let left_lower = view.allowed().clamp(view.visible().lower()).min(current);
        let right_upper = view.allowed().clamp(view.visible().upper()).max(current);

        let mut pair = Self {
            left: Handle::new(Side::Left, view.selected().lower(), Range::spanning(left_lower, current)),
            right: Handle::new(Side::Right, view.selected().upper(), Range::spanning(current, right_upper)),
            current,
            min_range: view.min_range(),
        };
        pair.left_moved();
        pair.right_moved();
        pair
    }

    pub fn left(&self) -> &Handle {
        &self.left
    }

    pub fn right(&self) -> &Handle {
        &self.right
    }

    pub fn get(&self, side: Side) -> &Handle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Drag one handle towards `x` and tighten the other one. Returns the new position.
    pub fn drag_to(&mut self, side: Side, x: Unit) -> Unit {
        match side {
            Side::Left => {
                let position = self.left.drag_to(x);
                self.left_moved();
                position
            }
            Side::Right => {
                let position = self.right.drag_to(x);
                self.right_moved();
                position
            }
        }
    }

    /// Handle whose centre is within `slop` of `x`, the closer one if both are.
    ///
    /// When both sit on the same pixel the side `x` lies on wins.
    pub fn hit(&self, x: Unit, slop: Unit) -> Option<Side> {
        let to_left = x.abs_diff(self.left.position);
        let to_right = x.abs_diff(self.right.position);
        if to_left.min(to_right) > slop.max(0).unsigned_abs() {
            return None;
        }
        if to_left < to_right {
            Some(Side::Left)
        } else if to_right < to_left {
            Some(Side::Right)
        } else if x < self.left.position {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    // right handle may not come closer than min_range to the left one
    fn left_moved(&mut self) {
        let upper = self.right.bounds.upper();
        let lower = self.current.max(self.left.position.saturating_add(self.min_range)).min(upper);
        self.right.set_bounds(lower, upper);
    }

    // left handle may not come closer than min_range to the right one
    fn right_moved(&mut self) {
        let lower = self.left.bounds.lower();
        let upper = self.current.min(self.right.position.saturating_sub(self.min_range)).max(lower);
        self.left.set_bounds(lower, upper);
    }
}
