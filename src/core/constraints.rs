//! The four nested ranges of the seek bar plus the current marker.
//!
//! ```text
//!                                          C - current
//!
//!   #########++++++++++++++++++++****************C************++++++++++++++#######################
//!                                |<---selected------------->|
//!            |<-----------------------allowed----------------------------->|
//!   |<--------------------------------total------------------------------------------------------>|
//!   |<-----------............---------visible---------------------------.......................-->|
//! ```
//!
//! Visible range can be changed according to the scale.

use std::fmt;

use crossbeam::channel::Sender;

use crate::core::range::{Range, RangeChange, RangeTag};
use crate::core::units::Unit;
use crate::error::Result;

/// Which nesting rule a strict construction broke
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Total range {total} should be equal to or bigger than allowed range {allowed}")]
    AllowedOutsideTotal { total: Range, allowed: Range },
    #[error("Allowed range {allowed} should be equal to or bigger than selected range {selected}")]
    SelectedOutsideAllowed { allowed: Range, selected: Range },
    #[error("Total range {total} should be equal to or bigger than visible range {visible}")]
    VisibleOutsideTotal { total: Range, visible: Range },
    #[error("Selected range {selected} should contain current value {current}")]
    CurrentOutsideSelected { selected: Range, current: Unit },
    #[error("Min range {min_range} is bigger than width {width} of selected area")]
    MinRangeTooWide { min_range: Unit, width: Unit },
    #[error("Min range {min_range} can not be negative")]
    NegativeMinRange { min_range: Unit },
}

/// How construction treats inconsistent input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Fail on the first broken invariant
    #[default]
    Strict,
    /// Repair by clamping, in a fixed order
    Tolerant,
}

/// Raw input for [`Constraints::new`]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub total: Range,
    pub allowed: Range,
    pub selected: Range,
    pub visible: Range,
    pub current: Unit,
    pub min_range: Unit,
    /// Converts integer units into label units (e.g. 0.001 for ms -> s)
    pub multiplier: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            total: Range::default(),
            allowed: Range::default(),
            selected: Range::default(),
            visible: Range::default(),
            current: 0,
            min_range: 0,
            multiplier: 1.0,
        }
    }
}

/// Total ⊇ allowed ⊇ selected ∋ current, total ⊇ visible, `min_range <= selected.width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    total: Range,
    allowed: Range,
    selected: Range,
    visible: Range,
    current: Unit,
    min_range: Unit,
    multiplier: f64,
}

impl Constraints {
    /// Build from raw bounds, validating or repairing according to `validation`
    pub fn new(bounds: Bounds, validation: Validation) -> Result<Self> {
        let mut constraints = Self::from_bounds(bounds);
        match validation {
            Validation::Strict => constraints.check()?,
            Validation::Tolerant => constraints.repair(),
        }
        Ok(constraints)
    }

    /// Strict construction
    pub fn strict(bounds: Bounds) -> Result<Self> {
        Self::new(bounds, Validation::Strict)
    }

    /// Tolerant construction; repair never fails
    pub fn tolerant(bounds: Bounds) -> Self {
        let mut constraints = Self::from_bounds(bounds);
        constraints.repair();
        constraints
    }

    fn from_bounds(bounds: Bounds) -> Self {
        Self {
            total: bounds.total,
            allowed: bounds.allowed,
            selected: bounds.selected,
            visible: bounds.visible,
            current: bounds.current,
            min_range: bounds.min_range,
            multiplier: bounds.multiplier,
        }
    }

    /// Bounds for freshly loaded content of `duration` units.
    ///
    /// The total range is padded by half a window on each side so the first and last
    /// instants can be scrolled to the centre. The visible window and the selection
    /// are centred on `current`. Built tolerantly.
    pub fn for_content(
        duration: Unit,
        window: Unit,
        current: Unit,
        selected_half_width: Unit,
        min_range: Unit,
        multiplier: f64,
    ) -> Result<Self> {
        let half_window = window / 2;
        let bounds = Bounds {
            total: Range::new(-half_window, duration.saturating_add(half_window))?,
            allowed: Range::new(0, duration)?,
            selected: Range::new(
                current.saturating_sub(selected_half_width),
                current.saturating_add(selected_half_width),
            )?,
            visible: Range::new(current.saturating_sub(half_window), current.saturating_add(half_window))?,
            current,
            min_range,
            multiplier,
        };
        Ok(Self::tolerant(bounds))
    }

    /// Check every nesting invariant, reporting the first one broken
    pub fn check(&self) -> std::result::Result<(), Violation> {
        if !self.total.contains_range(&self.allowed) {
            return Err(Violation::AllowedOutsideTotal {
                total: self.total.clone(),
                allowed: self.allowed.clone(),
            });
        }
        if !self.allowed.contains_range(&self.selected) {
            return Err(Violation::SelectedOutsideAllowed {
                allowed: self.allowed.clone(),
                selected: self.selected.clone(),
            });
        }
        if !self.total.contains_range(&self.visible) {
            return Err(Violation::VisibleOutsideTotal {
                total: self.total.clone(),
                visible: self.visible.clone(),
            });
        }
        if !self.selected.contains(self.current) {
            return Err(Violation::CurrentOutsideSelected {
                selected: self.selected.clone(),
                current: self.current,
            });
        }
        if self.min_range < 0 {
            return Err(Violation::NegativeMinRange {
                min_range: self.min_range,
            });
        }
        if self.min_range > self.selected.width() {
            return Err(Violation::MinRangeTooWide {
                min_range: self.min_range,
                width: self.selected.width(),
            });
        }
        Ok(())
    }

    /// Clamp everything back into place.
    ///
    /// Order matters: visible and allowed into total, then selected into the repaired
    /// allowed, then current into the repaired selected, min range last.
    fn repair(&mut self) {
        tracing::debug!(before = %self, "repairing constraints");
        self.visible.clamp_to(&self.total);
        self.allowed.clamp_to(&self.total);
        self.selected.clamp_to(&self.allowed);
        self.current = self.selected.clamp(self.current);
        self.min_range = self.min_range.clamp(0, self.selected.width());
        tracing::debug!(after = %self, "repaired constraints");
    }

    /// Route change events of all four ranges into `sender`
    pub fn subscribe(&mut self, sender: &Sender<RangeChange>) {
        self.total.subscribe(RangeTag::Total, sender.clone());
        self.allowed.subscribe(RangeTag::Allowed, sender.clone());
        self.selected.subscribe(RangeTag::Selected, sender.clone());
        self.visible.subscribe(RangeTag::Visible, sender.clone());
    }

    pub fn total(&self) -> &Range {
        &self.total
    }

    pub fn allowed(&self) -> &Range {
        &self.allowed
    }

    pub fn selected(&self) -> &Range {
        &self.selected
    }

    pub fn visible(&self) -> &Range {
        &self.visible
    }

    pub fn current(&self) -> Unit {
        self.current
    }

    pub fn min_range(&self) -> Unit {
        self.min_range
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Mutable access to the total range. Callers are responsible for the invariants.
    pub fn total_mut(&mut self) -> &mut Range {
        &mut self.total
    }

    /// Mutable access to the allowed range. Callers are responsible for the invariants.
    pub fn allowed_mut(&mut self) -> &mut Range {
        &mut self.allowed
    }

    /// Mutable access to the selected range. Callers are responsible for the invariants.
    pub fn selected_mut(&mut self) -> &mut Range {
        &mut self.selected
    }

    /// Mutable access to the visible range. Callers are responsible for the invariants.
    pub fn visible_mut(&mut self) -> &mut Range {
        &mut self.visible
    }

    /// Move the current marker; it has to stay inside the selection
    pub fn set_current(&mut self, current: Unit) -> Result<()> {
        if !self.selected.contains(current) {
            return Err(Violation::CurrentOutsideSelected {
                selected: self.selected.clone(),
                current,
            }
            .into());
        }
        self.current = current;
        Ok(())
    }

    /// Change the minimum selection width; it can't exceed the current selection
    pub fn set_min_range(&mut self, min_range: Unit) -> Result<()> {
        if min_range < 0 {
            return Err(Violation::NegativeMinRange { min_range }.into());
        }
        if min_range > self.selected.width() {
            return Err(Violation::MinRangeTooWide {
                min_range,
                width: self.selected.width(),
            }
            .into());
        }
        self.min_range = min_range;
        Ok(())
    }

    /// Shift visible, selected and current together. Used by panning after validation.
    pub(crate) fn shift_window(&mut self, delta: Unit) {
        self.visible.shift(delta);
        self.selected.shift(delta);
        self.current += delta;
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Constraints(total={}, allowed={}, selected={}, visible={}, current={}, min_range={})",
            self.total, self.allowed, self.selected, self.visible, self.current, self.min_range
        )
    }
}
