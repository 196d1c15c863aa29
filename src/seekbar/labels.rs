//! Label values for the selection: its duration and the distance of each edge from
//! the current marker, converted with the constraints' multiplier.

use crate::core::constraints::Constraints;
use crate::core::units::{format_label, to_label_units, Unit};

/// Label values in label units, positioned in view space
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    /// Width of the selection
    pub duration: f64,
    /// From the selection start to current
    pub before_current: f64,
    /// From current to the selection end
    pub after_current: f64,
    /// Centre of the projected selection, where the duration label goes
    pub duration_x: Unit,
    pub left_x: Unit,
    pub right_x: Unit,
}

/// Formatted label strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelText {
    pub duration: String,
    pub before_current: String,
    pub after_current: String,
}

impl Labels {
    /// Values come from `model`, positions from the projected `view`
    pub fn new(model: &Constraints, view: &Constraints) -> Self {
        let selected = model.selected();
        let multiplier = model.multiplier();
        Self {
            duration: to_label_units(selected.width(), multiplier),
            before_current: to_label_units(model.current() - selected.lower(), multiplier),
            after_current: to_label_units(selected.upper() - model.current(), multiplier),
            duration_x: view.selected().center(),
            left_x: view.selected().lower(),
            right_x: view.selected().upper(),
        }
    }

    pub fn text(&self, unit: &str) -> LabelText {
        LabelText {
            duration: format_label(self.duration, unit),
            before_current: format_label(self.before_current, unit),
            after_current: format_label(self.after_current, unit),
        }
    }
}
