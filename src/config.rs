//! Tuning values for the seek bar.
//!
//! Everything has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::core::units::Unit;
use crate::error::{Result, SeekBarError};

/// Seek bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    /// Pan moves at or below this many pixels are treated as noise
    pub drag_threshold_px: f32,
    /// A pointer-down this close to a handle centre grabs the handle
    pub handle_hit_slop_px: Unit,
    /// Width of one tile of the background scale pattern
    pub pattern_step_px: Unit,
    /// Suffix for label text
    pub time_unit: String,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 3.0,
            handle_hit_slop_px: 24,
            pattern_step_px: 10,
            time_unit: "s".to_string(),
        }
    }
}

impl SeekBarConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(SeekBarError::InvalidConfig(format!(
                "drag_threshold_px must be a non-negative number, got {}",
                self.drag_threshold_px
            )));
        }
        if self.handle_hit_slop_px < 0 {
            return Err(SeekBarError::InvalidConfig(format!(
                "handle_hit_slop_px can not be negative, got {}",
                self.handle_hit_slop_px
            )));
        }
        if self.pattern_step_px <= 0 {
            return Err(SeekBarError::InvalidConfig(format!(
                "pattern_step_px must be positive, got {}",
                self.pattern_step_px
            )));
        }
        Ok(())
    }
}
