//! Error taxonomy for the range engine.
//!
//! All of these indicate a programming error upstream (ranges composed the wrong
//! way, projection attempted before layout). Out-of-bounds gesture input is not
//! an error and never shows up here.

use crate::core::constraints::Violation;
use crate::core::units::Unit;

/// Error type for range, constraint and mapping operations
#[derive(Debug, thiserror::Error)]
pub enum SeekBarError {
    #[error("Lower:{lower} can not be bigger than upper:{upper}")]
    InvalidRange { lower: Unit, upper: Unit },
    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] Violation),
    #[error("Cannot translate from zero-width range [{lower}: {upper}]")]
    DegenerateRange { lower: Unit, upper: Unit },
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SeekBarError>;
