//! Core types of the seek bar engine.
//!
//! [`Range`] is the mutable interval everything is built from, [`Constraints`] keeps
//! the four nested ranges and the current marker consistent. The same types are
//! used for model space (content units) and view space (pixels).

pub mod constraints;
pub mod range;
pub mod units;

pub use constraints::{Bounds, Constraints, Validation, Violation};
pub use range::{Range, RangeChange, RangeTag};
pub use units::Unit;
