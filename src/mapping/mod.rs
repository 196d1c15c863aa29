//! Mapping between model space and view space.

pub mod projection;
pub mod translate;

pub use projection::{project, transfer_bound};
pub use translate::{scale, translate, translate_unclamped};
