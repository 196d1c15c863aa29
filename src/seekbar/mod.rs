//! Host-facing seek bar: model and view constraints kept in sync, plus the values the
//! rendering and label collaborators consume.

pub mod geometry;
pub mod labels;
pub mod widget;

pub use geometry::BarGeometry;
pub use labels::{LabelText, Labels};
pub use widget::{GestureOutcome, SeekBar};
