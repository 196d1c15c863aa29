//! Range engine for a dual-handle seek bar.
//!
//! A seek bar shows a selectable window of a longer timeline: the user pans the
//! timeline and drags the two edges of the selection. This crate keeps the four
//! nested ranges involved (total, allowed, selected, visible) and the current marker
//! consistent, maps them between content units and pixels, and turns pointer events
//! into range updates. Drawing is left to the host; [`seekbar::BarGeometry`] and
//! [`seekbar::Labels`] describe what to draw.
//!
//! Everything is single-threaded and synchronous. Range changes are emitted as
//! [`crate::core::RangeChange`] events into a crossbeam channel and drained by the host.

pub mod config;
pub mod core;
pub mod error;
pub mod gesture;
pub mod mapping;
pub mod seekbar;

pub use crate::config::SeekBarConfig;
pub use crate::core::{Bounds, Constraints, Range, RangeChange, RangeTag, Unit, Validation, Violation};
pub use crate::error::{Result, SeekBarError};
pub use crate::gesture::{DragState, DragTarget, PointerEvent, PointerPhase, Side};
pub use crate::seekbar::{BarGeometry, GestureOutcome, Labels, SeekBar};
