//! Pointer gestures: the drag state machine, timeline panning and handle dragging.

pub mod handle;
pub mod pan;
pub mod state;

pub use handle::{Handle, HandlePair, Side};
pub use pan::{pan, pan_by_pixels};
pub use state::{DragState, DragStep, DragTarget, DragTracker, PointerEvent, PointerPhase};
