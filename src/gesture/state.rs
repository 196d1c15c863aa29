//! Drag state machine.
//!
//! Only one pointer is tracked at a time: a second pointer going down while a drag is
//! active is ignored until the first one lifts or is cancelled.

use crate::core::units::Unit;

/// Phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event in view space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub x: f32,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn down(pointer_id: u32, x: f32) -> Self {
        Self { pointer_id, x, phase: PointerPhase::Down }
    }

    pub fn moved(pointer_id: u32, x: f32) -> Self {
        Self { pointer_id, x, phase: PointerPhase::Move }
    }

    pub fn up(pointer_id: u32, x: f32) -> Self {
        Self { pointer_id, x, phase: PointerPhase::Up }
    }

    pub fn cancel(pointer_id: u32) -> Self {
        Self { pointer_id, x: 0.0, phase: PointerPhase::Cancel }
    }
}

/// What a drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Pans the visible window
    Timeline,
    LeftHandle,
    RightHandle,
}

/// Drag state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No pointer is down
    Idle,
    /// A pointer is down; `anchor` is where the next pan delta is measured from
    Dragging {
        pointer_id: u32,
        anchor: f32,
        target: DragTarget,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { target, .. } => Some(*target),
        }
    }
}

/// Result of feeding one event into the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// Not for us, or below the noise threshold
    Ignored,
    Started(DragTarget),
    /// Timeline pan by `anchor - x` in whole pixels. The anchor advances by `delta`
    /// only, the fractional rest carries over to the next move.
    Delta { target: DragTarget, delta: Unit },
    /// A handle follows the pointer to `x`, rounded to the nearest pixel
    Moved { target: DragTarget, x: Unit },
    Finished,
    Cancelled,
}

/// Tracks one pointer from down to up and turns moves into pan deltas or handle positions
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    pan_threshold: f32,
}

impl DragTracker {
    /// `pan_threshold` is the minimum |delta| in pixels for a timeline pan to be reported.
    /// Handle drags report the pointer position on every move.
    pub fn new(pan_threshold: f32) -> Self {
        Self {
            state: DragState::Idle,
            pan_threshold,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed an event. `hit_test` picks the drag target on pointer-down.
    pub fn handle(&mut self, event: PointerEvent, hit_test: impl FnOnce(f32) -> DragTarget) -> DragStep {
        match (event.phase, self.state) {
            (PointerPhase::Down, DragState::Idle) => {
                let target = hit_test(event.x);
                self.state = DragState::Dragging {
                    pointer_id: event.pointer_id,
                    anchor: event.x,
                    target,
                };
                DragStep::Started(target)
            }
            (PointerPhase::Move, DragState::Dragging { pointer_id, anchor, target })
                if pointer_id == event.pointer_id =>
            {
                match target {
                    DragTarget::Timeline => self.pan_step(pointer_id, anchor, event.x),
                    DragTarget::LeftHandle | DragTarget::RightHandle => {
                        self.state = DragState::Dragging {
                            pointer_id,
                            anchor: event.x,
                            target,
                        };
                        DragStep::Moved {
                            target,
                            x: event.x.round() as Unit,
                        }
                    }
                }
            }
            (PointerPhase::Up, DragState::Dragging { pointer_id, .. }) if pointer_id == event.pointer_id => {
                self.state = DragState::Idle;
                DragStep::Finished
            }
            (PointerPhase::Cancel, DragState::Dragging { pointer_id, .. }) if pointer_id == event.pointer_id => {
                self.state = DragState::Idle;
                DragStep::Cancelled
            }
            _ => DragStep::Ignored,
        }
    }

    fn pan_step(&mut self, pointer_id: u32, anchor: f32, x: f32) -> DragStep {
        let delta = (anchor - x).trunc();
        if delta == 0.0 || delta.abs() <= self.pan_threshold {
            return DragStep::Ignored;
        }
        self.state = DragState::Dragging {
            pointer_id,
            anchor: anchor - delta,
            target: DragTarget::Timeline,
        };
        DragStep::Delta {
            target: DragTarget::Timeline,
            delta: delta as Unit,
        }
    }

    /// Drop any active drag without reporting it
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(_: f32) -> DragTarget {
        DragTarget::Timeline
    }

    #[test]
    fn test_down_starts_drag() {
        let mut tracker = DragTracker::new(3.0);
        assert!(tracker.state().is_idle());

        let step = tracker.handle(PointerEvent::down(1, 100.0), timeline);
        assert_eq!(step, DragStep::Started(DragTarget::Timeline));
        assert_eq!(
            tracker.state(),
            DragState::Dragging { pointer_id: 1, anchor: 100.0, target: DragTarget::Timeline }
        );
    }

    #[test]
    fn test_move_reports_delta_and_resets_anchor() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);

        let step = tracker.handle(PointerEvent::moved(1, 90.0), timeline);
        assert_eq!(step, DragStep::Delta { target: DragTarget::Timeline, delta: 10 });

        let step = tracker.handle(PointerEvent::moved(1, 120.0), timeline);
        assert_eq!(step, DragStep::Delta { target: DragTarget::Timeline, delta: -30 });
    }

    #[test]
    fn test_pan_noise_is_ignored_without_moving_anchor() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);

        assert_eq!(tracker.handle(PointerEvent::moved(1, 98.0), timeline), DragStep::Ignored);
        assert_eq!(tracker.handle(PointerEvent::moved(1, 97.0), timeline), DragStep::Ignored);
        // accumulated against the original anchor
        assert_eq!(
            tracker.handle(PointerEvent::moved(1, 96.0), timeline),
            DragStep::Delta { target: DragTarget::Timeline, delta: 4 }
        );
    }

    #[test]
    fn test_pan_keeps_fractional_rest() {
        let mut tracker = DragTracker::new(0.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);

        assert_eq!(
            tracker.handle(PointerEvent::moved(1, 98.5), timeline),
            DragStep::Delta { target: DragTarget::Timeline, delta: 1 }
        );
        // 0.5 left over from the previous move
        assert_eq!(
            tracker.handle(PointerEvent::moved(1, 98.0), timeline),
            DragStep::Delta { target: DragTarget::Timeline, delta: 1 }
        );
        assert_eq!(
            tracker.state(),
            DragState::Dragging { pointer_id: 1, anchor: 98.0, target: DragTarget::Timeline }
        );
    }

    #[test]
    fn test_handle_drag_reports_pointer_position() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 50.0), |_| DragTarget::LeftHandle);

        assert_eq!(
            tracker.handle(PointerEvent::moved(1, 51.4), timeline),
            DragStep::Moved { target: DragTarget::LeftHandle, x: 51 }
        );
        // no threshold for handles
        assert_eq!(
            tracker.handle(PointerEvent::moved(1, 52.6), timeline),
            DragStep::Moved { target: DragTarget::LeftHandle, x: 53 }
        );
    }

    #[test]
    fn test_handle_drag_does_not_drift() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), |_| DragTarget::RightHandle);

        let mut x = 100.0_f32;
        let mut last = None;
        for _ in 0..100 {
            x += 1.9;
            last = Some(tracker.handle(PointerEvent::moved(1, x), timeline));
        }
        assert_eq!(last, Some(DragStep::Moved { target: DragTarget::RightHandle, x: 290 }));
    }

    #[test]
    fn test_second_pointer_is_ignored() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);

        assert_eq!(
            tracker.handle(PointerEvent::down(2, 300.0), |_| DragTarget::RightHandle),
            DragStep::Ignored
        );
        assert_eq!(tracker.handle(PointerEvent::moved(2, 200.0), timeline), DragStep::Ignored);
        assert_eq!(tracker.handle(PointerEvent::up(2, 200.0), timeline), DragStep::Ignored);
        assert_eq!(tracker.state().target(), Some(DragTarget::Timeline));
    }

    #[test]
    fn test_up_and_cancel_return_to_idle() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);
        assert_eq!(tracker.handle(PointerEvent::up(1, 100.0), timeline), DragStep::Finished);
        assert!(tracker.state().is_idle());

        tracker.handle(PointerEvent::down(2, 100.0), timeline);
        assert_eq!(tracker.handle(PointerEvent::cancel(2), timeline), DragStep::Cancelled);
        assert!(tracker.state().is_idle());

        assert_eq!(tracker.handle(PointerEvent::moved(2, 10.0), timeline), DragStep::Ignored);
    }

    #[test]
    fn test_reset() {
        let mut tracker = DragTracker::new(3.0);
        tracker.handle(PointerEvent::down(1, 100.0), timeline);
        tracker.reset();
        assert!(!tracker.state().is_dragging());
    }
}
