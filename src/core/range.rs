//! Mutable closed interval of integer units.
//!
//! Unlike `std::ops::RangeInclusive` a [`Range`] is mutated in place while the user
//! drags, and every committed change is announced to at most one subscriber through a
//! crossbeam channel. Not thread-safe in spirit: the whole engine lives on the UI thread.

use std::fmt;
use std::hash::{Hash, Hasher};

use crossbeam::channel::Sender;

use crate::core::units::{div_floor, Unit};
use crate::error::{Result, SeekBarError};

/// Which role a range plays, attached to every change it emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeTag {
    Total,
    Allowed,
    Selected,
    Visible,
}

/// Change event emitted once per committed bound change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChange {
    pub tag: RangeTag,
    pub lower: Unit,
    pub upper: Unit,
}

#[derive(Debug)]
struct Subscription {
    tag: RangeTag,
    sender: Sender<RangeChange>,
}

/// Closed interval `[lower, upper]` with `lower <= upper`
pub struct Range {
    lower: Unit,
    upper: Unit,
    subscription: Option<Subscription>,
}

impl Range {
    /// Create a new range, failing if `lower > upper`
    pub fn new(lower: Unit, upper: Unit) -> Result<Self> {
        check_invariance(lower, upper)?;
        Ok(Self {
            lower,
            upper,
            subscription: None,
        })
    }

    /// Degenerate range holding a single point
    pub fn point(value: Unit) -> Self {
        Self {
            lower: value,
            upper: value,
            subscription: None,
        }
    }

    /// Range spanning two values given in any order
    pub fn spanning(a: Unit, b: Unit) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
            subscription: None,
        }
    }

    pub fn lower(&self) -> Unit {
        self.lower
    }

    pub fn upper(&self) -> Unit {
        self.upper
    }

    pub fn width(&self) -> Unit {
        self.upper.saturating_sub(self.lower)
    }

    /// Midpoint, rounded toward negative infinity
    pub fn center(&self) -> Unit {
        div_floor(self.lower as i128 + self.upper as i128, 2) as Unit
    }

    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Attach the single subscriber. Replaces any previous one.
    pub fn subscribe(&mut self, tag: RangeTag, sender: Sender<RangeChange>) {
        self.subscription = Some(Subscription { tag, sender });
    }

    pub fn unsubscribe(&mut self) {
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Replace both bounds.
    ///
    /// Returns `Ok(true)` when the bounds changed, in which case the subscriber has
    /// been notified. Writing identical bounds is a silent no-op.
    pub fn set(&mut self, lower: Unit, upper: Unit) -> Result<bool> {
        check_invariance(lower, upper)?;
        Ok(self.apply(lower, upper))
    }

    /// Copy the bounds of another range
    pub fn set_from(&mut self, other: &Range) -> bool {
        self.apply(other.lower, other.upper)
    }

    /// Move both bounds by `delta`, saturating at the ends of [`Unit`]
    pub fn shift(&mut self, delta: Unit) -> bool {
        self.apply(self.lower.saturating_add(delta), self.upper.saturating_add(delta))
    }

    /// Shifted copy, no subscription and no notification
    pub fn shifted(&self, delta: Unit) -> Range {
        Range {
            lower: self.lower.saturating_add(delta),
            upper: self.upper.saturating_add(delta),
            subscription: None,
        }
    }

    pub fn contains(&self, value: Unit) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    pub fn contains_range(&self, other: &Range) -> bool {
        self.contains(other.lower) && self.contains(other.upper)
    }

    /// Returns value which is clamped inside of this range
    pub fn clamp(&self, value: Unit) -> Unit {
        if value <= self.lower {
            return self.lower;
        }
        if value >= self.upper {
            return self.upper;
        }
        value
    }

    /// Shrink this range to its intersection with `other`.
    ///
    /// If they don't intersect the range collapses onto the point
    /// `max(lower, other.lower)` instead of failing.
    pub fn clamp_to(&mut self, other: &Range) -> bool {
        let (lower, upper) = self.intersection_bounds(other);
        if lower > upper {
            self.apply(lower, lower)
        } else {
            self.apply(lower, upper)
        }
    }

    /// Same as [`Range::clamp_to`] but on a detached copy
    pub fn clamped(&self, other: &Range) -> Range {
        let mut copy = self.clone();
        copy.clamp_to(other);
        copy
    }

    /// Intersection of both ranges, `None` when they share no point
    pub fn overlap(&self, other: &Range) -> Option<Range> {
        let (lower, upper) = self.intersection_bounds(other);
        if lower > upper {
            return None;
        }
        Some(Range {
            lower,
            upper,
            subscription: None,
        })
    }

    fn intersection_bounds(&self, other: &Range) -> (Unit, Unit) {
        (self.lower.max(other.lower), self.upper.min(other.upper))
    }

    fn apply(&mut self, lower: Unit, upper: Unit) -> bool {
        debug_assert!(lower <= upper);
        if lower == self.lower && upper == self.upper {
            return false;
        }
        self.lower = lower;
        self.upper = upper;
        self.notify();
        true
    }

    fn notify(&mut self) {
        let disconnected = match &self.subscription {
            None => return,
            Some(subscription) => subscription
                .sender
                .send(RangeChange {
                    tag: subscription.tag,
                    lower: self.lower,
                    upper: self.upper,
                })
                .is_err(),
        };
        if disconnected {
            // receiver is gone, nobody is listening anymore
            self.subscription = None;
        }
    }
}

fn check_invariance(lower: Unit, upper: Unit) -> Result<()> {
    if lower > upper {
        return Err(SeekBarError::InvalidRange { lower, upper });
    }
    Ok(())
}

/// Clones are detached: the subscription stays with the original.
impl Clone for Range {
    fn clone(&self) -> Self {
        Self {
            lower: self.lower,
            upper: self.upper,
            subscription: None,
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::point(0)
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash(state);
        self.upper.hash(state);
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[{}: {}]", self.lower, self.upper)
    }
}
