use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// Outcome of comparing two intervals field by field.
///
/// Intervals are only partially ordered: `1 mons` and `30 days` can not be
/// ranked against each other, and neither can two intervals whose fields
/// pull in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalOrdering {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl IntervalOrdering {
    pub fn as_ordering(self) -> Option<Ordering> {
        match self {
            IntervalOrdering::Less => Some(Ordering::Less),
            IntervalOrdering::Equal => Some(Ordering::Equal),
            IntervalOrdering::Greater => Some(Ordering::Greater),
            IntervalOrdering::Incomparable => None,
        }
    }
}

impl Interval {
    pub fn compare(&self, other: &Interval) -> IntervalOrdering {
        if self.equal(other) {
            IntervalOrdering::Equal
        } else if self.less_or_equal(other) {
            IntervalOrdering::Less
        } else if self.greater_or_equal(other) {
            IntervalOrdering::Greater
        } else {
            IntervalOrdering::Incomparable
        }
    }

    /// Field-wise equality. Seconds are compared exactly, without epsilon.
    pub fn equal(&self, other: &Interval) -> bool {
        self.months == other.months && self.days == other.days && self.seconds == other.seconds
    }

    pub fn less_or_equal(&self, other: &Interval) -> bool {
        self.months <= other.months && self.days <= other.days && self.seconds <= other.seconds
    }

    pub fn greater_or_equal(&self, other: &Interval) -> bool {
        self.months >= other.months && self.days >= other.days && self.seconds >= other.seconds
    }

    pub fn less(&self, other: &Interval) -> bool {
        !self.equal(other) && self.less_or_equal(other)
    }

    pub fn greater(&self, other: &Interval) -> bool {
        !self.equal(other) && self.greater_or_equal(other)
    }

    /// True when one interval is field-wise less or equal to the other.
    pub fn comparable(&self, other: &Interval) -> bool {
        self.less_or_equal(other) || self.greater_or_equal(other)
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).as_ordering()
    }
}
