//! The visible time interval of a chart.

use serde::Serialize;
use shared::{DurationMs, TimeMs};
use std::fmt;

/// Closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Domain {
    pub lo: TimeMs,
    pub hi: TimeMs,
}

impl Domain {
    /// Builds a domain from two bounds in either order.
    pub fn new(a: TimeMs, b: TimeMs) -> Self {
        Domain {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn from_millis(a: u64, b: u64) -> Self {
        Self::new(TimeMs(a), TimeMs(b))
    }

    pub fn duration(self) -> DurationMs {
        self.hi.duration_since(self.lo)
    }

    pub fn is_point(self) -> bool {
        self.lo == self.hi
    }

    /// `lo <= time <= hi`
    pub fn contains(self, time: TimeMs) -> bool {
        time >= self.lo && time <= self.hi
    }

    /// `lo < time < hi`
    pub fn contains_strictly(self, time: TimeMs) -> bool {
        time > self.lo && time < self.hi
    }

    pub fn intersects(self, other: Domain) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.lo, self.hi)
    }
}
