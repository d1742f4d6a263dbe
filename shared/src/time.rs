//! Time representations shared by the sample model and the chart core.
//!
//! Benchmark samples carry wall-clock timestamps in milliseconds since the Unix epoch.

use std::fmt;

pub const MS_PER_SECOND: u64 = 1_000;

/// A point in time as milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TimeMs(pub u64);

impl TimeMs {
    pub const ZERO: TimeMs = TimeMs(0);

    pub fn from_millis(millis: u64) -> Self {
        TimeMs(millis)
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn duration_since(self, earlier: TimeMs) -> DurationMs {
        DurationMs(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for TimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A span of time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DurationMs(pub u64);

impl DurationMs {
    pub fn display_seconds(self) -> f64 {
        self.0 as f64 / MS_PER_SECOND as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= MS_PER_SECOND {
            write!(f, "{:.3}s", self.display_seconds())
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_saturates() {
        let earlier = TimeMs(500);
        let later = TimeMs(2_000);
        assert_eq!(later.duration_since(earlier), DurationMs(1_500));
        assert_eq!(earlier.duration_since(later), DurationMs(0));
    }

    #[test]
    fn displays_durations() {
        assert_eq!(DurationMs(250).to_string(), "250ms");
        assert_eq!(DurationMs(1_500).to_string(), "1.500s");
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&TimeMs(42)).unwrap();
        assert_eq!(json, "42");
    }
}
