use chrono::{DateTime, Utc};
use shared::TimeMs;

const NS_PER_MILLISECOND: f64 = 1_000_000.0;

/// Wall-clock label `HH:mm:ss` (UTC) for an axis tick.
///
/// Timestamps chrono cannot represent fall back to the raw millisecond value.
pub fn format_clock(time: TimeMs) -> String {
    i64::try_from(time.millis())
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or_else(|| time.to_string(), |at| at.format("%H:%M:%S").to_string())
}

/// Response time given in nanoseconds, shown as whole milliseconds.
pub fn format_nanos_as_millis(nanos: f64) -> String {
    format!("{:.0}ms", nanos / NS_PER_MILLISECOND)
}

pub fn tick_labels(ticks: &[TimeMs]) -> Vec<String> {
    ticks.iter().copied().map(format_clock).collect()
}
