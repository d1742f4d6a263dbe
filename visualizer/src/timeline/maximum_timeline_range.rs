//! Full time range covered by a set of samples.

use super::time_domain::Domain;
use shared::StatSample;

/// Earliest start to latest end over `samples`, or `None` when there are no samples.
pub fn full_domain(samples: &[StatSample]) -> Option<Domain> {
    let lo = samples.iter().map(|s| s.start_time).min()?;
    let hi = samples.iter().map(|s| s.end_time).max()?;
    // an inverted sample can push max(end) below min(start)
    Some(Domain::new(lo, hi))
}
