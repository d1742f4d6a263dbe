use super::sample_grouper::PhaseInstance;
use shared::TimeMs;
use std::collections::BTreeSet;

/// Axis tick positions at phase-instance boundaries.
///
/// Takes the start and end of the first and of the last sample of each phase instance.
/// The set does not depend on the visible domain, so ticks keep their positions while zooming.
pub fn transition_ticks(instances: &[PhaseInstance<'_>]) -> BTreeSet<TimeMs> {
    let mut ticks = BTreeSet::new();
    for instance in instances {
        let (Some(first), Some(last)) = (instance.first(), instance.last()) else {
            continue;
        };
        ticks.extend([first.start_time, last.start_time, first.end_time, last.end_time]);
    }
    ticks
}
