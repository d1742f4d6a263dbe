//! Groups the samples of one fork/metric pair into phase instances.

use indexmap::IndexMap;
use shared::{StatSample, TimeMs};

/// All samples of one phase instance, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseInstance<'a> {
    pub id: &'a str,
    pub phase: &'a str,
    pub samples: Vec<&'a StatSample>,
}

impl<'a> PhaseInstance<'a> {
    pub fn first(&self) -> Option<&'a StatSample> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<&'a StatSample> {
        self.samples.last().copied()
    }

    pub fn earliest_start(&self) -> Option<TimeMs> {
        self.first().map(|s| s.start_time)
    }

    pub fn latest_start(&self) -> Option<TimeMs> {
        self.last().map(|s| s.start_time)
    }

    pub fn earliest_end(&self) -> Option<TimeMs> {
        self.samples.iter().map(|s| s.end_time).min()
    }

    pub fn latest_end(&self) -> Option<TimeMs> {
        self.samples.iter().map(|s| s.end_time).max()
    }
}

/// Phase instances of `fork`/`metric` in order of first appearance.
///
/// Samples are grouped strictly by their phase-instance id and sorted by start time with a
/// stable sort, so samples sharing a start keep their input order.
pub fn group_phase_instances<'a>(
    samples: &'a [StatSample],
    fork: &str,
    metric: &str,
) -> Vec<PhaseInstance<'a>> {
    let mut groups: IndexMap<&'a str, PhaseInstance<'a>> = IndexMap::new();
    for sample in samples.iter().filter(|s| s.belongs_to(fork, metric)) {
        groups
            .entry(sample.phase_instance.as_str())
            .or_insert_with(|| PhaseInstance {
                id: sample.phase_instance.as_str(),
                phase: sample.phase.as_str(),
                samples: Vec::new(),
            })
            .samples
            .push(sample);
    }

    groups
        .into_values()
        .map(|mut instance| {
            instance.samples.sort_by_key(|s| s.start_time);
            instance
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::BTreeMap;

    pub(crate) fn sample(instance: &str, start: u64, end: u64) -> StatSample {
        let phase = instance.split('/').next().unwrap_or(instance).to_string();
        StatSample {
            fork: "fork-0".into(),
            metric: "get".into(),
            phase,
            phase_instance: instance.into(),
            start_time: TimeMs(start),
            end_time: TimeMs(end),
            percentile_response_time: BTreeMap::new(),
            mean_response_time: None,
            request_count: None,
        }
    }

    #[test]
    fn groups_by_instance_and_sorts_by_start() {
        let samples = vec![
            sample("main/1", 300, 400),
            sample("main/0", 100, 200),
            sample("main/1", 100, 300),
            sample("main/0", 0, 100),
        ];
        let instances = group_phase_instances(&samples, "fork-0", "get");

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].id, "main/1");
        assert_eq!(instances[0].phase, "main");
        let starts: Vec<u64> = instances[0].samples.iter().map(|s| s.start_time.millis()).collect();
        assert_eq!(starts, [100, 300]);
        assert_eq!(instances[1].earliest_start(), Some(TimeMs(0)));
        assert_eq!(instances[1].latest_start(), Some(TimeMs(100)));
    }

    #[test]
    fn skips_other_pairs() {
        let mut other_fork = sample("main/0", 0, 10);
        other_fork.fork = "fork-1".into();
        let mut other_metric = sample("main/0", 0, 10);
        other_metric.metric = "post".into();
        let samples = vec![other_fork, other_metric];

        assert!(group_phase_instances(&samples, "fork-0", "get").is_empty());
    }

    #[test]
    fn keeps_input_order_for_equal_starts() {
        let mut first = sample("main/0", 50, 60);
        first.mean_response_time = Some(1.0);
        let mut second = sample("main/0", 50, 70);
        second.mean_response_time = Some(2.0);
        let samples = vec![first, second];

        let instances = group_phase_instances(&samples, "fork-0", "get");
        assert_eq!(instances[0].samples[0].mean_response_time, Some(1.0));
        assert_eq!(instances[0].earliest_end(), Some(TimeMs(60)));
        assert_eq!(instances[0].latest_end(), Some(TimeMs(70)));
    }
}
