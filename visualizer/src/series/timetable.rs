//! Merges overlapping phase instances into one chronologically ordered table.
//!
//! Every sample contributes its statistics to two rows, the one anchored at its start and
//! the one anchored at its end. Between those two anchors a renderer that bridges gaps per
//! column draws a flat segment, and outside of them the column stays absent, so concurrent
//! phase instances can share the table without inventing values for each other.

use super::sample_grouper::PhaseInstance;
use super::stat_accessor::StatAccessor;
use serde::Serialize;
use shared::TimeMs;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Column name `<phase instance id>_<statistic name>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(phase_instance: &str, statistic: &str) -> Self {
        ColumnKey(format!("{phase_instance}_{statistic}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One vertical slice of the chart.
///
/// `start`/`end` record the interval of the sample that last wrote to this row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableRow {
    pub anchor: TimeMs,
    pub start: TimeMs,
    pub end: TimeMs,
    /// `None` marks a column the writing sample had no value for.
    #[serde(flatten)]
    pub values: BTreeMap<ColumnKey, Option<f64>>,
}

impl TimetableRow {
    fn new(anchor: TimeMs) -> Self {
        Self {
            anchor,
            start: anchor,
            end: anchor,
            values: BTreeMap::new(),
        }
    }

    pub fn value(&self, column: &ColumnKey) -> Option<f64> {
        self.values.get(column).copied().flatten()
    }

    pub fn has_value(&self, column: &ColumnKey) -> bool {
        self.value(column).is_some()
    }
}

/// Rows sorted by strictly increasing anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Timetable {
    rows: Vec<TimetableRow>,
}

impl Timetable {
    pub fn build(instances: &[PhaseInstance<'_>], accessors: &[StatAccessor]) -> Self {
        let mut rows: BTreeMap<TimeMs, TimetableRow> = BTreeMap::new();

        for instance in instances {
            let columns: Vec<ColumnKey> = accessors
                .iter()
                .map(|accessor| ColumnKey::new(instance.id, accessor.name()))
                .collect();

            for sample in &instance.samples {
                let (start, end) = (sample.start_time, sample.end_time);
                let values: Vec<Option<f64>> =
                    accessors.iter().map(|accessor| accessor.extract(sample)).collect();

                for anchor in [start, end] {
                    let row = rows.entry(anchor).or_insert_with(|| TimetableRow::new(anchor));
                    row.start = start;
                    row.end = end;
                    for (column, value) in columns.iter().zip(&values) {
                        row.values.insert(column.clone(), *value);
                    }
                }
            }
        }

        Self {
            rows: rows.into_values().collect(),
        }
    }

    pub(crate) fn from_sorted_rows(rows: Vec<TimetableRow>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].anchor < w[1].anchor));
        Self { rows }
    }

    pub fn rows(&self) -> &[TimetableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn anchors(&self) -> impl Iterator<Item = TimeMs> + '_ {
        self.rows.iter().map(|row| row.anchor)
    }

    pub fn row_at(&self, anchor: TimeMs) -> Option<&TimetableRow> {
        self.rows
            .binary_search_by_key(&anchor, |row| row.anchor)
            .ok()
            .map(|index| &self.rows[index])
    }

    /// Every column written by at least one row.
    pub fn columns(&self) -> BTreeSet<ColumnKey> {
        self.rows
            .iter()
            .flat_map(|row| row.values.keys().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::sample_grouper::group_phase_instances;
    use crate::series::sample_grouper::tests::sample;
    use proptest::prelude::*;
    use shared::StatSample;

    fn stat_accessor() -> StatAccessor {
        StatAccessor::mean()
    }

    fn with_mean(mut s: StatSample, mean: f64) -> StatSample {
        s.mean_response_time = Some(mean);
        s
    }

    fn build(samples: &[StatSample]) -> Timetable {
        let instances = group_phase_instances(samples, "fork-0", "get");
        Timetable::build(&instances, &[stat_accessor()])
    }

    #[test]
    fn adjacent_samples_share_the_middle_row() {
        let samples = vec![
            with_mean(sample("P1", 0, 100), 5.0),
            with_mean(sample("P1", 100, 200), 9.0),
        ];
        let table = build(&samples);
        let column = ColumnKey::new("P1", "Mean");

        assert_eq!(table.anchors().map(TimeMs::millis).collect::<Vec<_>>(), [0, 100, 200]);
        assert_eq!(table.rows()[0].value(&column), Some(5.0));
        assert_eq!(table.rows()[1].value(&column), Some(9.0));
        assert_eq!(table.rows()[1].start, TimeMs(100));
        assert_eq!(table.rows()[1].end, TimeMs(200));
        assert_eq!(table.rows()[2].value(&column), Some(9.0));
    }

    #[test]
    fn zero_length_sample_collapses_to_one_row() {
        let table = build(&[with_mean(sample("P1", 40, 40), 3.0)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].value(&ColumnKey::new("P1", "Mean")), Some(3.0));
    }

    #[test]
    fn instances_sharing_an_anchor_merge_without_collision() {
        let samples = vec![
            with_mean(sample("main/0", 0, 100), 1.0),
            with_mean(sample("main/1", 100, 300), 2.0),
        ];
        let table = build(&samples);
        let row = table.row_at(TimeMs(100)).unwrap();

        assert_eq!(row.value(&ColumnKey::new("main/0", "Mean")), Some(1.0));
        assert_eq!(row.value(&ColumnKey::new("main/1", "Mean")), Some(2.0));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn missing_statistic_is_absent_not_zero() {
        let table = build(&[sample("P1", 0, 10)]);
        let column = ColumnKey::new("P1", "Mean");
        let row = &table.rows()[0];

        assert!(row.values.contains_key(&column));
        assert_eq!(row.value(&column), None);
    }

    #[test]
    fn serializes_rows_with_flattened_columns() {
        let table = build(&[with_mean(sample("P1", 0, 10), 4.0)]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["anchor"], 0);
        assert_eq!(json[0]["P1_Mean"], 4.0);
        assert_eq!(json[1]["end"], 10);
    }

    #[test]
    fn empty_input_builds_empty_table() {
        assert!(build(&[]).is_empty());
    }

    fn arb_samples() -> impl Strategy<Value = Vec<StatSample>> {
        prop::collection::vec((0usize..4, 0u64..1_000, 0u64..200, 0u32..1_000), 0..40).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .map(|(instance, start, len, mean)| {
                        with_mean(
                            sample(&format!("main/{instance}"), start, start + len),
                            f64::from(mean),
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn anchors_are_strictly_increasing(samples in arb_samples()) {
            let table = build(&samples);
            let anchors: Vec<TimeMs> = table.anchors().collect();
            prop_assert!(anchors.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn every_sample_boundary_has_a_row(samples in arb_samples()) {
            let table = build(&samples);
            for s in &samples {
                prop_assert!(table.row_at(s.start_time).is_some());
                prop_assert!(table.row_at(s.end_time).is_some());
            }
        }

        #[test]
        fn building_twice_is_identical(samples in arb_samples()) {
            prop_assert_eq!(build(&samples), build(&samples));
        }

        #[test]
        fn disjoint_instances_keep_values_inside_their_interval(
            first in prop::collection::vec((0u64..500, 0u64..50), 1..10),
            second in prop::collection::vec((600u64..1_000, 0u64..50), 1..10),
        ) {
            let samples: Vec<StatSample> = first
                .iter()
                .map(|(start, len)| with_mean(sample("A", *start, start + len), 1.0))
                .chain(second.iter().map(|(start, len)| with_mean(sample("B", *start, start + len), 2.0)))
                .collect();
            let instances = group_phase_instances(&samples, "fork-0", "get");
            let table = Timetable::build(&instances, &[stat_accessor()]);

            let a = ColumnKey::new("A", "Mean");
            let b = ColumnKey::new("B", "Mean");
            prop_assert_eq!(table.columns(), BTreeSet::from([a.clone(), b.clone()]));

            for (instance, column) in instances.iter().zip([&a, &b]) {
                let lo = instance.earliest_start().unwrap();
                let hi = instance.latest_end().unwrap();
                for row in table.rows() {
                    if row.has_value(column) {
                        prop_assert!(row.anchor >= lo && row.anchor <= hi);
                    }
                }
            }
        }
    }
}
