use crate::time::TimeMs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentile labels reported by the benchmark driver, highest first.
pub const PERCENTILE_LABELS: [&str; 5] = ["99.99", "99.9", "99.0", "90.0", "50.0"];

// ===== SAMPLE TYPES =====

/// One statistics record covering `[start_time, end_time]` for a single phase instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatSample {
    pub fork: String,
    pub metric: String,
    pub phase: String,
    /// Opaque id separating concurrent occurrences of the same phase.
    pub phase_instance: String,
    pub start_time: TimeMs,
    pub end_time: TimeMs,
    #[serde(default)]
    pub percentile_response_time: BTreeMap<String, f64>,
    #[serde(default)]
    pub mean_response_time: Option<f64>,
    #[serde(default)]
    pub request_count: Option<u64>,
}

impl StatSample {
    pub fn percentile(&self, label: &str) -> Option<f64> {
        self.percentile_response_time.get(label).copied()
    }

    /// Requests per second over the sample interval. Absent for zero-length samples.
    pub fn throughput(&self) -> Option<f64> {
        let count = self.request_count?;
        let elapsed = self.end_time.duration_since(self.start_time);
        if elapsed.is_zero() {
            return None;
        }
        Some(count as f64 / elapsed.display_seconds())
    }

    pub fn belongs_to(&self, fork: &str, metric: &str) -> bool {
        self.fork == fork && self.metric == metric
    }
}

/// A single entry of an upstream phase series, before it is tagged with its phase identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesEntry {
    pub start_time: TimeMs,
    pub end_time: TimeMs,
    #[serde(default)]
    pub percentile_response_time: BTreeMap<String, f64>,
    #[serde(default)]
    pub mean_response_time: Option<f64>,
    #[serde(default)]
    pub request_count: Option<u64>,
}

/// Statistics of one phase instance as delivered by the report store.
///
/// `name` is the phase-instance id; `phase` is the phase it instantiates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhaseStats {
    pub name: String,
    pub phase: String,
    pub fork: String,
    pub metric: String,
    #[serde(default)]
    pub series: Vec<SeriesEntry>,
}

impl PhaseStats {
    pub fn into_samples(self) -> Vec<StatSample> {
        let PhaseStats {
            name,
            phase,
            fork,
            metric,
            series,
        } = self;
        series
            .into_iter()
            .map(|entry| StatSample {
                fork: fork.clone(),
                metric: metric.clone(),
                phase: phase.clone(),
                phase_instance: name.clone(),
                start_time: entry.start_time,
                end_time: entry.end_time,
                percentile_response_time: entry.percentile_response_time,
                mean_response_time: entry.mean_response_time,
                request_count: entry.request_count,
            })
            .collect()
    }
}

/// Accepted shapes of a sample file: already flat, or grouped per phase instance.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SampleInput {
    Flat(Vec<StatSample>),
    Grouped(Vec<PhaseStats>),
    Report { stats: Vec<PhaseStats> },
}

impl SampleInput {
    pub fn into_samples(self) -> Vec<StatSample> {
        match self {
            SampleInput::Flat(samples) => samples,
            SampleInput::Grouped(stats) | SampleInput::Report { stats } => {
                stats.into_iter().flat_map(PhaseStats::into_samples).collect()
            }
        }
    }
}

// ===== UTILITY FUNCTIONS =====

/// Distinct fork names, sorted.
pub fn fork_names(samples: &[StatSample]) -> Vec<String> {
    let mut names: Vec<String> = samples.iter().map(|s| s.fork.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Distinct metric names, sorted.
pub fn metric_names(samples: &[StatSample]) -> Vec<String> {
    let mut names: Vec<String> = samples.iter().map(|s| s.metric.clone()).collect();
    names.sort();
    names.dedup();
    names
}
