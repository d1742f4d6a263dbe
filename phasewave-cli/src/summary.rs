use crate::input::load_samples;
use anyhow::Result;
use serde::Serialize;
use shared::{StatSample, fork_names, metric_names};
use std::path::Path;
use visualizer::series::group_phase_instances;
use visualizer::{Domain, format_clock};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSummary {
    pub fork: String,
    pub metric: String,
    pub phase_instances: usize,
    pub samples: usize,
    pub domain: Domain,
}

impl std::fmt::Display for PairSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} phase instances, {} samples, {} - {} ({})",
            self.fork,
            self.metric,
            self.phase_instances,
            self.samples,
            format_clock(self.domain.lo),
            format_clock(self.domain.hi),
            self.domain.duration()
        )
    }
}

pub fn summarize(samples: &[StatSample]) -> Vec<PairSummary> {
    let metrics = metric_names(samples);
    let mut summaries = Vec::new();
    for fork in fork_names(samples) {
        for metric in &metrics {
            let instances = group_phase_instances(samples, &fork, metric);
            let lo = instances.iter().filter_map(|i| i.earliest_start()).min();
            let hi = instances.iter().filter_map(|i| i.latest_end()).max();
            let (Some(lo), Some(hi)) = (lo, hi) else {
                continue;
            };
            summaries.push(PairSummary {
                fork: fork.clone(),
                metric: metric.clone(),
                phase_instances: instances.len(),
                samples: instances.iter().map(|i| i.samples.len()).sum(),
                domain: Domain::new(lo, hi),
            });
        }
    }
    summaries
}

pub fn run_summary(input: &Path) -> Result<()> {
    let samples = load_samples(input)?;
    let summaries = summarize(&samples);
    if summaries.is_empty() {
        println!("No samples in {}", input.display());
    }
    for summary in &summaries {
        println!("{summary}");
    }
    Ok(())
}
