//! Render-ready chart panels, one per fork/metric pair.

use crate::format_utils::tick_labels;
use crate::series::{ColumnKey, PhaseInstance, StatAccessor, Timetable, group_phase_instances, transition_ticks};
use crate::timeline::{Domain, view_filter};
use serde::Serialize;
use shared::{StatSample, TimeMs, fork_names, metric_names};

pub const THROUGHPUT_LEGEND_LABEL: &str = "Requests/s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendKind {
    Phase,
    Throughput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub kind: LegendKind,
}

/// Column keys split by how they are drawn, plus the legend that goes with them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ColumnLayout {
    /// Response-time areas, one per phase instance and non-throughput statistic.
    pub area_columns: Vec<ColumnKey>,
    /// One throughput line per phase instance.
    pub throughput_columns: Vec<ColumnKey>,
    pub legend: Vec<LegendEntry>,
}

impl ColumnLayout {
    /// Phases sorted by name; instances of a phase keep their order of appearance.
    pub fn derive(instances: &[PhaseInstance<'_>], accessors: &[StatAccessor]) -> Self {
        let mut phases: Vec<&str> = instances.iter().map(|i| i.phase).collect();
        phases.sort_unstable();
        phases.dedup();

        let mut layout = ColumnLayout::default();
        for phase in &phases {
            for instance in instances.iter().filter(|i| i.phase == *phase) {
                for accessor in accessors {
                    let column = ColumnKey::new(instance.id, accessor.name());
                    if accessor.is_throughput() {
                        layout.throughput_columns.push(column);
                    } else {
                        layout.area_columns.push(column);
                    }
                }
            }
            layout.legend.push(LegendEntry {
                label: phase.to_string(),
                kind: LegendKind::Phase,
            });
        }
        layout.legend.push(LegendEntry {
            label: THROUGHPUT_LEGEND_LABEL.to_string(),
            kind: LegendKind::Throughput,
        });
        layout
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub fork: String,
    pub metric: String,
    pub title: String,
    pub domain: Domain,
    pub timetable: Timetable,
    pub ticks: Vec<TimeMs>,
    pub tick_labels: Vec<String>,
    #[serde(flatten)]
    pub columns: ColumnLayout,
}

/// Panel for one pair windowed to `domain`; `None` when the pair has no samples.
pub fn build_panel(
    samples: &[StatSample],
    fork: &str,
    metric: &str,
    accessors: &[StatAccessor],
    domain: Domain,
) -> Option<ChartPanel> {
    let instances = group_phase_instances(samples, fork, metric);
    if instances.is_empty() {
        return None;
    }

    let timetable = Timetable::build(&instances, accessors);
    let ticks = transition_ticks(&instances);
    let view = view_filter::apply(&timetable, &ticks, domain);

    Some(ChartPanel {
        fork: fork.to_string(),
        metric: metric.to_string(),
        title: format!("{fork} {metric} response times"),
        domain,
        tick_labels: tick_labels(&view.ticks),
        timetable: view.timetable,
        ticks: view.ticks,
        columns: ColumnLayout::derive(&instances, accessors),
    })
}

/// Panels for every fork × metric combination that has samples, forks then metrics in name order.
pub fn build_panels(samples: &[StatSample], accessors: &[StatAccessor], domain: Domain) -> Vec<ChartPanel> {
    let metrics = metric_names(samples);
    fork_names(samples)
        .iter()
        .flat_map(|fork| {
            metrics
                .iter()
                .filter_map(move |metric| build_panel(samples, fork, metric, accessors, domain))
        })
        .collect()
}
