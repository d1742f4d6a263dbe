//! Named statistic accessors that turn a sample into one chart column value.

use crate::error::ChartError;
use shared::{ChartSection, DEFAULT_THROUGHPUT_STATISTIC, MEAN_STATISTIC, PERCENTILE_LABELS, StatSample, StatisticKind};
use std::fmt;
use std::sync::Arc;

pub type Extractor = Arc<dyn Fn(&StatSample) -> Option<f64> + Send + Sync>;

/// A statistic name plus the function reading it from a sample.
///
/// `None` from the extractor means the sample has no value for this statistic; it is
/// kept as an absent cell rather than replaced by zero.
#[derive(Clone)]
pub struct StatAccessor {
    name: String,
    throughput: bool,
    extract: Extractor,
}

impl StatAccessor {
    pub fn custom(
        name: impl Into<String>,
        extract: impl Fn(&StatSample) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            throughput: false,
            extract: Arc::new(extract),
        }
    }

    pub fn percentile(label: impl Into<String>) -> Self {
        let label = label.into();
        let key = label.clone();
        Self::custom(label, move |sample| sample.percentile(&key))
    }

    pub fn mean() -> Self {
        Self::custom(MEAN_STATISTIC, |sample| sample.mean_response_time)
    }

    pub fn throughput(name: impl Into<String>) -> Self {
        Self {
            throughput: true,
            ..Self::custom(name, StatSample::throughput)
        }
    }

    pub fn from_kind(name: &str, kind: &StatisticKind) -> Self {
        match kind {
            StatisticKind::Percentile(label) => Self::percentile(label.clone()),
            StatisticKind::Mean => Self::mean(),
            StatisticKind::Throughput => Self::throughput(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Throughput columns are drawn as lines on their own axis; everything else is an area.
    pub fn is_throughput(&self) -> bool {
        self.throughput
    }

    pub fn extract(&self, sample: &StatSample) -> Option<f64> {
        (self.extract)(sample)
    }
}

impl fmt::Debug for StatAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatAccessor")
            .field("name", &self.name)
            .field("throughput", &self.throughput)
            .finish_non_exhaustive()
    }
}

/// Percentiles from highest to lowest, then mean, then throughput.
pub fn default_accessors() -> Vec<StatAccessor> {
    PERCENTILE_LABELS
        .iter()
        .map(|label| StatAccessor::percentile(*label))
        .chain([
            StatAccessor::mean(),
            StatAccessor::throughput(DEFAULT_THROUGHPUT_STATISTIC),
        ])
        .collect()
}

pub fn accessors_from_config(chart: &ChartSection) -> Result<Vec<StatAccessor>, ChartError> {
    let resolved = chart.resolve_all()?;
    if resolved.is_empty() {
        return Err(ChartError::NoStatistics);
    }
    Ok(resolved
        .iter()
        .map(|(name, kind)| StatAccessor::from_kind(name, kind))
        .collect())
}
