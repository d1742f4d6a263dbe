//! Types shared between the chart core and its drivers: timestamps, benchmark
//! samples as delivered by the report store, and the versioned chart configuration.

pub mod config;
pub mod sample;
pub mod time;

pub use config::{
    AppConfig, AppSection, ChartSection, ConfigError, MigrationStrategy, StatisticKind,
    DEFAULT_THROUGHPUT_STATISTIC, MEAN_STATISTIC,
};
pub use sample::{
    PERCENTILE_LABELS, PhaseStats, SampleInput, SeriesEntry, StatSample, fork_names, metric_names,
};
pub use time::{DurationMs, TimeMs};
