use crate::sample::PERCENTILE_LABELS;
use serde::{Deserialize, Serialize};

pub const MEAN_STATISTIC: &str = "Mean";
pub const DEFAULT_THROUGHPUT_STATISTIC: &str = "rps";

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub chart: ChartSection,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        if config.app.get_migration_strategy() == MigrationStrategy::Recreate {
            return Err(ConfigError::UnsupportedVersion(config.app.version.clone()));
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// AppSection carries the format version so older files can be migrated or recreated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn get_migration_strategy(&self) -> MigrationStrategy {
        match self.version.as_str() {
            "1.0.0" => MigrationStrategy::None,
            _ => MigrationStrategy::Recreate,
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationStrategy {
    None,
    Recreate,
}

/// Which statistics become chart columns, in column order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSection {
    pub statistics: Vec<String>,
    pub throughput_statistic: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        let mut statistics: Vec<String> = PERCENTILE_LABELS.iter().map(|l| l.to_string()).collect();
        statistics.push(MEAN_STATISTIC.to_string());
        statistics.push(DEFAULT_THROUGHPUT_STATISTIC.to_string());
        Self {
            statistics,
            throughput_statistic: DEFAULT_THROUGHPUT_STATISTIC.to_string(),
        }
    }
}

/// A statistic name from the configuration, resolved to what it reads from a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticKind {
    Percentile(String),
    Mean,
    Throughput,
}

impl ChartSection {
    pub fn resolve(&self, name: &str) -> Result<StatisticKind, ConfigError> {
        if name == self.throughput_statistic {
            return Ok(StatisticKind::Throughput);
        }
        if name == MEAN_STATISTIC {
            return Ok(StatisticKind::Mean);
        }
        match name.parse::<f64>() {
            Ok(level) if (0.0..=100.0).contains(&level) => Ok(StatisticKind::Percentile(name.to_string())),
            _ => Err(ConfigError::UnknownStatistic(name.to_string())),
        }
    }

    pub fn resolve_all(&self) -> Result<Vec<(String, StatisticKind)>, ConfigError> {
        self.statistics
            .iter()
            .map(|name| Ok((name.clone(), self.resolve(name)?)))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported config version '{0}'")]
    UnsupportedVersion(String),
    #[error("unknown statistic '{0}': expected a percentile label, 'Mean', or the throughput statistic")]
    UnknownStatistic(String),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
