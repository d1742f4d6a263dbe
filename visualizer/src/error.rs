use shared::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no statistics configured; at least one chart column is required")]
    NoStatistics,
}
