use thiserror::Error;

/// Problems found while turning a [`GridConfig`](crate::config::GridConfig) into a grid.
///
/// All of these are fatal at startup: no partial grid is ever built from a
/// configuration that fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid needs at least one environment")]
    NoEnvironments,
    #[error("grid needs at least one tier")]
    NoTiers,
    #[error("environment `{0}` is listed more than once")]
    DuplicateEnvironment(String),
    #[error("tier `{0}` is listed more than once")]
    DuplicateTier(String),
    #[error("tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },
    #[error("could not parse grid config: {0}")]
    Parse(#[from] serde_json::Error),
}
