//! Static configuration for the tier grid: which environments and tiers exist,
//! how they are labelled and colored, and the pixel geometry of the tiles.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::error::ConfigError;

/// localStorage key holding an optional JSON override of [`GridConfig`].
pub const CONFIG_STORAGE_KEY: &str = "tg_grid_config";

/// Color used when a tier has no entry in the color table.
pub const FALLBACK_COLOR: &str = "#ffffff";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSize {
    pub width: f64,
    pub height: f64,
}

impl TileSize {
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One grid row: a deployment stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    pub id: String,
    /// Prepended to the tier id to build a cell's service name.
    #[serde(default)]
    pub service_prefix: String,
    /// Row tint, shown in the legend.
    #[serde(default = "default_tint")]
    pub tint: String,
}

/// One grid column: a processing stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSpec {
    pub id: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

fn default_tint() -> String {
    "#30363d".to_string()
}

fn default_color() -> String {
    FALLBACK_COLOR.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows, in display order.
    pub environments: Vec<EnvironmentSpec>,
    /// Columns, in display order.
    pub tiers: Vec<TierSpec>,
    pub tile: TileSize,
    /// Canvas size used until the first window measurement.
    pub viewport: Viewport,
    pub background: String,
    /// Two clicks on the same cell closer than this count as a double click.
    pub double_click_ms: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        let env = |id: &str, tint: &str| EnvironmentSpec {
            id: id.to_string(),
            service_prefix: format!("brook-commerce-{id}-"),
            tint: tint.to_string(),
        };
        let tier = |id: &str, color: &str, description: &str| TierSpec {
            id: id.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        };
        Self {
            environments: vec![
                env("dev", "#1144aa"),
                env("stage", "#116633"),
                env("prod", "#771144"),
            ],
            tiers: vec![
                tier("bronze", "#8b4513", "Raw data ingestion"),
                tier("silver", "#c0c0c0", "Data processing & cleaning"),
                tier("gold", "#ffd700", "Business-ready datasets"),
                tier("ops", "#800080", "Observability & compliance"),
            ],
            tile: TileSize {
                width: 64.0,
                height: 32.0,
            },
            viewport: Viewport {
                width: 1024.0,
                height: 768.0,
            },
            background: "#111111".to_string(),
            double_click_ms: 300.0,
        }
    }
}

impl GridConfig {
    /// Parse a JSON document; missing fields take their reference values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GridConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environments.is_empty() {
            return Err(ConfigError::NoEnvironments);
        }
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        let mut seen = HashSet::new();
        for e in &self.environments {
            if !seen.insert(e.id.as_str()) {
                return Err(ConfigError::DuplicateEnvironment(e.id.clone()));
            }
        }
        let mut seen = HashSet::new();
        for t in &self.tiers {
            if !seen.insert(t.id.as_str()) {
                return Err(ConfigError::DuplicateTier(t.id.clone()));
            }
        }
        let TileSize { width, height } = self.tile;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidTileSize { width, height });
        }
        Ok(())
    }

    /// Reference config, or the override stored in localStorage when one exists and parses.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        let Some(raw) = stored else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                info!(
                    environments = cfg.environments.len(),
                    tiers = cfg.tiers.len(),
                    "loaded grid config override"
                );
                cfg
            }
            Err(err) => {
                warn!(%err, "ignoring stored grid config");
                Self::default()
            }
        }
    }

    pub fn tier_color(&self, tier: &str) -> &str {
        self.tiers
            .iter()
            .find(|t| t.id == tier)
            .map(|t| t.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_config_is_valid() {
        let cfg = GridConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.environments.len(), 3);
        assert_eq!(cfg.tiers.len(), 4);
        assert_eq!(cfg.environments[2].service_prefix, "brook-commerce-prod-");
    }

    #[test]
    fn empty_lists_are_rejected() {
        let mut cfg = GridConfig::default();
        cfg.environments.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoEnvironments)));

        let mut cfg = GridConfig::default();
        cfg.tiers.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoTiers)));
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut cfg = GridConfig::default();
        let dup = cfg.tiers[1].clone();
        cfg.tiers.push(dup);
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateTier(id)) if id == "silver"));

        let mut cfg = GridConfig::default();
        let dup = cfg.environments[0].clone();
        cfg.environments.push(dup);
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateEnvironment(id)) if id == "dev"));
    }

    #[test]
    fn bad_tile_size_is_rejected() {
        let mut cfg = GridConfig::default();
        cfg.tile.height = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidTileSize { .. })));
        cfg.tile.height = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidTileSize { .. })));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GridConfig::from_json(r#"{ "tile": { "width": 96, "height": 48 } }"#).unwrap();
        assert_eq!(cfg.tile.width, 96.0);
        assert_eq!(cfg.tiers.len(), 4);
        assert_eq!(cfg.double_click_ms, 300.0);
    }

    #[test]
    fn json_with_empty_tiers_fails() {
        let err = GridConfig::from_json(r#"{ "tiers": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoTiers));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GridConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_tier_color_falls_back_to_white() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.tier_color("gold"), "#ffd700");
        assert_eq!(cfg.tier_color("platinum"), FALLBACK_COLOR);
    }
}
