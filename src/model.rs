//! Grid data model: one cell per (environment, tier) pair.
//! Rows are environments, columns are tiers, both in configured order.

use serde::Serialize;
use tracing::info;

use crate::config::{EnvironmentSpec, GridConfig, TierSpec, TileSize, Viewport};
use crate::coords::{self, GridCoord, ScreenPoint};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub environment: String,
    pub tier: String,
    /// Tier index (column).
    pub grid_x: usize,
    /// Environment index (row).
    pub grid_y: usize,
    service_name: String,
    color: String,
    tier_description: String,
}

impl GridCell {
    pub fn new(env: &EnvironmentSpec, tier: &TierSpec, grid_x: usize, grid_y: usize) -> Self {
        Self {
            environment: env.id.clone(),
            tier: tier.id.clone(),
            grid_x,
            grid_y,
            service_name: format!("{}{}", env.service_prefix, tier.id),
            color: tier.color.clone(),
            tier_description: tier.description.clone(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn tier_description(&self) -> &str {
        &self.tier_description
    }

    /// "PROD GOLD"
    pub fn display_label(&self) -> String {
        format!(
            "{} {}",
            self.environment.to_uppercase(),
            self.tier.to_uppercase()
        )
    }

    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.grid_x as i32, self.grid_y as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
    pub total_cells: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridStats {
    pub dimensions: GridDimensions,
    pub environments: Vec<String>,
    pub tiers: Vec<String>,
    pub service_names: Vec<String>,
}

/// Fixed-size grid of cells plus the screen offset that centers it.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    environments: Vec<String>,
    tiers: Vec<String>,
    /// Row-major, `rows * cols` long.
    cells: Vec<GridCell>,
    offset: ScreenPoint,
}

impl Grid {
    /// Cartesian product of environments (rows) and tiers (columns).
    pub fn build(environments: &[EnvironmentSpec], tiers: &[TierSpec]) -> Result<Self, ConfigError> {
        if environments.is_empty() {
            return Err(ConfigError::NoEnvironments);
        }
        if tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        let mut env_ids: Vec<String> = Vec::with_capacity(environments.len());
        for e in environments {
            if env_ids.contains(&e.id) {
                return Err(ConfigError::DuplicateEnvironment(e.id.clone()));
            }
            env_ids.push(e.id.clone());
        }
        let mut tier_ids: Vec<String> = Vec::with_capacity(tiers.len());
        for t in tiers {
            if tier_ids.contains(&t.id) {
                return Err(ConfigError::DuplicateTier(t.id.clone()));
            }
            tier_ids.push(t.id.clone());
        }

        let mut cells = Vec::with_capacity(environments.len() * tiers.len());
        for (y, env) in environments.iter().enumerate() {
            for (x, tier) in tiers.iter().enumerate() {
                cells.push(GridCell::new(env, tier, x, y));
            }
        }
        info!(
            rows = env_ids.len(),
            cols = tier_ids.len(),
            "initialized tier grid"
        );
        Ok(Self {
            environments: env_ids,
            tiers: tier_ids,
            cells,
            offset: ScreenPoint::ORIGIN,
        })
    }

    /// Validated build, centered in the config's initial viewport.
    pub fn from_config(cfg: &GridConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut grid = Self::build(&cfg.environments, &cfg.tiers)?;
        grid.recompute_offset(cfg.viewport, cfg.tile);
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.environments.len()
    }

    pub fn cols(&self) -> usize {
        self.tiers.len()
    }

    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    pub fn offset(&self) -> ScreenPoint {
        self.offset
    }

    pub fn is_valid_coord(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols() && (y as usize) < self.rows()
    }

    /// Bounds-checked lookup; `None` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<&GridCell> {
        if !self.is_valid_coord(x, y) {
            return None;
        }
        self.cells.get(y as usize * self.cols() + x as usize)
    }

    pub fn cell_at(&self, coord: GridCoord) -> Option<&GridCell> {
        self.cell(coord.x, coord.y)
    }

    /// `None` when either id is not configured.
    pub fn cell_by_key(&self, environment: &str, tier: &str) -> Option<&GridCell> {
        let y = self.environment_index(environment)?;
        let x = self.tier_index(tier)?;
        self.cells.get(y * self.cols() + x)
    }

    pub fn environment_index(&self, environment: &str) -> Option<usize> {
        self.environments.iter().position(|e| e == environment)
    }

    pub fn tier_index(&self, tier: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t == tier)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells of one environment, in tier order. Empty for an unknown environment.
    pub fn row(&self, environment: &str) -> &[GridCell] {
        match self.environment_index(environment) {
            Some(y) => {
                let start = y * self.cols();
                &self.cells[start..start + self.cols()]
            }
            None => &[],
        }
    }

    /// Cells of one tier, in environment order. Empty for an unknown tier.
    pub fn column(&self, tier: &str) -> Vec<&GridCell> {
        match self.tier_index(tier) {
            Some(x) => self.cells.iter().skip(x).step_by(self.cols()).collect(),
            None => Vec::new(),
        }
    }

    /// Recenters the grid in a viewport of the given size. Last call wins.
    pub fn recompute_offset(&mut self, viewport: Viewport, tile: TileSize) -> ScreenPoint {
        let extent = coords::grid_extent(self.cols(), self.rows(), tile);
        self.offset = coords::center_offset(extent, viewport);
        self.offset
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            cols: self.cols(),
            rows: self.rows(),
            total_cells: self.cells.len(),
        }
    }

    pub fn stats(&self) -> GridStats {
        GridStats {
            dimensions: self.dimensions(),
            environments: self.environments.clone(),
            tiers: self.tiers.clone(),
            service_names: self
                .cells
                .iter()
                .map(|c| c.service_name().to_string())
                .collect(),
        }
    }
}
