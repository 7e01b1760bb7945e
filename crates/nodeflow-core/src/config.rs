//! Caller configuration for the node renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default snap grid cell size `(x, y)` in diagram units.
pub const DEFAULT_SNAP_GRID: SnapGrid = SnapGrid { x: 15.0, y: 15.0 };

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid renderer config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Snap grid cell size, forwarded to node components untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct SnapGrid {
    pub x: f64,
    pub y: f64,
}

impl Default for SnapGrid {
    fn default() -> Self {
        DEFAULT_SNAP_GRID
    }
}

impl From<[f64; 2]> for SnapGrid {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<SnapGrid> for [f64; 2] {
    fn from(grid: SnapGrid) -> Self {
        [grid.x, grid.y]
    }
}

/// Options controlling a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// Skip nodes outside the viewport box.
    pub only_render_visible_nodes: bool,
    /// Select a node when a drag starts on it.
    pub select_nodes_on_drag: bool,
    pub snap_to_grid: bool,
    pub snap_grid: SnapGrid,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            only_render_visible_nodes: false,
            select_nodes_on_drag: true,
            snap_to_grid: false,
            snap_grid: DEFAULT_SNAP_GRID,
        }
    }
}

impl RendererConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable viewport culling.
    pub fn with_culling(mut self, enabled: bool) -> Self {
        self.only_render_visible_nodes = enabled;
        self
    }

    pub fn with_select_nodes_on_drag(mut self, enabled: bool) -> Self {
        self.select_nodes_on_drag = enabled;
        self
    }

    /// Enable grid snapping with the given cell size.
    pub fn with_snap_grid(mut self, grid: SnapGrid) -> Self {
        self.snap_to_grid = true;
        self.snap_grid = grid;
        self
    }

    /// Parse from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
