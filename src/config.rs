use std::path::Path;

use serde::{Deserialize, Serialize};

/// Centered-tree strategy constants (plan-tree diagrams).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenteredConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub row_height: f32,
    pub column_pitch: f32,
    /// Fixed layout-space column the overlap-widening rule measures
    /// label proximity against.
    pub reference_column_x: f32,
    /// Multiplier applied to the label character count when deciding
    /// whether the default pitch would crowd a label.
    pub label_width_factor: f32,
}

impl Default for CenteredConfig {
    fn default() -> Self {
        Self {
            origin_x: 250.0,
            origin_y: 100.0,
            row_height: 100.0,
            column_pitch: 100.0,
            reference_column_x: 300.0,
            label_width_factor: 3.0,
        }
    }
}

/// Serpentine-grid strategy constants (wait-for diagrams).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpentineConfig {
    pub origin_x: f32,
    pub origin_y: f32,
    pub row_height: f32,
    /// X positions for a forward (left-to-right) row; backward rows use
    /// the same table reversed.
    pub columns: [f32; 4],
}

impl Default for SerpentineConfig {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 100.0,
            row_height: 50.0,
            columns: [100.0, 200.0, 300.0, 400.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Height used whenever the diagram has fewer than
    /// `small_tree_threshold` nodes, so short diagrams do not collapse.
    pub min_height: f32,
    pub small_tree_threshold: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_height: 500.0,
            small_tree_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Per-character width used to derive a node's symbol width from
    /// its label length.
    pub label_char_width: f32,
    pub node_height: f32,
    /// Column at which tooltip string values are hard-wrapped.
    pub tooltip_wrap_chars: usize,
    pub centered: CenteredConfig,
    pub serpentine: SerpentineConfig,
    pub canvas: CanvasConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            label_char_width: 10.0,
            node_height: 30.0,
            tooltip_wrap_chars: 30,
            centered: CenteredConfig::default(),
            serpentine: SerpentineConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

/// Loads a `LayoutConfig` from a JSON file; `None` yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let parsed: LayoutConfig = serde_json::from_str(&contents)?;
    Ok(parsed)
}
