use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::LayoutConfig;
use crate::ir::DiagramKind;

/// Detail-map keys that are structural rather than display attributes.
/// They never appear in a `FlatNode`'s attribute map and the tooltip
/// formatter skips them defensively.
pub const RESERVED_KEYS: [&str; 6] = ["x", "y", "id", "level", "key", "name"];

/// A tree node after flattening: depth-annotated, uniquely identified
/// within its session, and carrying computed screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatNode {
    pub id: String,
    pub name: String,
    /// 1-based depth from the root.
    pub level: u32,
    pub attributes: Map<String, Value>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Everything the external graph renderer needs: positioned nodes,
/// directed edges, and the surface height. It does no layout work of
/// its own.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub kind: DiagramKind,
    pub nodes: Vec<FlatNode>,
    pub edges: Vec<Edge>,
    pub canvas_height: f32,
}

impl Layout {
    /// Explicit no-data state: empty buffers under the minimal canvas
    /// height, handed to the renderer instead of an error.
    pub fn empty(kind: DiagramKind, config: &LayoutConfig) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
            canvas_height: config.canvas.min_height,
        }
    }

    pub fn node(&self, id: &str) -> Option<&FlatNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
