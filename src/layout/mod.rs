mod centered;
mod error;
mod flatten;
mod serpentine;
pub(crate) mod types;

pub use error::LayoutError;
pub use flatten::project_attributes;
pub use types::{Edge, FlatNode, Layout, RESERVED_KEYS};

use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::ir::{DiagramKind, TreeNode};
use crate::session;

/// Computes a full layout for one diagram: flatten, group by level,
/// assign coordinates with the kind's strategy, derive the canvas
/// height. Deterministic for a given tree and config; ids are drawn
/// from a fresh scope on every call (use a [`crate::DiagramSession`]
/// when ids must stay stable across reloads).
pub fn compute_layout(
    tree: Option<&TreeNode>,
    kind: DiagramKind,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    compute_layout_scoped(tree, kind, config, &session::next_scope().to_string())
}

pub(crate) fn compute_layout_scoped(
    tree: Option<&TreeNode>,
    kind: DiagramKind,
    config: &LayoutConfig,
    scope: &str,
) -> Result<Layout, LayoutError> {
    let (mut nodes, edges) = flatten::flatten(tree, kind.edge_convention(), scope, config)?;

    match kind {
        DiagramKind::PlanTree => {
            // Levels are processed in ascending order; each one is a
            // single row below the previous.
            for (level_index, (_, member_indices)) in group_by_level(&nodes).iter().enumerate() {
                centered::assign_level(level_index, member_indices, &mut nodes, &config.centered);
            }
        }
        DiagramKind::WaitFor => serpentine::assign(&mut nodes, &config.serpentine),
    }

    let max_level = nodes.iter().map(|node| node.level).max().unwrap_or(1);
    let canvas_height = required_height(nodes.len(), max_level, config);
    Ok(Layout {
        kind,
        nodes,
        edges,
        canvas_height,
    })
}

/// Partitions the flat node list by level, ascending, keeping each
/// level's flatten-order. Grouping is explicit: pre-order traversal
/// interleaves levels, so append order alone is not the display order.
pub fn group_by_level(nodes: &[FlatNode]) -> Vec<(u32, Vec<usize>)> {
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, node) in nodes.iter().enumerate() {
        groups.entry(node.level).or_default().push(index);
    }
    groups.into_iter().collect()
}

/// Rendering surface height: small diagrams get a fixed floor so they
/// do not collapse, tall trees grow one centered-strategy row per level
/// and scroll.
pub fn required_height(node_count: usize, max_level: u32, config: &LayoutConfig) -> f32 {
    if node_count < config.canvas.small_tree_threshold {
        config.canvas.min_height
    } else {
        (max_level + 1) as f32 * config.centered.row_height
    }
}
