use std::collections::HashSet;

use serde_json::{Map, Value};

use super::error::LayoutError;
use super::types::{Edge, FlatNode, RESERVED_KEYS};
use crate::config::LayoutConfig;
use crate::ir::{EdgeConvention, TreeNode};

/// Flattens a nested tree into an ordered node list plus one directed
/// edge per parent/child pair, in a single pre-order pass.
///
/// Ids are structural paths prefixed by `scope`: the root gets `scope`
/// itself, its children `scope.0`, `scope.1`, and so on. The scope is
/// what keeps ids from being reused across sessions while two loads in
/// the same session produce identical output.
pub(crate) fn flatten(
    root: Option<&TreeNode>,
    convention: EdgeConvention,
    scope: &str,
    config: &LayoutConfig,
) -> Result<(Vec<FlatNode>, Vec<Edge>), LayoutError> {
    let root = root.ok_or(LayoutError::EmptyTree)?;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut visited = HashSet::new();
    visit(
        root,
        None,
        scope.to_string(),
        convention,
        config,
        &mut nodes,
        &mut edges,
        &mut seen_ids,
        &mut visited,
    )?;
    Ok((nodes, edges))
}

fn visit(
    node: &TreeNode,
    parent: Option<(&str, u32)>,
    id: String,
    convention: EdgeConvention,
    config: &LayoutConfig,
    nodes: &mut Vec<FlatNode>,
    edges: &mut Vec<Edge>,
    seen_ids: &mut HashSet<String>,
    visited: &mut HashSet<*const TreeNode>,
) -> Result<(), LayoutError> {
    // Inputs are expected to be acyclic; a revisit means the caller
    // aliased a node and must fail rather than loop.
    if !visited.insert(node as *const TreeNode) {
        return Err(LayoutError::CyclicTree {
            name: node.name.clone(),
        });
    }
    if !seen_ids.insert(id.clone()) {
        return Err(LayoutError::DuplicateId { id });
    }

    let level = parent.map(|(_, parent_level)| parent_level + 1).unwrap_or(1);
    if let Some((parent_id, _)) = parent {
        edges.push(match convention {
            EdgeConvention::ChildToParent => Edge {
                source: id.clone(),
                target: parent_id.to_string(),
            },
            EdgeConvention::ParentToChild => Edge {
                source: parent_id.to_string(),
                target: id.clone(),
            },
        });
    }

    nodes.push(FlatNode {
        id: id.clone(),
        name: node.name.clone(),
        level,
        attributes: project_attributes(&node.detail),
        x: 0.0,
        y: 0.0,
        width: node.name.chars().count() as f32 * config.label_char_width,
        height: config.node_height,
    });

    for (index, child) in node.children.iter().enumerate() {
        visit(
            child,
            Some((id.as_str(), level)),
            format!("{id}.{index}"),
            convention,
            config,
            nodes,
            edges,
            seen_ids,
            visited,
        )?;
    }
    Ok(())
}

/// Projects a node's detail bag into a flat attribute map: top-level
/// keys are copied as-is, entries of a nested `properties` object are
/// hoisted to the same flat level afterwards, so on a key collision the
/// `properties` value wins. Structural keys are excluded throughout.
pub fn project_attributes(detail: &Map<String, Value>) -> Map<String, Value> {
    let mut attributes = Map::new();
    for (key, value) in detail {
        if key == "properties" || RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        attributes.insert(key.clone(), value.clone());
    }
    if let Some(Value::Object(properties)) = detail.get("properties") {
        for (key, value) in properties {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            attributes.insert(key.clone(), value.clone());
        }
    }
    attributes
}
