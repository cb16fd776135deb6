use plangraph::{DiagramKind, DiagramSession, LayoutConfig, TreeNode, compute_layout};
use serde_json::json;

/// The three-level plan from the dashboard's execution-plan view:
/// root -> [A, B]; A -> [C].
fn three_level_plan() -> TreeNode {
    TreeNode::new("Gather")
        .with_detail("workers", json!(2))
        .child(
            TreeNode::new("Hash Join")
                .with_detail("properties", json!({"cost": 40.2, "rows": 110}))
                .child(TreeNode::new("Seq Scan")),
        )
        .child(TreeNode::new("Index Scan"))
}

fn wait_chain(len: usize) -> TreeNode {
    let mut node = TreeNode::new(format!("sid {}", 100 + len))
        .with_detail("lock_mode", json!("RowExclusiveLock"));
    for i in (1..len).rev() {
        node = TreeNode::new(format!("sid {}", 100 + i)).child(node);
    }
    node
}

#[test]
fn plan_tree_example_scenario() {
    let config = LayoutConfig::default();
    let layout = compute_layout(Some(&three_level_plan()), DiagramKind::PlanTree, &config).unwrap();

    assert_eq!(layout.nodes.len(), 4);
    assert_eq!(layout.edges.len(), 3);
    let mut levels: Vec<u32> = layout.nodes.iter().map(|n| n.level).collect();
    levels.sort_unstable();
    assert_eq!(levels, [1, 2, 2, 3]);
    // 4 nodes < 5, so the canvas keeps the fixed floor.
    assert_eq!(layout.canvas_height, 500.0);

    // Every edge points child -> parent: each non-root node is exactly
    // one edge's source, and the root is never a source.
    let root = &layout.nodes[0];
    for node in &layout.nodes[1..] {
        let outgoing: Vec<_> = layout.edges.iter().filter(|e| e.source == node.id).collect();
        assert_eq!(outgoing.len(), 1, "{} should feed its parent", node.name);
    }
    assert!(layout.edges.iter().all(|e| e.source != root.id));
}

#[test]
fn plan_tree_rows_and_root_anchor() {
    let config = LayoutConfig::default();
    let layout = compute_layout(Some(&three_level_plan()), DiagramKind::PlanTree, &config).unwrap();

    let root = &layout.nodes[0];
    assert_eq!(root.x, config.centered.origin_x);
    assert_eq!(root.y, config.centered.origin_y);
    for node in &layout.nodes {
        let expected_y =
            config.centered.origin_y + (node.level - 1) as f32 * config.centered.row_height;
        assert_eq!(node.y, expected_y, "level {} shares one row", node.level);
    }
}

#[test]
fn wait_for_chain_snakes_through_the_grid() {
    let config = LayoutConfig::default();
    let layout = compute_layout(Some(&wait_chain(9)), DiagramKind::WaitFor, &config).unwrap();

    assert_eq!(layout.nodes.len(), 9);
    assert_eq!(layout.edges.len(), 8);
    // Blocking-chain edges run parent -> child.
    assert_eq!(layout.edges[0].source, layout.nodes[0].id);
    assert_eq!(layout.edges[0].target, layout.nodes[1].id);

    let first = &layout.nodes[0];
    assert_eq!(
        (first.x, first.y),
        (config.serpentine.origin_x, config.serpentine.origin_y)
    );
    let first_row: Vec<f32> = layout.nodes[0..4].iter().map(|n| n.x).collect();
    assert_eq!(first_row, vec![100.0, 200.0, 300.0, 400.0]);
    let second_row: Vec<f32> = layout.nodes[4..8].iter().map(|n| n.x).collect();
    assert_eq!(second_row, vec![400.0, 300.0, 200.0, 100.0]);
    let second_row_y = config.serpentine.origin_y + config.serpentine.row_height;
    assert!(layout.nodes[4..8].iter().all(|n| n.y == second_row_y));
}

#[test]
fn session_hand_off_matches_the_renderer_contract() {
    let mut session = DiagramSession::new(LayoutConfig::default());
    let tree = three_level_plan();
    let layout = session.load(Some(&tree), DiagramKind::PlanTree).unwrap();

    // The renderer gets positioned nodes with sizes plus the edge list;
    // detail/tooltip lookups go back through the session by id.
    let join = layout
        .nodes
        .iter()
        .find(|n| n.name == "Hash Join")
        .expect("join node present")
        .id
        .clone();
    let attributes = session.on_node_activated(&join).unwrap();
    assert_eq!(attributes.get("cost"), Some(&json!(40.2)));
    assert_eq!(attributes.get("rows"), Some(&json!(110)));

    let tooltip = session.tooltip(&join).unwrap();
    assert_eq!(tooltip, "cost: 40.2\nrows: 110");
}

#[test]
fn reloading_a_session_is_bitwise_stable() {
    let mut session = DiagramSession::new(LayoutConfig::default());
    let tree = wait_chain(6);
    let first = session.load(Some(&tree), DiagramKind::WaitFor).unwrap().clone();
    let second = session.load(Some(&tree), DiagramKind::WaitFor).unwrap();
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);
    assert_eq!(first.canvas_height, second.canvas_height);
}

#[test]
fn six_node_plan_grows_the_canvas() {
    // Six nodes, max level 5: the canvas leaves the fixed floor behind
    // and scales with depth instead.
    let tree = TreeNode::new("root")
        .child(
            TreeNode::new("a").child(
                TreeNode::new("b").child(TreeNode::new("c").child(TreeNode::new("d"))),
            ),
        )
        .child(TreeNode::new("e"));
    let config = LayoutConfig::default();
    let layout = compute_layout(Some(&tree), DiagramKind::PlanTree, &config).unwrap();
    assert_eq!(layout.nodes.len(), 6);
    assert_eq!(layout.canvas_height, 6.0 * config.centered.row_height);
}
