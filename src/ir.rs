use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of the externally supplied tree: a query-plan step or a
/// wait-chain session entry. The `detail` bag is heterogeneous and may
/// carry a nested `properties` object that gets hoisted during
/// attribute projection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub detail: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.detail.insert(key.into(), value);
        self
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Which of the two diagram shapes a layout request is for. The kind
/// selects both the coordinate strategy and the edge direction
/// convention; callers must state it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramKind {
    /// Query execution plan: centered-tree placement, edges run
    /// child -> parent ("this step feeds its parent step").
    PlanTree,
    /// Lock wait-for chain: serpentine-grid placement, edges run
    /// parent -> child ("this session is waited on by the next").
    WaitFor,
}

impl DiagramKind {
    pub fn edge_convention(self) -> EdgeConvention {
        match self {
            Self::PlanTree => EdgeConvention::ChildToParent,
            Self::WaitFor => EdgeConvention::ParentToChild,
        }
    }
}

/// Edge direction convention. The two diagrams encode different
/// relationships (data-flow vs. blocking-chain), so the direction is a
/// named construction-time parameter rather than a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeConvention {
    ChildToParent,
    ParentToChild,
}
