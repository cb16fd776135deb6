use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

use crate::config::LayoutConfig;
use crate::ir::{DiagramKind, TreeNode};
use crate::layout::{self, Layout, LayoutError};
use crate::tooltip;

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Allocates a process-unique id scope. Every session (and every
/// standalone `compute_layout` call) draws one, so node ids are never
/// reused across sessions.
pub(crate) fn next_scope() -> u64 {
    NEXT_SCOPE.fetch_add(1, Ordering::Relaxed)
}

/// Owns the node/edge buffers for the lifetime of one open
/// visualization. Each session is independent; several diagrams can be
/// open at once without any shared state between them.
///
/// Reloading the same tree into the same session produces identical
/// output, because ids are structural paths under the session's scope.
#[derive(Debug)]
pub struct DiagramSession {
    scope: u64,
    config: LayoutConfig,
    layout: Option<Layout>,
}

impl DiagramSession {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            scope: next_scope(),
            config,
            layout: None,
        }
    }

    /// Lays out `tree` and replaces any previous buffers wholesale.
    ///
    /// An absent tree is not an error at this boundary: the session
    /// presents an explicit no-data layout (empty buffers, minimal
    /// canvas) for the renderer to show. Cyclic input or an id
    /// collision aborts the load and leaves the session empty rather
    /// than partially populated.
    pub fn load(
        &mut self,
        tree: Option<&TreeNode>,
        kind: DiagramKind,
    ) -> Result<&Layout, LayoutError> {
        let result =
            layout::compute_layout_scoped(tree, kind, &self.config, &self.scope.to_string());
        let layout = match result {
            Ok(layout) => layout,
            Err(LayoutError::EmptyTree) => Layout::empty(kind, &self.config),
            Err(err) => {
                self.layout = None;
                return Err(err);
            }
        };
        Ok(self.layout.insert(layout))
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Click handler backing for the renderer: the attribute map that
    /// populates the detail panel for a node.
    pub fn on_node_activated(&self, id: &str) -> Option<&Map<String, Value>> {
        self.layout
            .as_ref()
            .and_then(|layout| layout.node(id))
            .map(|node| &node.attributes)
    }

    /// Tooltip text for a node, formatted with the session's wrap
    /// width.
    pub fn tooltip(&self, id: &str) -> Option<String> {
        self.on_node_activated(id)
            .map(|attributes| tooltip::format_attributes(attributes, self.config.tooltip_wrap_chars))
    }

    /// Releases the node/edge buffers. The session can be loaded again
    /// afterwards and keeps its id scope.
    pub fn dispose(&mut self) {
        self.layout = None;
    }
}
