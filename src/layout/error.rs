use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The input tree is absent or has no traversable root. Sessions
    /// recover from this locally by presenting an empty layout.
    #[error("diagram input has no traversable root")]
    EmptyTree,
    /// A node was reached twice during flattening. Fatal for the load:
    /// no partial node/edge buffers are kept.
    #[error("node `{name}` was visited twice while flattening the tree")]
    CyclicTree { name: String },
    /// The id generator produced a collision. This would make edge
    /// references ambiguous downstream, so it is never ignored.
    #[error("duplicate node id `{id}` produced while flattening")]
    DuplicateId { id: String },
}
