pub type Result<T> = std::result::Result<T, Error>;

/// Structural problems reported by [`crate::MindMap::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("mind map has no nodes")]
    Empty,

    #[error("duplicate node id: {node}")]
    DuplicateNodeId { node: String },

    #[error("edge {edge} references a missing node: {endpoint}")]
    DanglingEdge { edge: String, endpoint: String },

    #[error("node {node} has more than one parent")]
    MultipleParents { node: String },

    #[error("mind map has no root (every node has a parent)")]
    NoRoot,

    #[error("mind map has more than one root: {}", roots.join(", "))]
    MultipleRoots { roots: Vec<String> },

    #[error("nodes are not reachable from the root: {}", nodes.join(", "))]
    Unreachable { nodes: Vec<String> },
}
