use thiserror::Error;

use crate::node::NodeId;

/// Reasons a search could not be carried out at all. Not finding the target is not an error; the
/// searches report that as `Ok(None)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The tree has no root to start from.
    #[error("cannot search an empty tree")]
    EmptyTree,
    /// The starting node does not belong to this tree.
    #[error("node {} is not part of this tree", .0.index())]
    UnknownNode(NodeId),
}
