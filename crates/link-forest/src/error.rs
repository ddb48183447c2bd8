use thiserror::Error;

use crate::tree::NodeId;

/// A handle that does not name a live node of the forest.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForestError {
    #[error("node {0} is outside the arena")]
    OutOfBounds(NodeId),
    #[error("node {0} has been freed")]
    StaleNode(NodeId),
}

/// A broken structural invariant found by [`Forest::validate`](crate::Forest::validate).
///
/// Indices are raw arena slots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("node {0} has a parent and cannot be validated as a root")]
    NotRoot(u32),
    #[error("node {child} does not point back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node {0} is reachable twice")]
    Cycle(u32),
    #[error("node {0} is linked but its slot is free")]
    Stale(u32),
    #[error("node {node} is out of order relative to {ancestor}")]
    OutOfOrder { node: u32, ancestor: u32 },
}
