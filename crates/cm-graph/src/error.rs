//! Graph-subsystem error type.
//!
//! "Not found" outcomes (no node at a point, none within a radius, no route)
//! are `Option::None` results, not errors.  Every variant here aborts only
//! the offending operation and leaves the graph unchanged.

use thiserror::Error;

use cm_core::{CoreError, NodeId, Point};

/// Errors produced by `cm-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("a node already exists at {0}")]
    DuplicateNode(Point),

    #[error("nodes {a} and {b} are already connected")]
    DuplicateEdge { a: NodeId, b: NodeId },

    #[error("cannot connect node {0} to itself")]
    SelfLoop(NodeId),

    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("location at {0} needs a code to be a building or label")]
    MissingCode(Point),

    #[error("edge from {from} does not continue a path ending at {end}")]
    BrokenPath { end: NodeId, from: NodeId },

    #[error("graph is full: {0} nodes is the most a NodeId can address")]
    TooManyNodes(usize),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
