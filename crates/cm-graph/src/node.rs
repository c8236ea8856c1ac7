//! Graph vertices and the edge records exposed to callers.
//!
//! Edges are not owned objects: each undirected edge is stored as one
//! adjacency entry on each endpoint, holding the neighbor's `NodeId` and the
//! weight.  [`Edge`] and [`Segment`] are the detached views handed out for
//! iteration, routing, and rendering.

use std::hash::{Hash, Hasher};

use cm_core::{Location, NodeId, Point};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A walkable point: building entrance or path junction.
///
/// Identity is the coordinate pair; `PartialEq` and `Hash` look at
/// `location().point()` only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    location:  Location,
    adjacency: Vec<(NodeId, f64)>,
}

impl Node {
    pub(crate) fn new(location: Location) -> Self {
        Self { location, adjacency: Vec::new() }
    }

    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.location.point()
    }

    /// `(neighbor, weight)` pairs in the order the edges were added.
    pub fn neighbors(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency.iter().copied()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacency.iter().any(|&(n, _)| n == other)
    }

    /// Weight of the edge to `other`, if one exists.
    pub fn weight_to(&self, other: NodeId) -> Option<f64> {
        self.adjacency
            .iter()
            .find(|&&(n, _)| n == other)
            .map(|&(_, w)| w)
    }

    /// One half of an undirected edge.  Only `MapGraph` calls this, always
    /// in pairs.
    pub(crate) fn push_adjacency(&mut self, neighbor: NodeId, weight: f64) {
        self.adjacency.push((neighbor, weight));
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.point() == other.point()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point().hash(state);
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One traversal of an undirected edge, `from` → `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   NodeId,
    pub to:     NodeId,
    pub weight: f64,
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// The two endpoint coordinates of an edge, for drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to:   Point,
}

impl Segment {
    /// Pixel length of the segment.
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// `true` if `self` and `other` join the same two points, in either
    /// direction.
    pub fn same_endpoints(&self, other: &Segment) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}
