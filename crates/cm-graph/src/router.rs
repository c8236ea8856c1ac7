//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so a host can swap in A* or a
//! precomputed table without touching the graph.  [`DijkstraRouter`] is the
//! default and is what [`MapGraph::shortest_path`] uses.
//!
//! # Cost units
//!
//! Costs are edge weights summed in `f64`.  With automatically connected
//! edges that is walking distance in map pixels.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use cm_core::{NodeId, Point};

use crate::graph::MapGraph;
use crate::node::Edge;
use crate::{GraphError, GraphResult};

// ── PathCandidate ─────────────────────────────────────────────────────────────

/// A route from the search source to `destination`: the edges taken, in
/// order, and their summed weight.
///
/// `destination` is the `to` of the last edge, or the source itself when
/// `path` is empty (and then `cost` is 0).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCandidate {
    cost:        f64,
    destination: NodeId,
    path:        Vec<Edge>,
}

impl PathCandidate {
    /// The zero-cost candidate that seeds a search from `source`.
    pub fn start(source: NodeId) -> Self {
        Self { cost: 0.0, destination: source, path: Vec::new() }
    }

    /// A new candidate one edge further along.
    ///
    /// `edge.from` must be this candidate's destination and `edge.weight`
    /// finite and non-negative; otherwise the candidate is not extended.
    pub(crate) fn extend(&self, edge: Edge) -> GraphResult<Self> {
        if edge.from != self.destination {
            return Err(GraphError::BrokenPath { end: self.destination, from: edge.from });
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight(edge.weight));
        }
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(edge);
        Ok(Self { cost: self.cost + edge.weight, destination: edge.to, path })
    }

    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn path(&self) -> &[Edge] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Edge> {
        self.path
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.path.is_empty()
    }

    /// Nodes visited, source first.
    pub fn nodes(&self) -> Vec<NodeId> {
        match self.path.first() {
            None => vec![self.destination],
            Some(first) => std::iter::once(first.from)
                .chain(self.path.iter().map(|e| e.to))
                .collect(),
        }
    }

    /// Polyline of the route in map pixels, for drawing.
    pub fn points(&self, graph: &MapGraph) -> Vec<Point> {
        self.nodes()
            .into_iter()
            .filter_map(|id| graph.node(id).map(|n| n.point()))
            .collect()
    }

    /// Frontier order: ascending cost, compared directly as reals.
    #[inline]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one router can serve several
/// read-only callers.
pub trait Router: Send + Sync {
    /// Cheapest route from `from` to `to`.
    ///
    /// Returns `Ok(None)` if no path exists (`from == to` is a trivial route,
    /// not `None`), and [`GraphError::NodeNotFound`] if either id is not in
    /// `graph`.
    fn route(
        &self,
        graph: &MapGraph,
        from: NodeId,
        to: NodeId,
    ) -> GraphResult<Option<PathCandidate>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over a frontier of whole [`PathCandidate`]s.
///
/// Equal-cost candidates leave the frontier in insertion order, so results
/// are reproducible for a given graph.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &MapGraph,
        from: NodeId,
        to: NodeId,
    ) -> GraphResult<Option<PathCandidate>> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry.  `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lower cost, then lower sequence number, compares greater.
struct Queued {
    candidate: PathCandidate,
    seq:       u64,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .candidate
            .cmp_cost(&self.candidate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

fn dijkstra(
    graph: &MapGraph,
    from: NodeId,
    to: NodeId,
) -> GraphResult<Option<PathCandidate>> {
    if !graph.contains(from) {
        return Err(GraphError::NodeNotFound(from));
    }
    if !graph.contains(to) {
        return Err(GraphError::NodeNotFound(to));
    }

    let mut settled = vec![false; graph.node_count()];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    frontier.push(Queued { candidate: PathCandidate::start(from), seq });

    while let Some(Queued { candidate, .. }) = frontier.pop() {
        let here = candidate.destination();

        // A cheaper path to this node was already finalized.
        if settled[here.index()] {
            continue;
        }
        settled[here.index()] = true;
        trace!("settled {here} at cost {:.3}", candidate.cost());

        if here == to {
            debug!(
                "route {from} -> {to}: cost {:.3}, {} edges",
                candidate.cost(),
                candidate.path().len()
            );
            return Ok(Some(candidate));
        }

        let Some(node) = graph.node(here) else { continue };
        for (neighbor, weight) in node.neighbors() {
            if settled[neighbor.index()] {
                continue;
            }
            seq += 1;
            frontier.push(Queued {
                candidate: candidate.extend(Edge { from: here, to: neighbor, weight })?,
                seq,
            });
        }
    }

    debug!("no route {from} -> {to}");
    Ok(None)
}
