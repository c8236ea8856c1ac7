//! The map model: every walkable node, the building subset, and labels.
//!
//! # Data layout
//!
//! Nodes live in a `Vec<Node>` indexed by [`NodeId`]; a coordinate-keyed
//! `FxHashMap<Point, NodeId>` gives exact-point lookup and guarantees at most
//! one node per coordinate.  Adjacency entries hold `NodeId`s, so there are no
//! owning cycles between neighbors.
//!
//! Buildings are a list of `NodeId`s into the same node vector.  Labels are a
//! separate list of [`Location`]s that never enter the node set and are never
//! traversable.

use log::debug;
use rustc_hash::FxHashMap;

use cm_core::{Location, LocationCode, NodeId, Point};

use crate::nearest::{LinearScan, NearestNode};
use crate::node::{Edge, Node, Segment};
use crate::router::{DijkstraRouter, PathCandidate, Router};
use crate::{GraphError, GraphResult};

/// Undirected weighted walking graph plus display labels.
#[derive(Clone, Debug, Default)]
pub struct MapGraph {
    nodes:      Vec<Node>,
    by_point:   FxHashMap<Point, NodeId>,
    buildings:  Vec<NodeId>,
    labels:     Vec<Location>,
    edge_count: usize,
}

impl MapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut by_point = FxHashMap::default();
        by_point.reserve(nodes);
        Self { nodes: Vec::with_capacity(nodes), by_point, ..Self::default() }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn location(&self, id: NodeId) -> Option<&Location> {
        self.node(id).map(Node::location)
    }

    /// The node at exactly `point`, if any.
    pub fn node_at(&self, point: Point) -> Option<NodeId> {
        self.by_point.get(&point).copied()
    }

    /// The node nearest to `point`, provided it lies within `max_distance`
    /// pixels.  Runs a [`LinearScan`].
    pub fn closest_node(&self, point: Point, max_distance: f64) -> Option<NodeId> {
        LinearScan.closest(self, point, max_distance)
    }

    pub fn is_building(&self, id: NodeId) -> bool {
        self.buildings.contains(&id)
    }

    /// The first building (in insertion order) carrying `code`.
    pub fn building_by_code(&self, code: &LocationCode) -> Option<NodeId> {
        self.buildings
            .iter()
            .copied()
            .find(|&id| self.location(id).and_then(Location::code) == Some(code))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a node for `location`.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if a node already occupies
    /// that coordinate; the graph is unchanged in that case.
    pub fn add_node(&mut self, location: Location) -> GraphResult<NodeId> {
        let point = location.point();
        if self.by_point.contains_key(&point) {
            return Err(GraphError::DuplicateNode(point));
        }
        let id = next_id(self.nodes.len())?;
        self.nodes.push(Node::new(location));
        self.by_point.insert(point, id);
        debug!("added {id} at {point}");
        Ok(id)
    }

    /// Insert a node and mark it as a building entrance.
    ///
    /// The location must carry a code.
    pub fn add_building(&mut self, location: Location) -> GraphResult<NodeId> {
        if location.code().is_none() {
            return Err(GraphError::MissingCode(location.point()));
        }
        let id = self.add_node(location)?;
        self.buildings.push(id);
        debug!("marked {id} as a building");
        Ok(id)
    }

    /// Append a display label.  Labels never join the node set.
    pub fn add_label(&mut self, location: Location) -> GraphResult<()> {
        if location.code().is_none() {
            return Err(GraphError::MissingCode(location.point()));
        }
        debug!("added label {location}");
        self.labels.push(location);
        Ok(())
    }

    /// Add an undirected edge of the given weight between `a` and `b`.
    ///
    /// All checks run before either endpoint is touched, so a rejected edge
    /// leaves both adjacency lists as they were.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> GraphResult<()> {
        if !self.contains(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.contains(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::InvalidWeight(weight));
        }
        if self.nodes[a.index()].is_adjacent(b) {
            return Err(GraphError::DuplicateEdge { a, b });
        }

        self.nodes[a.index()].push_adjacency(b, weight);
        self.nodes[b.index()].push_adjacency(a, weight);
        self.edge_count += 1;
        debug!("connected {a} <-> {b} (weight {weight:.3})");
        Ok(())
    }

    /// Connect `a` and `b` with their Euclidean pixel distance as the weight.
    /// Returns the weight used.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<f64> {
        let pa = self.node(a).ok_or(GraphError::NodeNotFound(a))?.point();
        let pb = self.node(b).ok_or(GraphError::NodeNotFound(b))?.point();
        let weight = pa.distance(pb);
        self.add_edge(a, b, weight)?;
        Ok(weight)
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Cheapest route from `source` to `destination` using [`DijkstraRouter`].
    ///
    /// `Ok(None)` means no route exists; an error means one of the ids is not
    /// in this graph.
    pub fn shortest_path(
        &self,
        source: NodeId,
        destination: NodeId,
    ) -> GraphResult<Option<PathCandidate>> {
        DijkstraRouter.route(self, source, destination)
    }

    // ── Read-only snapshots for rendering ─────────────────────────────────

    /// Every node with its id, in `NodeId` order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        // `add_node` keeps the length within u32 range.
        (0u32..).map(NodeId).zip(self.nodes.iter())
    }

    /// Every undirected edge exactly once, with `from < to`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes().flat_map(|(from, node)| {
            node.neighbors()
                .filter(move |&(to, _)| from < to)
                .map(move |(to, weight)| Edge { from, to, weight })
        })
    }

    /// Endpoint coordinates of every undirected edge exactly once.
    pub fn all_paths(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges().map(|e| Segment {
            from: self.nodes[e.from.index()].point(),
            to:   self.nodes[e.to.index()].point(),
        })
    }

    /// Payload of every node.  Labels are not included.
    pub fn all_locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.nodes.iter().map(Node::location)
    }

    /// Payloads of building nodes, in the order they were added.
    pub fn buildings(&self) -> impl Iterator<Item = &Location> + '_ {
        self.buildings
            .iter()
            .map(|id| self.nodes[id.index()].location())
    }

    /// Ids of building nodes, in the order they were added.
    pub fn building_ids(&self) -> &[NodeId] {
        &self.buildings
    }

    pub fn labels(&self) -> &[Location] {
        &self.labels
    }
}

/// Id for the node that would sit at position `len`.
pub(crate) fn next_id(len: usize) -> GraphResult<NodeId> {
    NodeId::try_from(len).map_err(|_| GraphError::TooManyNodes(len))
}
