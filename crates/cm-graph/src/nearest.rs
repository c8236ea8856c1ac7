//! Nearest-node queries bounded by a pixel radius.
//!
//! [`LinearScan`] walks every node and is what the graph uses for pointer
//! hit-testing while the map is being edited; at campus scale a scan of a few
//! hundred nodes per pointer event is cheap.  [`SpatialIndex`] answers the
//! same query from an R-tree (via `rstar`) built once from a graph snapshot,
//! for sessions where the graph no longer changes.  Queried against a graph
//! that has grown since, it falls back to the scan.
//!
//! Both compare squared distances, so a node exactly `max_distance` away is
//! in range.  A negative or NaN radius finds nothing.

use log::debug;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cm_core::{NodeId, Point};

use crate::graph::MapGraph;

/// Closest node to a point, within a radius.
pub trait NearestNode {
    /// The node nearest to `point` if its Euclidean distance is at most
    /// `max_distance`; `None` if the graph is empty or nothing is in range.
    fn closest(&self, graph: &MapGraph, point: Point, max_distance: f64) -> Option<NodeId>;
}

/// `Some(max²)` for a usable radius.
#[inline]
fn radius_sq(max_distance: f64) -> Option<f64> {
    (max_distance >= 0.0).then(|| max_distance * max_distance)
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Scan every node in `NodeId` order.  On an exact tie the first node
/// scanned wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl NearestNode for LinearScan {
    fn closest(&self, graph: &MapGraph, point: Point, max_distance: f64) -> Option<NodeId> {
        let limit = radius_sq(max_distance)?;
        let mut best: Option<(NodeId, f64)> = None;
        for (id, node) in graph.nodes() {
            let d = point.distance_sq(node.point());
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((id, d));
            }
        }
        best.filter(|&(_, d)| d <= limit).map(|(id, _)| id)
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its `NodeId`.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
fn key(p: Point) -> [f64; 2] {
    [f64::from(p.x), f64::from(p.y)]
}

/// R-tree over a snapshot of a graph's nodes.
///
/// Nodes added to the graph after [`build`](Self::build) are not in the
/// tree.  [`closest`](NearestNode::closest) notices and scans instead;
/// [`k_nearest`](Self::k_nearest) and [`within`](Self::within) only see the
/// snapshot, so check [`is_stale`](Self::is_stale) and rebuild.
pub struct SpatialIndex {
    tree:       RTree<NodeEntry>,
    node_count: usize,
}

impl SpatialIndex {
    /// Bulk-load an index of every node currently in `graph`.
    pub fn build(graph: &MapGraph) -> Self {
        let entries: Vec<NodeEntry> = graph
            .nodes()
            .map(|(id, node)| NodeEntry { point: key(node.point()), id })
            .collect();
        Self { tree: RTree::bulk_load(entries), node_count: graph.node_count() }
    }

    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// `true` if `graph` has gained nodes since this index was built.
    pub fn is_stale(&self, graph: &MapGraph) -> bool {
        graph.node_count() != self.node_count
    }

    /// Up to `k` nearest nodes to `point`, nearest first.
    pub fn k_nearest(&self, point: Point, k: usize) -> Vec<NodeId> {
        self.tree
            .nearest_neighbor_iter(&key(point))
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// Every node within `max_distance` of `point`, in no particular order.
    pub fn within(&self, point: Point, max_distance: f64) -> Vec<NodeId> {
        let Some(limit) = radius_sq(max_distance) else { return Vec::new() };
        self.tree
            .locate_within_distance(key(point), limit)
            .map(|e| e.id)
            .collect()
    }
}

impl NearestNode for SpatialIndex {
    /// Answers from the tree while it matches `graph`; once `graph` has
    /// outgrown the snapshot the query falls back to a [`LinearScan`].
    fn closest(&self, graph: &MapGraph, point: Point, max_distance: f64) -> Option<NodeId> {
        if self.is_stale(graph) {
            debug!(
                "spatial index stale ({} of {} nodes), scanning",
                self.node_count,
                graph.node_count()
            );
            return LinearScan.closest(graph, point, max_distance);
        }
        let limit = radius_sq(max_distance)?;
        let q = key(point);
        self.tree
            .nearest_neighbor(&q)
            .filter(|e| e.distance_2(&q) <= limit)
            .map(|e| e.id)
    }
}
