//! `cm-graph` — campus walking graph, nearest-node lookup, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`node`]    | `Node`, `Edge`, `Segment`                                   |
//! | [`graph`]   | `MapGraph` (node registry, buildings, labels)               |
//! | [`router`]  | `Router` trait, `PathCandidate`, `DijkstraRouter`           |
//! | [`nearest`] | `NearestNode` trait, `LinearScan`, `SpatialIndex` (R-tree)  |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on node, edge and route types. |
//!
//! # Example
//!
//! ```
//! use cm_core::{Location, LocationCode, Point};
//! use cm_graph::MapGraph;
//!
//! let mut g = MapGraph::new();
//! let a = g.add_building(Location::new(LocationCode::new("CSE").unwrap(), "Allen Center", Point::new(0, 0))).unwrap();
//! let j = g.add_node(Location::junction(Point::new(3, 0))).unwrap();
//! let b = g.add_building(Location::new(LocationCode::new("SUZ").unwrap(), "Suzzallo", Point::new(3, 4))).unwrap();
//! g.connect(a, j).unwrap();
//! g.connect(j, b).unwrap();
//!
//! let route = g.shortest_path(a, b).unwrap().expect("connected");
//! assert_eq!(route.cost(), 7.0);
//! assert_eq!(g.closest_node(Point::new(1, 1), 2.0), Some(a));
//! ```

pub mod error;
pub mod graph;
pub mod nearest;
pub mod node;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::MapGraph;
pub use nearest::{LinearScan, NearestNode, SpatialIndex};
pub use node::{Edge, Node, Segment};
pub use router::{DijkstraRouter, PathCandidate, Router};
