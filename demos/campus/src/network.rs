//! Shared campus quad definition.
//!
//! A small synthetic campus: four building entrances around a quad joined
//! by walkway junctions, plus one display label.  Coordinates are map-image
//! pixels.

use anyhow::Result;

use cm_core::{Location, LocationCode, NodeId, Point};
use cm_graph::MapGraph;

fn building(g: &mut MapGraph, code: &str, name: &str, x: i32, y: i32) -> Result<NodeId> {
    Ok(g.add_building(Location::new(LocationCode::new(code)?, name, Point::new(x, y)))?)
}

fn junction(g: &mut MapGraph, x: i32, y: i32) -> Result<NodeId> {
    Ok(g.add_node(Location::junction(Point::new(x, y)))?)
}

/// Build the quad.
///
/// Returns `(graph, [library, science, union, gym])`.  The gym is left
/// unconnected so the demo can show a "no route" answer.
pub fn build_campus() -> Result<(MapGraph, [NodeId; 4])> {
    let mut g = MapGraph::with_capacity(16);

    let library = building(&mut g, "LIB", "Main Library",   200, 120)?;
    let science = building(&mut g, "SCI", "Science Hall",   520, 140)?;
    let union   = building(&mut g, "HUB", "Student Union",  360, 420)?;
    let gym     = building(&mut g, "GYM", "Recreation Ctr", 900, 600)?;

    let nw     = junction(&mut g, 240, 200)?;
    let ne     = junction(&mut g, 480, 200)?;
    let centre = junction(&mut g, 360, 280)?;
    let south  = junction(&mut g, 360, 380)?;

    // Walkways weighted by pixel length.
    g.connect(library, nw)?;
    g.connect(science, ne)?;
    g.connect(nw, ne)?;
    g.connect(nw, centre)?;
    g.connect(ne, centre)?;
    g.connect(centre, south)?;
    g.connect(south, union)?;

    g.add_label(Location::new(LocationCode::new("QAD")?, "The Quad", Point::new(360, 240)))?;

    Ok((g, [library, science, union, gym]))
}
