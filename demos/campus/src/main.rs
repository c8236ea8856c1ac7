//! campus — smallest end-to-end example for the campus_map workspace.
//!
//! Builds a synthetic quad, routes between buildings, then replays a short
//! scripted editing session (as a UI would feed it pointer events) that
//! connects an isolated building and labels a landmark.
//!
//! Run with `RUST_LOG=debug` to see graph and editor logging.

mod network;

use std::collections::VecDeque;

use anyhow::{Context, Result};
use log::info;

use cm_core::{DisplayConfig, EditorConfig, LocationCode, NodeId, Point};
use cm_editor::{EditMode, MapEditor, NamePrompt, PromptKind, PromptReply, Viewport};
use cm_graph::{MapGraph, NearestNode, SpatialIndex};

use network::build_campus;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Image pixels per screen pixel for the scripted session.
const ZOOM_RATIO: f64 = 2.0;

// ── Scripted prompt ───────────────────────────────────────────────────────────

/// Answers prompts from a fixed queue, standing in for the UI's dialogs.
struct ScriptedPrompt {
    replies: VecDeque<PromptReply>,
}

impl NamePrompt for ScriptedPrompt {
    fn ask(&mut self, kind: PromptKind) -> Option<PromptReply> {
        let reply = self.replies.pop_front();
        info!("{}: {} / {} -> {reply:?}", kind.title(), kind.name_hint(), kind.code_hint());
        reply
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn describe_route(graph: &MapGraph, from: NodeId, to: NodeId) -> Result<()> {
    let name = |id| graph.location(id).map(|l| l.name().to_owned()).unwrap_or_default();
    match graph.shortest_path(from, to)? {
        Some(route) => {
            println!(
                "  {} -> {}: {:.1} px over {} walkways",
                name(from),
                name(to),
                route.cost(),
                route.path().len()
            );
            println!("    polyline: {}", serde_json::to_string(&route.points(graph))?);
        }
        None => println!("  {} -> {}: no route", name(from), name(to)),
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== campus — campus_map walking router ===");
    println!();

    // 1. Build the map.
    let (graph, [library, science, union, gym]) = build_campus()?;
    println!(
        "Map: {} nodes ({} buildings), {} walkways, {} labels",
        graph.node_count(),
        graph.buildings().count(),
        graph.edge_count(),
        graph.labels().len()
    );

    // 2. Routes on the initial map.
    println!();
    println!("Routes:");
    describe_route(&graph, library, union)?;
    describe_route(&graph, science, library)?;
    describe_route(&graph, library, gym)?;

    // 3. Hit-testing under the pointer.
    println!();
    let probe = Point::new(205, 118);
    match graph.closest_node(probe, EditorConfig::default().max_click_distance) {
        Some(id) => println!("Pointer at {probe} is over {}", graph.node(id).context("hit node")?.location()),
        None => println!("Pointer at {probe} is over nothing"),
    }

    // 4. Scripted editing session at 2x zoom.
    let display = DisplayConfig::default();
    let mut editor = MapEditor::new(
        graph,
        EditorConfig::default(),
        Viewport::from_ratio(ZOOM_RATIO, &display)?,
    )?;
    let mut prompt = ScriptedPrompt {
        replies: VecDeque::from([PromptReply::new("Clock Tower", " clk ")]),
    };

    println!();
    println!("Editing session:");
    editor.set_mode(EditMode::AddPaths);
    for (x, y) in [(180, 210), (450, 300)] {
        editor.pointer_moved(x, y);
        let outcome = editor.left_click(x, y, &mut prompt)?;
        println!("  [{}] left click at ({x}, {y}) -> {outcome:?}", editor.mode());
    }
    editor.set_mode(EditMode::AddLabels);
    let outcome = editor.right_click(150, 60, &mut prompt)?;
    println!("  [{}] right click at (150, 60) -> {outcome:?}", editor.mode());

    let graph = editor.into_graph();

    // 5. Routes after editing.
    println!();
    println!("Routes after editing:");
    describe_route(&graph, library, gym)?;

    let hub = LocationCode::new("HUB")?;
    let hub_id = graph.building_by_code(&hub).context("HUB building")?;
    describe_route(&graph, hub_id, science)?;

    // 6. Read-only session: index the finished map once.
    let index = SpatialIndex::build(&graph);
    let probe = Point::new(898, 603);
    println!();
    println!(
        "Indexed lookup at {probe}: {:?} (linear scan: {:?})",
        index.closest(&graph, probe, 8.0),
        graph.closest_node(probe, 8.0)
    );

    println!();
    println!("Buildings: {}", serde_json::to_string_pretty(&graph.buildings().collect::<Vec<_>>())?);
    println!("Labels:    {}", serde_json::to_string(graph.labels())?);

    Ok(())
}
