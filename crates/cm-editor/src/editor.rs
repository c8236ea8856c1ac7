//! The pointer-driven editing state machine.
//!
//! # Interaction model
//!
//! Editing a walkway network is a two-click gesture:
//!
//! 1. Left-click near an existing node to **select** it.
//! 2. Left-click again to finish, depending on [`EditMode`]:
//!    - `AddPaths`: click another node to connect the two, or empty space to
//!      drop a new junction there and connect to it.
//!    - `AddBuildings`: click empty space, name the entrance, and it is added
//!      and connected to the selection.  Clicking on top of a node cancels.
//!
//! The selection is cleared after the second click whatever happened.  Right
//! click cancels a pending selection, or in `AddLabels` places a label.
//!
//! All event coordinates are screen pixels.

use log::{debug, info};

use cm_core::{EditorConfig, Location, LocationCode, NodeId, Point};
use cm_graph::{MapGraph, Segment};

use crate::{EditMode, EditorResult, NamePrompt, PromptKind, Viewport};

/// What a pointer event did to the map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// Nothing changed.
    Ignored,
    /// `node` is now the pending selection.
    Selected(NodeId),
    /// A pending gesture was abandoned; the graph is unchanged.
    Cancelled,
    AddedBuilding { building: NodeId, from: NodeId },
    AddedJunction { junction: NodeId, from: NodeId },
    Connected { a: NodeId, b: NodeId, weight: f64 },
    /// A label was placed at this map point.
    AddedLabel(Point),
}

impl EditOutcome {
    /// `true` if the graph or its labels changed.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            EditOutcome::AddedBuilding { .. }
                | EditOutcome::AddedJunction { .. }
                | EditOutcome::Connected { .. }
                | EditOutcome::AddedLabel(_)
        )
    }
}

/// Owns the map being edited plus the transient pointer state.
#[derive(Debug)]
pub struct MapEditor {
    graph:       MapGraph,
    config:      EditorConfig,
    viewport:    Viewport,
    mode:        EditMode,
    selected:    Option<NodeId>,
    highlighted: Option<NodeId>,
    pointer:     Option<Point>,
}

impl MapEditor {
    /// Start editing `graph` in the default mode ([`EditMode::AddBuildings`]).
    pub fn new(graph: MapGraph, config: EditorConfig, viewport: Viewport) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            config,
            viewport,
            mode:        EditMode::default(),
            selected:    None,
            highlighted: None,
            pointer:     None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &MapGraph {
        &self.graph
    }

    pub fn into_graph(self) -> MapGraph {
        self.graph
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switching modes drops any pending selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.selected.take().is_some() {
            debug!("selection dropped on switch to {mode}");
        }
        self.mode = mode;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// The node under the pointer as of the last [`pointer_moved`](Self::pointer_moved).
    pub fn highlighted(&self) -> Option<NodeId> {
        self.highlighted
    }

    /// Screen position of the highlighted node.
    pub fn highlighted_on_screen(&self) -> Option<Point> {
        self.highlighted
            .and_then(|id| self.graph.node(id))
            .map(|n| self.viewport.to_screen(n.point()))
    }

    /// Rubber-band line from the selected node to the pointer, in screen
    /// pixels, while a gesture is pending.
    pub fn preview_segment(&self) -> Option<Segment> {
        let from = self.graph.node(self.selected?)?.point();
        Some(Segment { from: self.viewport.to_screen(from), to: self.pointer? })
    }

    /// Every walkway in screen pixels.
    pub fn screen_paths(&self) -> impl Iterator<Item = Segment> + '_ {
        self.graph
            .all_paths()
            .map(|s| self.viewport.segment_to_screen(s))
    }

    // ── Pointer events ────────────────────────────────────────────────────

    fn hit(&self, at: Point) -> Option<NodeId> {
        self.graph.closest_node(at, self.config.max_click_distance)
    }

    /// Track the pointer and update the highlighted node.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> Option<NodeId> {
        self.pointer = Some(Point::new(x, y));
        self.highlighted = self.hit(self.viewport.to_map(x, y));
        self.highlighted
    }

    /// Primary-button click.
    pub fn left_click(
        &mut self,
        x: i32,
        y: i32,
        prompt: &mut impl NamePrompt,
    ) -> EditorResult<EditOutcome> {
        if !self.mode.accepts_left_click() {
            return Ok(EditOutcome::Ignored);
        }
        let at = self.viewport.to_map(x, y);
        let hit = self.hit(at);

        let Some(from) = self.selected.take() else {
            let outcome = match hit {
                Some(id) => {
                    self.selected = Some(id);
                    EditOutcome::Selected(id)
                }
                None => EditOutcome::Ignored,
            };
            debug!("{}: {outcome:?}", self.mode);
            return Ok(outcome);
        };

        let outcome = match self.mode {
            EditMode::AddBuildings => self.finish_building(from, at, hit, prompt)?,
            EditMode::AddPaths => self.finish_path(from, at, hit)?,
            EditMode::Observe | EditMode::AddLabels => EditOutcome::Ignored,
        };
        if outcome.is_mutation() {
            info!("{}: {outcome:?}", self.mode);
        } else {
            debug!("{}: {outcome:?}", self.mode);
        }
        Ok(outcome)
    }

    /// Secondary-button click.
    pub fn right_click(
        &mut self,
        x: i32,
        y: i32,
        prompt: &mut impl NamePrompt,
    ) -> EditorResult<EditOutcome> {
        match self.mode {
            EditMode::AddPaths | EditMode::AddBuildings => {
                Ok(match self.selected.take() {
                    Some(_) => EditOutcome::Cancelled,
                    None => EditOutcome::Ignored,
                })
            }
            EditMode::AddLabels => {
                let at = self.viewport.to_map(x, y);
                let Some(reply) = prompt.ask(PromptKind::Label) else {
                    return Ok(EditOutcome::Cancelled);
                };
                let code = LocationCode::normalize(&reply.code)?;
                self.graph.add_label(Location::new(code, reply.name, at))?;
                info!("{}: label placed at {at}", self.mode);
                Ok(EditOutcome::AddedLabel(at))
            }
            EditMode::Observe => Ok(EditOutcome::Ignored),
        }
    }

    // ── Gesture completion ────────────────────────────────────────────────

    fn finish_building(
        &mut self,
        from: NodeId,
        at: Point,
        hit: Option<NodeId>,
        prompt: &mut impl NamePrompt,
    ) -> EditorResult<EditOutcome> {
        // Entrances may not sit on top of an existing node.
        if hit.is_some() {
            return Ok(EditOutcome::Cancelled);
        }
        let Some(reply) = prompt.ask(PromptKind::Entrance) else {
            return Ok(EditOutcome::Cancelled);
        };
        let code = LocationCode::normalize(&reply.code)?;
        let building = self.graph.add_building(Location::new(code, reply.name, at))?;
        self.graph.connect(from, building)?;
        Ok(EditOutcome::AddedBuilding { building, from })
    }

    fn finish_path(
        &mut self,
        from: NodeId,
        at: Point,
        hit: Option<NodeId>,
    ) -> EditorResult<EditOutcome> {
        match hit {
            Some(to) if to == from => Ok(EditOutcome::Cancelled),
            Some(to) if self.graph.node(from).is_some_and(|n| n.is_adjacent(to)) => {
                Ok(EditOutcome::Cancelled)
            }
            Some(to) => {
                let weight = self.graph.connect(from, to)?;
                Ok(EditOutcome::Connected { a: from, b: to, weight })
            }
            None => {
                let junction = self.graph.add_node(Location::junction(at))?;
                self.graph.connect(from, junction)?;
                Ok(EditOutcome::AddedJunction { junction, from })
            }
        }
    }
}
