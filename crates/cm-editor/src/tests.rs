//! Unit tests for cm-editor.

#[cfg(test)]
mod helpers {
    use cm_core::{EditorConfig, Location, LocationCode, Point};
    use cm_graph::MapGraph;

    use crate::{MapEditor, PromptKind, PromptReply, Viewport};

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// One building "CSE" at (100, 100) and a junction at (200, 100),
    /// unconnected, edited at native resolution.
    pub fn editor() -> MapEditor {
        let mut g = MapGraph::new();
        g.add_building(Location::new(
            LocationCode::new("CSE").unwrap(),
            "Allen Center",
            Point::new(100, 100),
        ))
        .unwrap();
        g.add_node(Location::junction(Point::new(200, 100))).unwrap();
        MapEditor::new(g, EditorConfig::default(), Viewport::identity()).unwrap()
    }

    /// A prompt that always answers with `name`/`code` and records what it
    /// was asked.
    pub fn answering<'a>(
        name: &'static str,
        code: &'static str,
        asked: &'a mut Vec<PromptKind>,
    ) -> impl FnMut(PromptKind) -> Option<PromptReply> + 'a {
        move |kind| {
            asked.push(kind);
            Some(PromptReply::new(name, code))
        }
    }

    pub fn cancelling(_kind: PromptKind) -> Option<PromptReply> {
        None
    }

    pub fn never_asked(kind: PromptKind) -> Option<PromptReply> {
        panic!("prompt should not be shown, was asked for {kind:?}")
    }
}

// ── EditMode ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode {
    use crate::{EditMode, EditorError};

    #[test]
    fn default_is_add_buildings() {
        assert_eq!(EditMode::default(), EditMode::AddBuildings);
    }

    #[test]
    fn parse_roundtrip_and_unknown() {
        for m in EditMode::ALL {
            assert_eq!(m.as_str().parse::<EditMode>().unwrap(), m);
        }
        assert!(matches!("zoom".parse::<EditMode>(), Err(EditorError::UnknownMode(s)) if s == "zoom"));
    }

    #[test]
    fn display_hints() {
        assert_eq!(EditMode::Observe.path_width(), 3);
        assert_eq!(EditMode::Observe.marker_radius(), 2);
        assert_eq!(EditMode::AddPaths.path_width(), 7);
        assert_eq!(EditMode::AddLabels.marker_radius(), 5);
        assert!(!EditMode::AddLabels.accepts_left_click());
        assert!(!EditMode::Observe.accepts_left_click());
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod viewport {
    use cm_core::{DisplayConfig, Point};
    use crate::Viewport;

    #[test]
    fn scaling_truncates() {
        let v = Viewport::new(2.5, 2.0).unwrap();
        assert_eq!(v.to_map(3, 3), Point::new(7, 6));
        assert_eq!(v.to_screen(Point::new(7, 6)), Point::new(2, 3));
    }

    #[test]
    fn from_ratio_clamps() {
        let d = DisplayConfig::default();
        assert_eq!(Viewport::from_ratio(10.0, &d).unwrap().scale_x(), 4.0);
        assert_eq!(Viewport::from_ratio(0.1, &d).unwrap().scale_y(), 1.0);
    }

    #[test]
    fn rejects_bad_scale() {
        assert!(Viewport::new(0.0, 1.0).is_err());
        assert!(Viewport::new(1.0, f64::NAN).is_err());
    }
}

// ── Editing gestures ──────────────────────────────────────────────────────────

#[cfg(test)]
mod editing {
    use cm_core::{EditorConfig, LocationCode, NodeId, Point};
    use cm_graph::{GraphError, MapGraph, Segment};
    use crate::{EditMode, EditOutcome, EditorError, MapEditor, PromptKind, Viewport};
    use super::helpers::{answering, cancelling, editor, init_logging, never_asked};

    const CSE: NodeId = NodeId(0);
    const JUNCTION: NodeId = NodeId(1);

    #[test]
    fn rejects_invalid_config() {
        let cfg = EditorConfig { max_click_distance: -3.0 };
        assert!(MapEditor::new(MapGraph::new(), cfg, Viewport::identity()).is_err());
    }

    #[test]
    fn pointer_highlight_within_click_distance() {
        let mut ed = editor();
        assert_eq!(ed.pointer_moved(104, 103), Some(CSE)); // 5 px away
        assert_eq!(ed.highlighted_on_screen(), Some(Point::new(100, 100)));
        assert_eq!(ed.pointer_moved(150, 100), None);
        assert_eq!(ed.highlighted(), None);
    }

    #[test]
    fn add_building_connected_to_selection() {
        init_logging();
        let mut ed = editor();
        let mut asked = Vec::new();

        assert_eq!(ed.left_click(101, 99, &mut never_asked).unwrap(), EditOutcome::Selected(CSE));
        let out = ed.left_click(100, 160, &mut answering("Odegaard", " ode ", &mut asked)).unwrap();

        let EditOutcome::AddedBuilding { building, from } = out else { panic!("{out:?}") };
        assert_eq!(from, CSE);
        assert_eq!(asked, vec![PromptKind::Entrance]);
        assert_eq!(ed.selected(), None);

        let g = ed.graph();
        assert!(g.is_building(building));
        assert_eq!(g.building_by_code(&LocationCode::new("ODE").unwrap()), Some(building));
        assert_eq!(g.node_at(Point::new(100, 160)), Some(building));
        assert_eq!(g.node(building).unwrap().weight_to(CSE), Some(60.0));
    }

    #[test]
    fn building_on_top_of_node_is_cancelled() {
        let mut ed = editor();
        ed.left_click(100, 100, &mut never_asked).unwrap();
        let out = ed.left_click(198, 101, &mut never_asked).unwrap();
        assert_eq!(out, EditOutcome::Cancelled);
        assert_eq!(ed.graph().node_count(), 2);
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn cancelled_prompt_adds_nothing() {
        let mut ed = editor();
        ed.left_click(100, 100, &mut never_asked).unwrap();
        assert_eq!(ed.left_click(50, 50, &mut cancelling).unwrap(), EditOutcome::Cancelled);
        assert_eq!(ed.graph().node_count(), 2);
    }

    #[test]
    fn malformed_code_is_rejected_without_mutation() {
        let mut ed = editor();
        let mut asked = Vec::new();
        ed.left_click(100, 100, &mut never_asked).unwrap();
        let err = ed.left_click(50, 50, &mut answering("Too long", "ABCD", &mut asked)).unwrap_err();
        assert!(matches!(err, EditorError::Core(_)));
        assert_eq!(ed.graph().node_count(), 2);
        assert_eq!(ed.graph().edge_count(), 0);
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn path_to_existing_node() {
        let mut ed = editor();
        ed.set_mode(EditMode::AddPaths);
        ed.left_click(100, 100, &mut never_asked).unwrap();
        let out = ed.left_click(203, 104, &mut never_asked).unwrap();
        assert_eq!(out, EditOutcome::Connected { a: CSE, b: JUNCTION, weight: 100.0 });
        assert_eq!(ed.graph().edge_count(), 1);
        let route = ed.graph().shortest_path(CSE, JUNCTION).unwrap().unwrap();
        assert_eq!(route.cost(), 100.0);
    }

    #[test]
    fn path_into_empty_space_creates_junction() {
        let mut ed = editor();
        ed.set_mode(EditMode::AddPaths);
        ed.left_click(200, 100, &mut never_asked).unwrap();
        let out = ed.left_click(200, 130, &mut never_asked).unwrap();
        let EditOutcome::AddedJunction { junction, from } = out else { panic!("{out:?}") };
        assert_eq!(from, JUNCTION);
        let g = ed.graph();
        assert!(g.location(junction).unwrap().is_junction());
        assert!(!g.is_building(junction));
        assert_eq!(g.node(junction).unwrap().weight_to(JUNCTION), Some(30.0));
    }

    #[test]
    fn reconnecting_or_self_click_is_cancelled() {
        let mut ed = editor();
        ed.set_mode(EditMode::AddPaths);
        ed.left_click(100, 100, &mut never_asked).unwrap();
        assert_eq!(ed.left_click(101, 101, &mut never_asked).unwrap(), EditOutcome::Cancelled);

        ed.left_click(100, 100, &mut never_asked).unwrap();
        ed.left_click(200, 100, &mut never_asked).unwrap();
        ed.left_click(200, 100, &mut never_asked).unwrap();
        assert_eq!(ed.left_click(100, 100, &mut never_asked).unwrap(), EditOutcome::Cancelled);
        assert_eq!(ed.graph().edge_count(), 1);
    }

    #[test]
    fn first_click_in_empty_space_is_ignored() {
        let mut ed = editor();
        assert_eq!(ed.left_click(10, 10, &mut never_asked).unwrap(), EditOutcome::Ignored);
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn right_click_cancels_selection() {
        let mut ed = editor();
        ed.set_mode(EditMode::AddPaths);
        ed.left_click(100, 100, &mut never_asked).unwrap();
        assert_eq!(ed.right_click(0, 0, &mut never_asked).unwrap(), EditOutcome::Cancelled);
        assert_eq!(ed.selected(), None);
        assert_eq!(ed.right_click(0, 0, &mut never_asked).unwrap(), EditOutcome::Ignored);
    }

    #[test]
    fn labels_on_right_click_only() {
        let mut ed = editor();
        let mut asked = Vec::new();
        ed.set_mode(EditMode::AddLabels);
        assert_eq!(ed.left_click(50, 50, &mut never_asked).unwrap(), EditOutcome::Ignored);
        let out = ed.right_click(50, 50, &mut answering("Red Square", "red", &mut asked)).unwrap();
        assert_eq!(out, EditOutcome::AddedLabel(Point::new(50, 50)));
        assert_eq!(asked, vec![PromptKind::Label]);

        let g = ed.graph();
        assert_eq!(g.labels().len(), 1);
        assert_eq!(g.labels()[0].code().map(|c| c.as_str()), Some("RED"));
        assert_eq!(g.node_count(), 2);
        assert!(g.all_locations().all(|l| l.point() != Point::new(50, 50)));
    }

    #[test]
    fn observe_mode_ignores_clicks() {
        let mut ed = editor();
        ed.set_mode(EditMode::Observe);
        assert_eq!(ed.left_click(100, 100, &mut never_asked).unwrap(), EditOutcome::Ignored);
        assert_eq!(ed.right_click(100, 100, &mut never_asked).unwrap(), EditOutcome::Ignored);
        // Hit-testing still works for highlighting.
        assert_eq!(ed.pointer_moved(100, 100), Some(CSE));
    }

    #[test]
    fn mode_switch_drops_selection() {
        let mut ed = editor();
        ed.left_click(100, 100, &mut never_asked).unwrap();
        assert_eq!(ed.selected(), Some(CSE));
        ed.set_mode(EditMode::AddPaths);
        assert_eq!(ed.selected(), None);
    }

    #[test]
    fn clicks_are_scaled_into_map_space() {
        let mut ed = editor();
        ed.set_viewport(Viewport::new(2.0, 2.0).unwrap());
        ed.set_mode(EditMode::AddPaths);
        // Screen (50, 50) is map (100, 100).
        assert_eq!(ed.left_click(50, 50, &mut never_asked).unwrap(), EditOutcome::Selected(CSE));
        let out = ed.left_click(50, 80, &mut never_asked).unwrap();
        let EditOutcome::AddedJunction { junction, .. } = out else { panic!("{out:?}") };
        assert_eq!(ed.graph().node(junction).unwrap().point(), Point::new(100, 160));
        let screen: Vec<Segment> = ed.screen_paths().collect();
        assert!(screen[0].same_endpoints(&Segment { from: Point::new(50, 50), to: Point::new(50, 80) }));
    }

    #[test]
    fn preview_follows_pointer_while_selected() {
        let mut ed = editor();
        ed.set_mode(EditMode::AddPaths);
        ed.pointer_moved(150, 150);
        assert_eq!(ed.preview_segment(), None);
        ed.left_click(100, 100, &mut never_asked).unwrap();
        ed.pointer_moved(150, 150);
        assert_eq!(
            ed.preview_segment(),
            Some(Segment { from: Point::new(100, 100), to: Point::new(150, 150) })
        );
    }

    #[test]
    fn graph_errors_convert() {
        let err: EditorError = GraphError::SelfLoop(CSE).into();
        assert!(matches!(err, EditorError::Graph(GraphError::SelfLoop(_))));
    }
}
