use graph_canvas_editor::components::graph_editor::{
	EditorConfig, EditorState, ModeKind, Point, test_hit, to_adjacency_text,
};

fn place(state: &mut EditorState, x: f64, y: f64, name: &str) {
	state.click(Point::new(x, y), |_| Some(name.to_string()));
}

#[test]
fn place_connect_export_delete() {
	let mut state = EditorState::new(EditorConfig::default());
	state.set_mode(ModeKind::Placing);
	place(&mut state, 100.0, 100.0, "A");
	place(&mut state, 200.0, 100.0, "B");

	let a = state.graph.nodes()[0].id();
	let b = state.graph.nodes()[1].id();
	assert_eq!(state.graph.node(a).unwrap().position, Point::new(100.0, 100.0));
	assert_eq!(state.graph.node(b).unwrap().position, Point::new(200.0, 100.0));

	assert!(state.graph.add_connection(a, b).is_some());
	assert_eq!(to_adjacency_text(&state.graph), "A,B\nB,A\n");

	state.graph.delete_node(a);
	assert_eq!(to_adjacency_text(&state.graph), "");
}

#[test]
fn same_scenario_through_the_toolbar() {
	let mut state = EditorState::new(EditorConfig::default());
	state.set_mode(ModeKind::Placing);
	place(&mut state, 100.0, 100.0, "A");
	place(&mut state, 200.0, 100.0, "B");

	state.set_mode(ModeKind::Connecting);
	state.click(Point::new(100.0, 100.0), |_| None);
	state.click(Point::new(200.0, 100.0), |_| None);
	state.click(Point::new(200.0, 100.0), |_| None);
	state.click(Point::new(100.0, 100.0), |_| None);
	assert_eq!(state.graph.connection_count(), 1);
	assert_eq!(state.export().text, "A,B\nB,A\n");

	state.set_mode(ModeKind::Deleting);
	state.click(Point::new(100.0, 100.0), |_| None);
	assert_eq!(state.export().text, "");
	assert_eq!(state.graph.len(), 1);
}

#[test]
fn stacked_nodes_resolve_to_latest_or_last_moved() {
	let mut state = EditorState::new(EditorConfig::default());
	state.set_mode(ModeKind::Placing);
	place(&mut state, 300.0, 300.0, "first");
	place(&mut state, 300.0, 300.0, "second");
	let first = state.graph.nodes()[0].id();
	let second = state.graph.nodes()[1].id();

	let at = Point::new(300.0, 300.0);
	assert_eq!(test_hit(&state.graph, &state.viewport, at), Some(second));

	state.graph.raise(first);
	assert_eq!(test_hit(&state.graph, &state.viewport, at), Some(first));

	state.set_mode(ModeKind::Moving);
	state.graph.raise(second);
	state.pointer_down(at);
	state.pointer_move(Point::new(320.0, 300.0));
	state.pointer_up();
	assert_eq!(state.node_at(Point::new(310.0, 300.0)), Some(second));
}

#[test]
fn placement_after_pan_and_zoom_lands_under_cursor() {
	let mut state = EditorState::new(EditorConfig::default());
	state.pointer_down(Point::new(0.0, 0.0));
	state.pointer_move(Point::new(-100.0, -50.0));
	state.pointer_up();
	state.wheel(-1.0);
	state.wheel(-1.0);

	state.set_mode(ModeKind::Placing);
	place(&mut state, 60.0, 24.0, "C");
	let node = &state.graph.nodes()[0];
	assert!((node.position.x - 150.0).abs() < 1e-9);
	assert!((node.position.y - 70.0).abs() < 1e-9);
	assert_eq!(state.node_at(Point::new(60.0, 24.0)), Some(node.id()));
}
