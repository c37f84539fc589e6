use super::config::{BASE_FONT_SIZE, NODE_RADIUS};
use super::state::EditorState;
use super::surface::{Surface, TextAnchor};
use super::types::{Point, Size};

/// What made it onto the surface in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	pub nodes_drawn: usize,
	pub connections_drawn: usize,
}

pub fn render<S: Surface + ?Sized>(state: &EditorState, surface: &mut S) -> FrameStats {
	let size = surface.size();
	surface.clear(&state.config.background);
	let connections_drawn = draw_connections(state, surface, size);
	let nodes_drawn = draw_nodes(state, surface, size);
	draw_overlay(state, surface);
	FrameStats {
		nodes_drawn,
		connections_drawn,
	}
}

// Connections are drawn only when both ends are visible; no clipping.
fn draw_connections<S: Surface + ?Sized>(state: &EditorState, surface: &mut S, size: Size) -> usize {
	let (graph, viewport) = (&state.graph, &state.viewport);
	surface.set_stroke(&state.config.connection_stroke);
	surface.set_line_width(state.config.connection_line_width);

	let mut drawn = 0;
	for connection in graph.connections() {
		let (Some(from), Some(to)) = (
			graph.node(connection.source),
			graph.node(connection.destination),
		) else {
			continue;
		};
		if !viewport.is_visible(from.position, size) || !viewport.is_visible(to.position, size) {
			continue;
		}
		surface.line(viewport.to_screen(from.position), viewport.to_screen(to.position));
		drawn += 1;
	}
	drawn
}

fn draw_nodes<S: Surface + ?Sized>(state: &EditorState, surface: &mut S, size: Size) -> usize {
	let (graph, viewport, config) = (&state.graph, &state.viewport, &state.config);
	let scale = viewport.scale();
	let selected = state.mode.selection();

	surface.set_font_size(BASE_FONT_SIZE * scale);
	surface.set_text_anchor(TextAnchor::Centre);
	surface.set_line_width(config.node_line_width);

	let mut drawn = 0;
	for node in graph.nodes() {
		if !viewport.is_visible(node.position, size) {
			continue;
		}
		let centre = viewport.to_screen(node.position);
		let stroke = if selected == Some(node.id()) {
			&config.highlight_stroke
		} else {
			&config.node_stroke
		};

		surface.set_fill(&config.node_fill);
		surface.set_stroke(stroke);
		surface.circle(centre, NODE_RADIUS * scale);

		surface.set_fill(&config.node_stroke);
		surface.text(&node.name, centre);
		drawn += 1;
	}
	drawn
}

// Axis marks in the corner, the current origin, then zoom and tool.
fn draw_overlay<S: Surface + ?Sized>(state: &EditorState, surface: &mut S) {
	let origin = state.viewport.origin;
	let scale = state.viewport.scale();

	surface.set_stroke(&state.config.overlay_color);
	surface.set_fill(&state.config.overlay_color);
	surface.set_line_width(1.0);
	surface.line(Point::new(5.0, 5.0), Point::new(5.0, 40.0));
	surface.line(Point::new(5.0, 5.0), Point::new(40.0, 5.0));

	surface.set_text_anchor(TextAnchor::BottomLeft);
	surface.set_font_size(BASE_FONT_SIZE * scale);
	surface.text(&format!("X: {:.1}", origin.x), Point::new(45.0, 17.0));
	surface.text(&format!("Y: {:.1}", origin.y), Point::new(2.0, 60.0));

	surface.set_font_size(BASE_FONT_SIZE);
	surface.text(
		&format!("Zoom: {scale:.1}  Tool: {}", state.mode.kind()),
		Point::new(2.0, 80.0),
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_editor::config::EditorConfig;
	use crate::components::graph_editor::mode::ModeKind;

	#[derive(Debug, Clone, PartialEq)]
	enum Op {
		Circle(Point, f64, String),
		Line(Point, Point),
		Text(String, Point),
	}

	struct Recorder {
		size: Size,
		stroke: String,
		ops: Vec<Op>,
	}

	impl Recorder {
		fn new(width: f64, height: f64) -> Self {
			Self {
				size: Size::new(width, height),
				stroke: String::new(),
				ops: Vec::new(),
			}
		}

		fn circles(&self) -> Vec<(Point, f64, String)> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					Op::Circle(p, r, s) => Some((*p, *r, s.clone())),
					_ => None,
				})
				.collect()
		}

		fn texts(&self) -> Vec<String> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					Op::Text(t, _) => Some(t.clone()),
					_ => None,
				})
				.collect()
		}
	}

	impl Surface for Recorder {
		fn size(&self) -> Size {
			self.size
		}
		fn clear(&mut self, _color: &str) {
			self.ops.clear();
		}
		fn set_fill(&mut self, _color: &str) {}
		fn set_stroke(&mut self, color: &str) {
			self.stroke = color.to_string();
		}
		fn set_line_width(&mut self, _width: f64) {}
		fn set_font_size(&mut self, _px: f64) {}
		fn set_text_anchor(&mut self, _anchor: TextAnchor) {}
		fn circle(&mut self, centre: Point, radius: f64) {
			self.ops.push(Op::Circle(centre, radius, self.stroke.clone()));
		}
		fn line(&mut self, from: Point, to: Point) {
			self.ops.push(Op::Line(from, to));
		}
		fn text(&mut self, text: &str, at: Point) {
			self.ops.push(Op::Text(text.to_string(), at));
		}
	}

	#[test]
	fn culls_offscreen_nodes_and_their_connections() {
		let mut state = EditorState::new(EditorConfig::default());
		let a = state.graph.add_node(Point::new(100.0, 100.0), "A");
		let b = state.graph.add_node(Point::new(200.0, 100.0), "B");
		let far = state.graph.add_node(Point::new(5000.0, 100.0), "far");
		state.graph.add_connection(a, b);
		state.graph.add_connection(a, far);

		let mut surface = Recorder::new(800.0, 600.0);
		let stats = render(&state, &mut surface);

		assert_eq!(stats, FrameStats { nodes_drawn: 2, connections_drawn: 1 });
		assert!(surface.ops.contains(&Op::Line(Point::new(100.0, 100.0), Point::new(200.0, 100.0))));
		assert!(!surface.texts().contains(&"far".to_string()));
	}

	#[test]
	fn nodes_scale_with_zoom() {
		let mut state = EditorState::new(EditorConfig::default());
		state.graph.add_node(Point::new(100.0, 50.0), "A");
		state.viewport.zoom_out();
		state.viewport.zoom_out();

		let mut surface = Recorder::new(800.0, 600.0);
		render(&state, &mut surface);

		let circles = surface.circles();
		assert_eq!(circles.len(), 1);
		assert!((circles[0].0.x - 80.0).abs() < 1e-9);
		assert!((circles[0].0.y - 40.0).abs() < 1e-9);
		assert!((circles[0].1 - 24.0).abs() < 1e-9);
	}

	#[test]
	fn pending_source_is_highlighted() {
		let config = EditorConfig::default();
		let mut state = EditorState::new(config.clone());
		state.graph.add_node(Point::new(100.0, 100.0), "A");
		state.graph.add_node(Point::new(300.0, 100.0), "B");
		state.set_mode(ModeKind::Connecting);
		state.click(Point::new(100.0, 100.0), |_| None);

		let mut surface = Recorder::new(800.0, 600.0);
		render(&state, &mut surface);

		let strokes: Vec<_> = surface.circles().into_iter().map(|c| c.2).collect();
		assert_eq!(strokes, vec![config.highlight_stroke, config.node_stroke]);
	}

	#[test]
	fn overlay_reports_origin_and_tool() {
		let mut state = EditorState::new(EditorConfig::default());
		state.viewport.pan(-12.0, 4.0);
		state.set_mode(ModeKind::Deleting);

		let mut surface = Recorder::new(800.0, 600.0);
		render(&state, &mut surface);

		let texts = surface.texts();
		assert!(texts.contains(&"X: 12.0".to_string()));
		assert!(texts.contains(&"Y: -4.0".to_string()));
		assert!(texts.contains(&"Zoom: 1.0  Tool: delete".to_string()));
	}
}
