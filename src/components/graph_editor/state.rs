use log::{debug, info};

use super::config::EditorConfig;
use super::export::{Export, to_adjacency_text};
use super::graph::Graph;
use super::hit_test::test_hit;
use super::mode::{Mode, ModeKind};
use super::render::{self, FrameStats};
use super::surface::Surface;
use super::types::{NodeId, Point};
use super::viewport::Viewport;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub last: Point,
}

/// Everything the editor knows between events. Each handler runs to
/// completion and the caller redraws afterwards.
pub struct EditorState {
	pub graph: Graph,
	pub viewport: Viewport,
	pub mode: Mode,
	pub drag: DragState,
	pub config: EditorConfig,
}

impl EditorState {
	pub fn new(config: EditorConfig) -> Self {
		Self {
			graph: Graph::new(),
			viewport: Viewport::new(Point::default(), config.initial_scale),
			mode: Mode::Idle,
			drag: DragState::default(),
			config,
		}
	}

	/// Toolbar selection. Always resets in-progress selections.
	pub fn set_mode(&mut self, kind: ModeKind) {
		self.mode = self.mode.transition(kind);
		self.drag.active = false;
		info!("tool: {}", self.mode.kind());
	}

	pub fn cancel(&mut self) {
		self.mode = Mode::Idle;
		self.drag.active = false;
		info!("tool: {}", self.mode.kind());
	}

	pub fn node_at(&self, screen: Point) -> Option<NodeId> {
		test_hit(&self.graph, &self.viewport, screen)
	}

	pub fn pointer_down(&mut self, screen: Point) {
		self.drag.active = true;
		self.drag.last = screen;
		if let Mode::Moving { .. } = self.mode {
			let hit = self.node_at(screen);
			if let Some(id) = hit {
				self.graph.raise(id);
			}
			self.mode = Mode::Moving { node: hit };
		}
	}

	pub fn pointer_move(&mut self, screen: Point) {
		if !self.drag.active {
			return;
		}
		match self.mode {
			Mode::Idle => {
				self.viewport
					.pan(screen.x - self.drag.last.x, screen.y - self.drag.last.y);
			}
			Mode::Moving { node: Some(id) } => {
				self.graph.move_node(id, self.viewport.to_logical(screen));
			}
			_ => {}
		}
		self.drag.last = screen;
	}

	pub fn pointer_up(&mut self) {
		self.drag.active = false;
		if let Mode::Moving { node: Some(_) } = self.mode {
			self.mode = Mode::Moving { node: None };
		}
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
	}

	/// Default name offered when the next click would place a node.
	pub fn name_suggestion(&self) -> Option<String> {
		(self.mode.kind() == ModeKind::Placing).then(|| (self.graph.len() + 1).to_string())
	}

	/// Applies a click for the active tool. `prompt` is asked for a node
	/// name only when placing; `None` or an empty name places nothing.
	pub fn click(&mut self, screen: Point, prompt: impl FnOnce(&str) -> Option<String>) {
		match self.mode {
			Mode::Placing => {
				let suggestion = (self.graph.len() + 1).to_string();
				let Some(name) = prompt(suggestion.as_str()).filter(|n| !n.is_empty()) else {
					debug!("placement cancelled");
					return;
				};
				let position = self.viewport.to_logical(screen);
				let id = self.graph.add_node(position, name);
				info!("placed {id} at ({:.1}, {:.1})", position.x, position.y);
			}
			Mode::Connecting { source } => {
				let Some(hit) = self.node_at(screen) else {
					return;
				};
				match source {
					None => self.mode = Mode::Connecting { source: Some(hit) },
					Some(src) => {
						if let Some(c) = self.graph.add_connection(src, hit) {
							info!("connected {src} -> {hit} ({c})");
						}
						self.mode = Mode::Connecting { source: None };
					}
				}
			}
			Mode::Disconnecting { source } => {
				let Some(hit) = self.node_at(screen) else {
					return;
				};
				match source {
					None => self.mode = Mode::Disconnecting { source: Some(hit) },
					Some(src) => {
						if self.graph.disconnect(src, hit) {
							info!("disconnected {src} and {hit}");
						} else {
							debug!("{src} and {hit} were not connected");
						}
						self.mode = Mode::Disconnecting { source: None };
					}
				}
			}
			Mode::Deleting => {
				if let Some(hit) = self.node_at(screen) {
					self.graph.delete_node(hit);
					info!("deleted {hit}");
				}
			}
			Mode::Idle | Mode::Moving { .. } => {}
		}
	}

	/// Scroll up zooms in, scroll down zooms out, one step per event.
	pub fn wheel(&mut self, delta_y: f64) {
		if delta_y < 0.0 {
			self.viewport.zoom_in();
		} else if delta_y > 0.0 {
			self.viewport.zoom_out();
		}
	}

	pub fn export(&self) -> Export {
		let text = to_adjacency_text(&self.graph);
		info!(
			"exporting {} connections as {}",
			self.graph.connection_count(),
			self.config.export_filename
		);
		Export {
			text,
			filename: self.config.export_filename.clone(),
		}
	}

	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
		render::render(self, surface)
	}
}
