/// Node radius in logical units. Hit squares and culling margins derive from it.
pub const NODE_RADIUS: f64 = 30.0;
pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;
/// Label font size at scale 1.0.
pub const BASE_FONT_SIZE: f64 = 15.0;

/// Styling and export settings for the editor.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub background: String,
	pub node_fill: String,
	pub node_stroke: String,
	pub highlight_stroke: String,
	pub connection_stroke: String,
	pub overlay_color: String,
	pub node_line_width: f64,
	pub connection_line_width: f64,
	pub initial_scale: f64,
	pub export_filename: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			background: "#ffffff".into(),
			node_fill: "rgba(207, 102, 156, 0.4)".into(),
			node_stroke: "rgba(88, 88, 88, 1)".into(),
			highlight_stroke: "rgba(46, 134, 222, 1)".into(),
			connection_stroke: "rgba(88, 88, 88, 0.8)".into(),
			overlay_color: "black".into(),
			node_line_width: 3.0,
			connection_line_width: 2.0,
			initial_scale: 1.0,
			export_filename: "graph.csv".into(),
		}
	}
}
