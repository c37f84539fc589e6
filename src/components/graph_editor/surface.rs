use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::EditorError;
use super::types::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Centred horizontally and vertically on the point.
	Centre,
	/// Left-aligned, point on the baseline's bottom.
	BottomLeft,
}

/// The 2D drawing primitives the renderer needs.
pub trait Surface {
	fn size(&self) -> Size;
	fn clear(&mut self, color: &str);
	fn set_fill(&mut self, color: &str);
	fn set_stroke(&mut self, color: &str);
	fn set_line_width(&mut self, width: f64);
	fn set_font_size(&mut self, px: f64);
	fn set_text_anchor(&mut self, anchor: TextAnchor);
	/// Filled and stroked circle.
	fn circle(&mut self, centre: Point, radius: f64);
	fn line(&mut self, from: Point, to: Point);
	fn text(&mut self, text: &str, at: Point);
}

/// `Surface` backed by an HTML canvas.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: Option<HtmlCanvasElement>) -> Result<Self, EditorError> {
		let canvas = canvas.ok_or(EditorError::MissingCanvas)?;
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(EditorError::MissingContext)?;
		Ok(Self { canvas, ctx })
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> Size {
		Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn clear(&mut self, color: &str) {
		let size = self.size();
		self.ctx.set_fill_style_str(color);
		self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
	}

	fn set_fill(&mut self, color: &str) {
		self.ctx.set_fill_style_str(color);
	}

	fn set_stroke(&mut self, color: &str) {
		self.ctx.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn set_font_size(&mut self, px: f64) {
		self.ctx.set_font(&format!("{px}px Arial"));
	}

	fn set_text_anchor(&mut self, anchor: TextAnchor) {
		let (align, baseline) = match anchor {
			TextAnchor::Centre => ("center", "middle"),
			TextAnchor::BottomLeft => ("left", "bottom"),
		};
		self.ctx.set_text_align(align);
		self.ctx.set_text_baseline(baseline);
	}

	fn circle(&mut self, centre: Point, radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(centre.x, centre.y, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
		self.ctx.stroke();
	}

	fn line(&mut self, from: Point, to: Point) {
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	fn text(&mut self, text: &str, at: Point) {
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
