use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window};

use super::config::EditorConfig;
use super::export::Export;
use super::mode::ModeKind;
use super::state::EditorState;
use super::surface::CanvasSurface;
use super::types::Point;

// Share of the window the canvas takes in fullscreen mode, leaving room for the toolbar.
const FULLSCREEN_WIDTH: f64 = 0.9725;
const FULLSCREEN_HEIGHT: f64 = 0.85;

type Shared<T> = Rc<RefCell<Option<T>>>;

#[component]
pub fn GraphEditorCanvas(
	#[prop(optional)] config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let active_tool = RwSignal::new(ModeKind::Idle);
	let state: Shared<EditorState> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let keydown_cb: Shared<Closure<dyn FnMut(KeyboardEvent)>> = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (state_init, animate_init, resize_cb_init, keydown_cb_init, frame_init) = (
		state.clone(),
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
		frame_id.clone(),
	);

	Effect::new(move |_| {
		let canvas: Option<HtmlCanvasElement> = canvas_ref.get().map(Into::into);
		let mut surface = match CanvasSurface::new(canvas) {
			Ok(surface) => surface,
			Err(err) => {
				error!("graph editor cannot start: {err}");
				return;
			}
		};
		let Some(window) = web_sys::window() else {
			error!("graph editor cannot start: no window");
			return;
		};
		let canvas = surface.canvas().clone();
		let (w, h) = canvas_size(&window, &canvas, fullscreen, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		*state_init.borrow_mut() = Some(EditorState::new(config.clone()));

		if fullscreen {
			let canvas_resize = canvas.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = canvas_size(&win, &canvas_resize, true, None, None);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let state_key = state_init.clone();
		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() != "Escape" {
				return;
			}
			if let Some(ref mut s) = *state_key.borrow_mut() {
				s.cancel();
				active_tool.set(s.mode.kind());
			}
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, frame_inner) =
			(state_init.clone(), animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// A handler may still hold the state mutably; skip this frame then.
			if let Ok(state) = state_anim.try_borrow() {
				if let Some(ref s) = *state {
					s.render(&mut surface);
				}
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				frame_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			frame_init.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let teardown = SendWrapper::new({
		let (state, animate, resize_cb, keydown_cb, frame_id) = (
			state.clone(),
			animate.clone(),
			resize_cb.clone(),
			keydown_cb.clone(),
			frame_id.clone(),
		);
		move || {
			if let Some(win) = web_sys::window() {
				if let Some(id) = frame_id.take() {
					let _ = win.cancel_animation_frame(id);
				}
				if let Some(cb) = resize_cb.borrow_mut().take() {
					let _ = win
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				if let Some(cb) = keydown_cb.borrow_mut().take() {
					let _ = win
						.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
				}
			}
			animate.borrow_mut().take();
			state.borrow_mut().take();
			debug!("graph editor unmounted");
		}
	});
	on_cleanup(move || (teardown.take())());

	let select_tool = {
		let state = state.clone();
		move |kind: ModeKind| {
			if let Some(ref mut s) = *state.borrow_mut() {
				s.set_mode(kind);
				active_tool.set(s.mode.kind());
			}
		}
	};

	let state_save = state.clone();
	let on_save = move |_: MouseEvent| {
		if let Some(ref s) = *state_save.borrow() {
			if let Err(err) = download(&s.export()) {
				warn!("export failed: {err:?}");
			}
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.stop_propagation();
		let Some(p) = cursor_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(p);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = cursor_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(p);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_cl = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(p) = cursor_position(canvas_ref, &ev) else {
			return;
		};
		// The prompt is modal, so no borrow is held across it.
		let suggestion = state_cl
			.borrow()
			.as_ref()
			.and_then(EditorState::name_suggestion);
		let name = suggestion.and_then(|suggested| prompt_name(&suggested));
		if let Some(ref mut s) = *state_cl.borrow_mut() {
			s.click(p, |_| name);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(ev.delta_y());
		}
	};

	let tool_button = move |kind: ModeKind, label: &'static str| {
		let select_tool = select_tool.clone();
		view! {
			<button
				class="menu-item"
				class:active=move || active_tool.get() == kind
				on:click=move |_| select_tool(kind)
			>
				{label}
			</button>
		}
	};

	view! {
		<nav class="menu">
			{tool_button(ModeKind::Placing, "Draw")}
			{tool_button(ModeKind::Connecting, "Connect")}
			{tool_button(ModeKind::Disconnecting, "Disconnect")}
			{tool_button(ModeKind::Moving, "Move node")}
			{tool_button(ModeKind::Deleting, "Delete")}
			<button class="menu-item" on:click=on_save>"Save as CSV"</button>
		</nav>
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			on:wheel=on_wheel
			style="display: block; border: thick solid black; margin-top: 0.5%;"
		/>
	}
}

fn canvas_size(
	window: &Window,
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
	if fullscreen {
		(
			inner(window.inner_width()).unwrap_or(800.0) * FULLSCREEN_WIDTH,
			inner(window.inner_height()).unwrap_or(600.0) * FULLSCREEN_HEIGHT,
		)
	} else {
		(
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		)
	}
}

fn cursor_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn prompt_name(suggestion: &str) -> Option<String> {
	web_sys::window()?
		.prompt_with_message_and_default("Enter an ID for the node", suggestion)
		.ok()
		.flatten()
}

fn download(export: &Export) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(&export.text));
	let options = web_sys::BlobPropertyBag::new();
	options.set_type("text/csv");
	let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = web_sys::Url::create_object_url_with_blob(&blob)?;

	let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(&export.filename);
	anchor.click();
	web_sys::Url::revoke_object_url(&url)
}
