use leptos::prelude::*;

use crate::components::graph_editor::GraphEditorCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-editor">
				<GraphEditorCanvas fullscreen=true />
				<p class="subtitle">
					"Pick a tool, then click the canvas. Drag to pan. Scroll to zoom. Escape drops the tool."
				</p>
			</div>
		</ErrorBoundary>
	}
}
