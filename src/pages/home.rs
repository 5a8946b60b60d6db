use leptos::prelude::*;

use crate::components::idea_graph::{GraphData, IdeaCanvas, IdeaNode};

/// A single root idea in the middle of the first viewport.
fn starter_graph() -> GraphData {
	let (width, height) = web_sys::window()
		.and_then(|w| Some((w.inner_width().ok()?.as_f64()?, w.inner_height().ok()?.as_f64()?)))
		.unwrap_or((800.0, 600.0));

	GraphData {
		nodes: vec![IdeaNode::new("root", width / 2.0, height / 2.0).with_radius(40.0)],
		edges: Vec::new(),
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(starter_graph);

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

			<div class="fullscreen-graph">
				<IdeaCanvas data=graph_data fullscreen=true />
				<div class="graph-overlay">
					<h1>"Idea Garden"</h1>
					<p class="subtitle">
						"Drag from a node's rim to grow a new idea. Drag a node to move it. "
						"Space-drag or middle-drag to pan, scroll to zoom. "
						"Double-click cycles an idea's stage; Delete removes the selected one."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
