use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::components::node_graph::{DATA_URI, GraphDocument, GraphError, NodeGraph, load_document};

/// Graph page: loads the document, then hands it to the visualiser. A
/// failed load never renders a partial graph; the error surfaces through
/// the boundary below.
#[component]
pub fn Home() -> impl IntoView {
	let document: RwSignal<Option<Result<GraphDocument, GraphError>>> = RwSignal::new(None);

	spawn_local(async move {
		let loaded = load_document(DATA_URI).await;
		if let Err(ref e) = loaded {
			warn!("graph load failed: {e}");
		}
		document.set(Some(loaded));
	});

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

			{move || match document.get() {
				None => Ok(view! { <p class="graph-loading">"Loading graph..."</p> }.into_any()),
				Some(Ok(doc)) => Ok(view! { <NodeGraph document=doc /> }.into_any()),
				Some(Err(e)) => Err(e),
			}}
		</ErrorBoundary>
	}
}
