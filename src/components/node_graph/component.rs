use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::HtmlDivElement;

use super::builder;
use super::groups::{GroupToken, classify_nodes};
use super::state::LayoutState;
use super::svg::MountedGraph;
use super::types::GraphDocument;

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 800.0;

/// Interactive force-directed graph. Classifies the document's nodes by
/// their label properties, mounts the SVG scene, runs the simulation tick
/// loop and wires drag, tooltip and highlight interactions.
#[component]
pub fn NodeGraph(
	document: GraphDocument,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let (classes, indexer) = classify_nodes(&document.nodes);
	let tokens: Rc<Vec<Vec<GroupToken>>> =
		Rc::new(classes.iter().map(|c| c.tokens.clone()).collect());

	let container_ref = NodeRef::<leptos::html::Div>::new();
	let state: Rc<RefCell<Option<LayoutState>>> = Rc::new(RefCell::new(None));
	let mounted: Rc<RefCell<Option<MountedGraph>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let hovered: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

	let (state_init, mounted_init, animate_init, running_init) = (
		state.clone(),
		mounted.clone(),
		animate.clone(),
		running.clone(),
	);
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		let container: HtmlDivElement = container.into();

		let w = width.unwrap_or_else(|| {
			let cw = container.client_width() as f64;
			if cw > 0.0 { cw } else { DEFAULT_WIDTH }
		});
		let h = height.unwrap_or(DEFAULT_HEIGHT);

		let dom = web_sys::window().unwrap().document().unwrap();
		let scene = builder::build_scene(&document, &classes);
		let graph = MountedGraph::mount(&dom, &scene, w, h).unwrap();
		container.append_child(&graph.root).unwrap();
		info!(
			"mounted graph: {} nodes, {} edges",
			document.nodes.len(),
			document.edges.len()
		);

		*state_init.borrow_mut() = Some(LayoutState::new(&document, w, h));
		*mounted_init.borrow_mut() = Some(graph);

		let (state_anim, mounted_anim, animate_inner, running_anim) = (
			state_init.clone(),
			mounted_init.clone(),
			animate_init.clone(),
			running_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.load(Ordering::Relaxed) {
				debug!("graph invalidated, stopping simulation");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				if let Some(ref g) = *mounted_anim.borrow() {
					let _ = g.sync(&s.positions(), s.edges());
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// The invalidation signal: once the component is removed the next
	// animation frame stops the tick loop.
	let running_cleanup = running.clone();
	on_cleanup(move || running_cleanup.store(false, Ordering::Relaxed));

	let cursor_position = move |ev: &web_sys::MouseEvent| {
		let container: HtmlDivElement = container_ref.get().unwrap().into();
		let rect = container.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: web_sys::MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(index) = s.node_at_position(x, y) {
				s.begin_drag(index);
			}
		}
	};

	let (state_mm, mounted_mm, hovered_mm) = (state.clone(), mounted.clone(), hovered.clone());
	let on_mousemove = move |ev: web_sys::MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
				return;
			}
			let hit = s.node_at_position(x, y);
			if hit != hovered_mm.get() {
				if let Some(ref g) = *mounted_mm.borrow() {
					if let Some(old) = hovered_mm.get() {
						let _ = g.hide_tooltip(old);
					}
					if let Some(new) = hit {
						let _ = g.show_tooltip(new);
					}
				}
				hovered_mm.set(hit);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: web_sys::MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let (state_ml, mounted_ml, hovered_ml) = (state.clone(), mounted.clone(), hovered.clone());
	let on_mouseleave = move |_: web_sys::MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
		}
		if let Some(old) = hovered_ml.take() {
			if let Some(ref g) = *mounted_ml.borrow() {
				let _ = g.hide_tooltip(old);
			}
		}
	};

	let mounted_sel = mounted.clone();
	let on_select = move |ev: web_sys::Event| {
		let selection = event_target_value(&ev);
		debug!("highlight selection: {selection:?}");
		if let Some(ref g) = *mounted_sel.borrow() {
			let _ = g.apply_highlight(&tokens, &selection);
		}
	};

	let options = indexer
		.groups()
		.iter()
		.map(|group| {
			let property = group.property.clone();
			view! { <option value=property.clone()>{property.clone()}</option> }
		})
		.collect_view();

	view! {
		<div
			class="node-graph-container"
			node_ref=container_ref
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		></div>
		<form class="group-select" id="group-select-form">
			<label class="group-select__label" for="group-select">
				"Highlight nodes by label"
			</label>
			<select
				class="group-select__input"
				id="group-select"
				name="group-select"
				on:change=on_select
			>
				<option value="">"Select a label"</option>
				{options}
			</select>
		</form>
	}
}
