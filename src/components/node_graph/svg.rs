//! SVG backend for the retained scene-graph.
//!
//! Instantiates a `GraphScene` into namespaced DOM elements and keeps
//! handles to the pieces that change after mount: node groups (position,
//! tooltip), circles (highlight colors), label groups (tooltip sizing) and
//! edge paths (geometry).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, SvgGraphicsElement};

use super::groups::GroupToken;
use super::palette::{self, DEFAULT_COLOR};
use super::scene::{self, GraphScene, SceneNode};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn instantiate(document: &Document, node: &SceneNode) -> Result<Element, JsValue> {
	let element = document.create_element_ns(Some(SVG_NS), node.shape.tag())?;
	for (name, value) in &node.attrs {
		element.set_attribute(name, value)?;
	}
	if let Some(text) = &node.text {
		element.set_text_content(Some(text));
	}
	for child in &node.children {
		element.append_child(&instantiate(document, child)?.into())?;
	}
	Ok(element)
}

/// A mounted scene with handles for per-tick and per-event updates.
pub struct MountedGraph {
	pub root: Element,
	node_groups: Vec<Element>,
	circles: Vec<Element>,
	label_groups: Vec<Element>,
	label_rects: Vec<Element>,
	edge_paths: Vec<Element>,
}

impl MountedGraph {
	pub fn mount(
		document: &Document,
		scene: &GraphScene,
		width: f64,
		height: f64,
	) -> Result<Self, JsValue> {
		let root = document.create_element_ns(Some(SVG_NS), "svg")?;
		root.set_attribute("class", "node-graph")?;
		root.set_attribute("width", &width.to_string())?;
		root.set_attribute("height", &height.to_string())?;
		root.set_attribute("viewBox", &format!("0 0 {width} {height}"))?;

		root.append_child(&instantiate(document, &scene.defs)?.into())?;

		let links = document.create_element_ns(Some(SVG_NS), "g")?;
		links.set_attribute("class", "links")?;
		links.set_attribute("fill", "none")?;
		links.set_attribute("stroke-width", "1")?;
		let mut edge_paths = Vec::with_capacity(scene.edges.len());
		for edge in &scene.edges {
			let path = instantiate(document, edge)?;
			links.append_child(&path)?;
			edge_paths.push(path);
		}
		root.append_child(&links)?;

		let nodes = document.create_element_ns(Some(SVG_NS), "g")?;
		nodes.set_attribute("class", "nodes")?;
		nodes.set_attribute("stroke-linecap", "round")?;
		nodes.set_attribute("stroke-linejoin", "round")?;
		let mut node_groups = Vec::with_capacity(scene.nodes.len());
		let mut circles = Vec::with_capacity(scene.nodes.len());
		let mut label_groups = Vec::with_capacity(scene.nodes.len());
		let mut label_rects = Vec::with_capacity(scene.nodes.len());
		for scene_node in &scene.nodes {
			let group = instantiate(document, scene_node)?;
			let circle = group
				.first_element_child()
				.ok_or_else(|| JsValue::from_str("node group without circle"))?;
			let label = circle
				.next_element_sibling()
				.ok_or_else(|| JsValue::from_str("node group without label"))?;
			let rect = label
				.first_element_child()
				.ok_or_else(|| JsValue::from_str("label group without background"))?;
			nodes.append_child(&group)?;
			node_groups.push(group);
			circles.push(circle);
			label_groups.push(label);
			label_rects.push(rect);
		}
		root.append_child(&nodes)?;

		Ok(Self {
			root,
			node_groups,
			circles,
			label_groups,
			label_rects,
			edge_paths,
		})
	}

	/// Applies the current simulation positions: node transforms and edge
	/// arc geometry. Called once per animation frame.
	pub fn sync(&self, positions: &[(f64, f64)], edges: &[(usize, usize)]) -> Result<(), JsValue> {
		for (group, &(x, y)) in self.node_groups.iter().zip(positions) {
			group.set_attribute("transform", &scene::translate(x, y))?;
		}
		for (path, &(src, tgt)) in self.edge_paths.iter().zip(edges) {
			let (sx, sy) = positions[src];
			let (tx, ty) = positions[tgt];
			path.set_attribute("d", &scene::link_arc(sx, sy, tx, ty))?;
		}
		Ok(())
	}

	/// Resets every circle to the default colors, then recolors the nodes
	/// that carry a token for the selected property.
	pub fn apply_highlight(
		&self,
		node_tokens: &[Vec<GroupToken>],
		selection: &str,
	) -> Result<(), JsValue> {
		for (circle, tokens) in self.circles.iter().zip(node_tokens) {
			let color = palette::highlight_for(tokens, selection).unwrap_or(DEFAULT_COLOR);
			circle.set_attribute("fill", color.fill)?;
			circle.set_attribute("stroke", color.stroke)?;
		}
		Ok(())
	}

	/// Shows the tooltip for a node: raises it to the top of paint order
	/// and fits the background rect to the label text.
	pub fn show_tooltip(&self, index: usize) -> Result<(), JsValue> {
		let group = &self.node_groups[index];
		if let Some(parent) = group.parent_element() {
			parent.append_child(group)?;
		}
		group.class_list().add_1("display-tooltip")?;

		let label = &self.label_groups[index];
		if let Some(graphics) = label.dyn_ref::<SvgGraphicsElement>() {
			if let Ok(bbox) = graphics.get_b_box() {
				let width = bbox.width() as f64 + 4.0;
				self.label_rects[index].set_attribute("width", &width.to_string())?;
			}
		}
		Ok(())
	}

	pub fn hide_tooltip(&self, index: usize) -> Result<(), JsValue> {
		self.node_groups[index].class_list().remove_1("display-tooltip")
	}
}
