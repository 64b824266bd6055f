//! Builds the graph scene from a document and its classification.

use super::groups::NodeClass;
use super::scene::{GraphScene, SceneNode, Shape};
use super::state::NODE_RADIUS;
use super::types::{GraphDocument, NodeRecord};

const EDGE_COLOR: &str = "hsl(170, 5%, 48%)";
const CIRCLE_STROKE: &str = "hsl(170, 40%, 35%)";
const CIRCLE_FILL: &str = "hsl(170, 25%, 60%)";

/// Markers don't inherit styles, so the arrow head carries its own fill.
fn arrow_marker() -> SceneNode {
	SceneNode::new(Shape::Marker)
		.attr("id", "arrow-edge")
		.attr("viewBox", "0 -5 10 10")
		.attr("refX", "38")
		.attr("refY", "0")
		.attr("markerWidth", "9")
		.attr("markerHeight", "9")
		.attr("orient", "auto")
		.child(
			SceneNode::new(Shape::Path)
				.attr("fill", EDGE_COLOR)
				.attr("d", "M0,-5L10,0L0,5"),
		)
}

fn edge_path() -> SceneNode {
	SceneNode::new(Shape::Path)
		.attr("stroke", EDGE_COLOR)
		.attr("marker-end", "url(#arrow-edge)")
}

/// Tooltip background height grows with the number of label lines.
pub fn label_bg_height(label_count: usize) -> f64 {
	32.0 + 12.0 * label_count as f64
}

fn node_label(node: &NodeRecord) -> SceneNode {
	let mut metadata = SceneNode::new(Shape::Text).attr("class", "node-metadata");
	for (property, value) in &node.metadata.labels {
		metadata = metadata.child(
			SceneNode::new(Shape::Tspan)
				.attr("x", "34")
				.attr("dy", "1.1em")
				.text(format!("{property}: {value}")),
		);
	}

	SceneNode::new(Shape::Group)
		.attr("class", "node-label")
		.child(
			SceneNode::new(Shape::Rect)
				.attr("class", "node-label-bg")
				.attr("width", "1")
				.attr("height", label_bg_height(node.metadata.labels.len()).to_string())
				.attr("fill", "none")
				.attr("x", "30")
				.attr("y", "-14"),
		)
		.child(
			SceneNode::new(Shape::Text)
				.attr("class", "node-name")
				.attr("x", "34")
				.attr("y", "2")
				.text(node.name()),
		)
		.child(metadata)
}

fn node_group(node: &NodeRecord, class: &NodeClass) -> SceneNode {
	SceneNode::new(Shape::Group)
		.attr("class", "node")
		.child(
			SceneNode::new(Shape::Circle)
				.attr("class", class.class.clone())
				.attr("stroke", CIRCLE_STROKE)
				.attr("stroke-width", "1.5")
				.attr("r", NODE_RADIUS.to_string())
				.attr("fill", CIRCLE_FILL),
		)
		.child(node_label(node))
}

/// One scene per render pass. `classes` must come from classifying
/// `document.nodes` in the same order.
pub fn build_scene(document: &GraphDocument, classes: &[NodeClass]) -> GraphScene {
	GraphScene {
		defs: SceneNode::new(Shape::Defs).child(arrow_marker()),
		edges: document.edges.iter().map(|_| edge_path()).collect(),
		nodes: document
			.nodes
			.iter()
			.zip(classes)
			.map(|(node, class)| node_group(node, class))
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::node_graph::groups::classify_nodes;
	use crate::components::node_graph::types::{EdgeRecord, NodeMetadata};
	use pretty_assertions::assert_eq;

	fn document() -> GraphDocument {
		let node = |id: &str, labels: &[(&str, &str)]| NodeRecord {
			id: id.into(),
			kind: "entity".into(),
			metadata: NodeMetadata {
				labels: labels
					.iter()
					.map(|(k, v)| (k.to_string(), v.to_string()))
					.collect(),
			},
		};
		GraphDocument {
			nodes: vec![
				node("a", &[("name", "A"), ("team", "x")]),
				node("b", &[("name", "B"), ("team", "y")]),
			],
			edges: vec![EdgeRecord {
				source: "a".into(),
				target: "b".into(),
			}],
		}
	}

	#[test]
	fn circles_carry_the_classified_class_string() {
		let doc = document();
		let (classes, _) = classify_nodes(&doc.nodes);
		let scene = build_scene(&doc, &classes);
		let circle_class = |i: usize| scene.nodes[i].children[0].get_attr("class").unwrap();
		assert_eq!(circle_class(0), "node-circle group-team-0");
		assert_eq!(circle_class(1), "node-circle group-team-1");
	}

	#[test]
	fn edges_point_at_the_arrow_marker() {
		let doc = document();
		let (classes, _) = classify_nodes(&doc.nodes);
		let scene = build_scene(&doc, &classes);
		assert_eq!(scene.edges.len(), 1);
		assert_eq!(
			scene.edges[0].get_attr("marker-end"),
			Some("url(#arrow-edge)")
		);
		assert_eq!(scene.defs.children[0].get_attr("id"), Some("arrow-edge"));
	}

	#[test]
	fn label_background_scales_with_label_count() {
		assert_eq!(label_bg_height(1), 44.0);
		assert_eq!(label_bg_height(3), 68.0);

		let doc = document();
		let (classes, _) = classify_nodes(&doc.nodes);
		let scene = build_scene(&doc, &classes);
		// node a has two labels: name + team
		let rect = &scene.nodes[0].children[1].children[0];
		assert_eq!(rect.get_attr("height"), Some("56"));
	}

	#[test]
	fn labels_render_name_and_metadata_lines() {
		let doc = document();
		let (classes, _) = classify_nodes(&doc.nodes);
		let scene = build_scene(&doc, &classes);
		let label = &scene.nodes[0].children[1];
		let name = &label.children[1];
		assert_eq!(name.text.as_deref(), Some("A"));
		let lines: Vec<&str> = label.children[2]
			.children
			.iter()
			.map(|tspan| tspan.text.as_deref().unwrap())
			.collect();
		assert_eq!(lines, vec!["name: A", "team: x"]);
	}
}
