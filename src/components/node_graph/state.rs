use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::GraphDocument;

/// Node circle radius, also the clamp margin for layout positions.
pub const NODE_RADIUS: f64 = 25.0;

/// Document index of a layout node, carried through the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeSlot {
	pub doc_index: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
}

/// Adapter over the external force simulation. Owns a copy of the node
/// positions; the source document is never mutated.
pub struct LayoutState {
	graph: ForceGraph<NodeSlot, ()>,
	order: Vec<DefaultNodeIdx>,
	edges: Vec<(usize, usize)>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
}

impl LayoutState {
	pub fn new(document: &GraphDocument, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_doc = HashMap::new();
		let mut order = Vec::with_capacity(document.nodes.len());

		for (i, node) in document.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / document.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeSlot { doc_index: i },
			});
			order.push(idx);
			id_to_doc.insert(node.id.clone(), i);
		}

		// Unresolvable edges are dropped rather than failing the render.
		let mut edges = Vec::new();
		for edge in &document.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_doc.get(&edge.source), id_to_doc.get(&edge.target))
			{
				graph.add_edge(order[src], order[tgt], EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			order,
			edges,
			drag: DragState::default(),
			width,
			height,
		}
	}

	/// Advances the simulation and clamps every node into the viewport,
	/// leaving a node-radius margin on all sides.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let (min_x, max_x) = (NODE_RADIUS as f32, (self.width - NODE_RADIUS) as f32);
		let (min_y, max_y) = (NODE_RADIUS as f32, (self.height - NODE_RADIUS) as f32);
		self.graph.visit_nodes_mut(|node| {
			node.data.x = node.data.x.clamp(min_x, max_x.max(min_x));
			node.data.y = node.data.y.clamp(min_y, max_y.max(min_y));
		});
	}

	/// Current positions in document order.
	pub fn positions(&self) -> Vec<(f64, f64)> {
		let mut positions = vec![(0.0, 0.0); self.order.len()];
		self.graph.visit_nodes(|node| {
			positions[node.data.user_data.doc_index] = (node.x() as f64, node.y() as f64);
		});
		positions
	}

	/// Resolved edges as document-order index pairs.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	pub fn node_count(&self) -> usize {
		self.order.len()
	}

	/// Topmost node whose circle covers the given point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < NODE_RADIUS {
				found = Some(node.data.user_data.doc_index);
			}
		});
		found
	}

	/// Pins a node so layout forces stop moving it while it is dragged.
	pub fn begin_drag(&mut self, doc_index: usize) {
		self.drag = DragState {
			active: true,
			node: Some(doc_index),
		};
		self.set_anchor(doc_index, true);
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(doc_index) = self.drag.node else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.doc_index == doc_index {
				node.data.x = x as f32;
				node.data.y = y as f32;
			}
		});
	}

	/// Releases the dragged node back to the simulation.
	pub fn end_drag(&mut self) {
		if let Some(doc_index) = self.drag.node.take() {
			self.set_anchor(doc_index, false);
		}
		self.drag.active = false;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn set_anchor(&mut self, doc_index: usize, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.doc_index == doc_index {
				node.data.is_anchor = anchored;
			}
		});
	}

	#[cfg(test)]
	fn is_anchored(&self, doc_index: usize) -> bool {
		let mut anchored = false;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.doc_index == doc_index {
				anchored = node.data.is_anchor;
			}
		});
		anchored
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::node_graph::types::{EdgeRecord, NodeMetadata, NodeRecord};
	use pretty_assertions::assert_eq;

	fn document(node_ids: &[&str], edges: &[(&str, &str)]) -> GraphDocument {
		GraphDocument {
			nodes: node_ids
				.iter()
				.map(|id| NodeRecord {
					id: id.to_string(),
					kind: "entity".into(),
					metadata: NodeMetadata {
						labels: [("name".to_string(), id.to_string())].into_iter().collect(),
					},
				})
				.collect(),
			edges: edges
				.iter()
				.map(|(s, t)| EdgeRecord {
					source: s.to_string(),
					target: t.to_string(),
				})
				.collect(),
		}
	}

	#[test]
	fn resolves_edges_by_id_and_skips_unknown_references() {
		let doc = document(&["a", "b", "c"], &[("a", "b"), ("b", "ghost"), ("c", "a")]);
		let state = LayoutState::new(&doc, 800.0, 600.0);
		assert_eq!(state.node_count(), 3);
		assert_eq!(state.edges(), &[(0, 1), (2, 0)]);
	}

	#[test]
	fn tick_keeps_positions_inside_the_viewport() {
		let doc = document(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
		let mut state = LayoutState::new(&doc, 120.0, 120.0);
		for _ in 0..50 {
			state.tick(0.016);
		}
		for (x, y) in state.positions() {
			assert!((NODE_RADIUS..=120.0 - NODE_RADIUS).contains(&x), "x = {x}");
			assert!((NODE_RADIUS..=120.0 - NODE_RADIUS).contains(&y), "y = {y}");
		}
	}

	#[test]
	fn drag_pins_a_node_and_release_unpins_it() {
		let doc = document(&["a", "b"], &[("a", "b")]);
		let mut state = LayoutState::new(&doc, 800.0, 600.0);

		state.begin_drag(1);
		assert!(state.drag.active);
		assert!(state.is_anchored(1));

		state.drag_to(300.0, 200.0);
		let (x, y) = state.positions()[1];
		assert_eq!((x, y), (300.0, 200.0));

		state.end_drag();
		assert!(!state.drag.active);
		assert!(!state.is_anchored(1));
	}

	#[test]
	fn hit_test_finds_a_node_within_its_radius() {
		let doc = document(&["a"], &[]);
		let mut state = LayoutState::new(&doc, 800.0, 600.0);
		state.begin_drag(0);
		state.drag_to(100.0, 100.0);
		state.end_drag();

		assert_eq!(state.node_at_position(110.0, 100.0), Some(0));
		assert_eq!(state.node_at_position(100.0, 140.0), None);
	}
}
