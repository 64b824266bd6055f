//! Label-group discovery and node classification.
//!
//! A single forward pass over the document's nodes discovers every label
//! property (except `"name"`) and the distinct values it takes, in
//! first-seen order. Each value gets a stable zero-based index within its
//! property, which drives both the per-node CSS class string and the
//! highlight palette later on.

use std::collections::HashMap;

use super::types::NodeRecord;

/// Base class carried by every node circle.
pub const BASE_CLASS: &str = "node-circle";

/// Distinct values of one label property, in first-seen order. Values are
/// only ever appended, so an index handed out during classification stays
/// valid for the whole render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGroup {
	pub property: String,
	pub values: Vec<String>,
}

/// One `group-<property>-<index>` token emitted for a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupToken {
	pub property: String,
	pub index: usize,
}

impl GroupToken {
	pub fn css_class(&self) -> String {
		format!("group-{}-{}", self.property, self.index)
	}
}

/// Classification result for one node: the full class string plus the
/// structured tokens it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeClass {
	pub class: String,
	pub tokens: Vec<GroupToken>,
}

/// Accumulates label groups while nodes are classified. Owned by one
/// render invocation; no state survives past it.
#[derive(Debug, Default)]
pub struct LabelGroupIndexer {
	groups: Vec<LabelGroup>,
	by_property: HashMap<String, usize>,
}

impl LabelGroupIndexer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the group index for `value` under `property`, creating the
	/// group or appending the value on first encounter.
	pub fn assign(&mut self, property: &str, value: &str) -> usize {
		match self.by_property.get(property) {
			Some(&slot) => {
				let group = &mut self.groups[slot];
				match group.values.iter().position(|v| v == value) {
					Some(index) => index,
					None => {
						group.values.push(value.to_owned());
						group.values.len() - 1
					}
				}
			}
			None => {
				self.by_property
					.insert(property.to_owned(), self.groups.len());
				self.groups.push(LabelGroup {
					property: property.to_owned(),
					values: vec![value.to_owned()],
				});
				0
			}
		}
	}

	/// Discovered groups, in the order their properties were first seen.
	pub fn groups(&self) -> &[LabelGroup] {
		&self.groups
	}

	pub fn group(&self, property: &str) -> Option<&LabelGroup> {
		self.by_property.get(property).map(|&slot| &self.groups[slot])
	}
}

/// Classifies every node in document order. The class string is
/// `"node-circle"` followed by one `group-<property>-<index>` token per
/// non-`name` label, in label-map iteration order.
pub fn classify_nodes(nodes: &[NodeRecord]) -> (Vec<NodeClass>, LabelGroupIndexer) {
	let mut indexer = LabelGroupIndexer::new();
	let classes = nodes
		.iter()
		.map(|node| {
			let mut class = String::from(BASE_CLASS);
			let mut tokens = Vec::new();
			for (property, value) in &node.metadata.labels {
				if property == "name" {
					continue;
				}
				let index = indexer.assign(property, value);
				let token = GroupToken {
					property: property.clone(),
					index,
				};
				class.push(' ');
				class.push_str(&token.css_class());
				tokens.push(token);
			}
			NodeClass { class, tokens }
		})
		.collect();
	(classes, indexer)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::node_graph::types::NodeMetadata;
	use pretty_assertions::assert_eq;

	fn node(id: &str, labels: &[(&str, &str)]) -> NodeRecord {
		NodeRecord {
			id: id.into(),
			kind: "entity".into(),
			metadata: NodeMetadata {
				labels: labels
					.iter()
					.map(|(k, v)| (k.to_string(), v.to_string()))
					.collect(),
			},
		}
	}

	#[test]
	fn assigns_first_seen_indices() {
		let nodes = vec![
			node("a", &[("name", "A"), ("team", "x")]),
			node("b", &[("name", "B"), ("team", "y")]),
			node("c", &[("name", "C"), ("team", "x")]),
		];
		let (classes, indexer) = classify_nodes(&nodes);
		let strings: Vec<&str> = classes.iter().map(|c| c.class.as_str()).collect();
		assert_eq!(
			strings,
			vec![
				"node-circle group-team-0",
				"node-circle group-team-1",
				"node-circle group-team-0",
			]
		);
		assert_eq!(
			indexer.groups(),
			&[LabelGroup {
				property: "team".into(),
				values: vec!["x".into(), "y".into()],
			}]
		);
	}

	#[test]
	fn name_only_node_gets_the_base_class() {
		let nodes = vec![node("solo", &[("name", "Solo")])];
		let (classes, indexer) = classify_nodes(&nodes);
		assert_eq!(classes[0].class, "node-circle");
		assert!(classes[0].tokens.is_empty());
		assert!(indexer.groups().is_empty());
	}

	#[test]
	fn tokens_follow_label_map_order() {
		let nodes = vec![node("a", &[("name", "A"), ("zone", "eu"), ("team", "x")])];
		let (classes, _) = classify_nodes(&nodes);
		assert_eq!(classes[0].class, "node-circle group-zone-0 group-team-0");
	}

	#[test]
	fn discovery_order_follows_document_order() {
		let nodes = vec![
			node("a", &[("name", "A"), ("team", "x")]),
			node("b", &[("name", "B"), ("zone", "eu"), ("team", "y")]),
		];
		let (_, indexer) = classify_nodes(&nodes);
		let properties: Vec<&str> = indexer
			.groups()
			.iter()
			.map(|g| g.property.as_str())
			.collect();
		assert_eq!(properties, vec!["team", "zone"]);
	}

	#[test]
	fn indices_are_stable_once_assigned() {
		let mut indexer = LabelGroupIndexer::new();
		assert_eq!(indexer.assign("team", "x"), 0);
		assert_eq!(indexer.assign("team", "y"), 1);
		assert_eq!(indexer.assign("team", "x"), 0);
		assert_eq!(indexer.assign("team", "z"), 2);
		assert_eq!(indexer.assign("team", "y"), 1);
		assert_eq!(
			indexer.group("team").unwrap().values,
			vec!["x", "y", "z"]
		);
	}

	#[test]
	fn classification_is_idempotent() {
		let nodes = vec![
			node("a", &[("name", "A"), ("team", "x"), ("zone", "eu")]),
			node("b", &[("name", "B"), ("team", "y")]),
		];
		let (first_classes, first_indexer) = classify_nodes(&nodes);
		let (second_classes, second_indexer) = classify_nodes(&nodes);
		assert_eq!(first_classes, second_classes);
		assert_eq!(first_indexer.groups(), second_indexer.groups());
	}
}
