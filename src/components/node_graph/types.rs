use indexmap::IndexMap;
use serde::Deserialize;

/// One graph document as served by `GET /data`. Loaded once per render and
/// never mutated afterwards; the layout adapter works on its own copy of
/// the positions.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphDocument {
	pub nodes: Vec<NodeRecord>,
	pub edges: Vec<EdgeRecord>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NodeRecord {
	pub id: String,
	pub kind: String,
	pub metadata: NodeMetadata,
}

/// Label map. Insertion order matters: group discovery and the per-node
/// class string both follow it.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeMetadata {
	pub labels: IndexMap<String, String>,
}

/// Directed edge referencing nodes by id. Edges do not own nodes; ids are
/// resolved to layout indices when the simulation is built.
#[derive(Clone, Debug, Deserialize)]
pub struct EdgeRecord {
	pub source: String,
	pub target: String,
}

impl NodeRecord {
	/// The display name, from the `"name"` label entry.
	pub fn name(&self) -> &str {
		self.metadata
			.labels
			.get("name")
			.map(String::as_str)
			.unwrap_or_default()
	}
}
