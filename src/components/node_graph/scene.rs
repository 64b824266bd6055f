//! Retained scene-graph: a tree of typed drawables with attribute maps.
//!
//! The tree is plain data with no DOM types in it, so scene construction
//! can be exercised natively; `svg.rs` materialises it in the browser.

/// Drawable kinds the graph scene uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Svg,
	Defs,
	Marker,
	Group,
	Circle,
	Path,
	Rect,
	Text,
	Tspan,
}

impl Shape {
	pub fn tag(self) -> &'static str {
		match self {
			Shape::Svg => "svg",
			Shape::Defs => "defs",
			Shape::Marker => "marker",
			Shape::Group => "g",
			Shape::Circle => "circle",
			Shape::Path => "path",
			Shape::Rect => "rect",
			Shape::Text => "text",
			Shape::Tspan => "tspan",
		}
	}
}

/// One drawable: shape, attributes in set order, optional text content,
/// children.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub shape: Shape,
	pub attrs: Vec<(String, String)>,
	pub text: Option<String>,
	pub children: Vec<SceneNode>,
}

impl SceneNode {
	pub fn new(shape: Shape) -> Self {
		Self {
			shape,
			attrs: Vec::new(),
			text: None,
			children: Vec::new(),
		}
	}

	pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attrs.push((name.to_owned(), value.into()));
		self
	}

	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	pub fn child(mut self, child: SceneNode) -> Self {
		self.children.push(child);
		self
	}

	/// Last value set for an attribute, if any.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.rev()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}
}

/// The full scene for one graph document: arrow-marker defs, one path per
/// edge, one group per node. Kept structured (rather than a single tree)
/// so the backend can retain per-node and per-edge handles.
#[derive(Clone, Debug)]
pub struct GraphScene {
	pub defs: SceneNode,
	pub edges: Vec<SceneNode>,
	pub nodes: Vec<SceneNode>,
}

/// Arc path between two node centers, in the form the edge paths use on
/// every simulation tick.
pub fn link_arc(sx: f64, sy: f64, tx: f64, ty: f64) -> String {
	format!("M{sx},{sy}A0,0 0 0,1 {tx},{ty}")
}

/// Transform applied to a node group each tick.
pub fn translate(x: f64, y: f64) -> String {
	format!("translate({x},{y})")
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn attrs_keep_set_order_and_last_value_wins() {
		let node = SceneNode::new(Shape::Circle)
			.attr("r", "25")
			.attr("fill", "none")
			.attr("fill", "red");
		assert_eq!(node.get_attr("r"), Some("25"));
		assert_eq!(node.get_attr("fill"), Some("red"));
		assert_eq!(node.get_attr("stroke"), None);
	}

	#[test]
	fn link_arc_matches_the_edge_path_format() {
		assert_eq!(link_arc(1.0, 2.0, 3.5, 4.0), "M1,2A0,0 0 0,1 3.5,4");
	}

	#[test]
	fn translate_formats_a_transform() {
		assert_eq!(translate(10.0, 20.5), "translate(10,20.5)");
	}
}
