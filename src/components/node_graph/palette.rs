//! Highlight palette for the group selector.

use super::groups::GroupToken;

/// Fill/stroke pair applied to a node circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightColor {
	pub fill: &'static str,
	pub stroke: &'static str,
}

/// Colors every circle is reset to before a highlight is applied.
pub const DEFAULT_COLOR: HighlightColor = HighlightColor {
	fill: "hsl(170, 25%, 60%)",
	stroke: "hsl(170, 50%, 35%)",
};

/// Fixed highlight palette. Groups with more distinct values than palette
/// entries wrap back to the start, so colors repeat rather than run out.
pub const PALETTE: [HighlightColor; 10] = [
	HighlightColor {
		fill: "hsl(260, 25%, 60%)",
		stroke: "hsl(260, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(350, 25%, 60%)",
		stroke: "hsl(350, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(80, 25%, 60%)",
		stroke: "hsl(80, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(200, 25%, 60%)",
		stroke: "hsl(200, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(290, 25%, 60%)",
		stroke: "hsl(290, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(20, 25%, 60%)",
		stroke: "hsl(20, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(110, 25%, 60%)",
		stroke: "hsl(110, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(230, 25%, 60%)",
		stroke: "hsl(230, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(320, 25%, 60%)",
		stroke: "hsl(320, 50%, 35%)",
	},
	HighlightColor {
		fill: "hsl(50, 25%, 60%)",
		stroke: "hsl(50, 50%, 35%)",
	},
];

/// Palette entry for a group index, wrapping past the palette length.
pub fn color_for(index: usize) -> HighlightColor {
	PALETTE[index % PALETTE.len()]
}

/// Resolves the highlight for one node: the color of its token under the
/// selected property, or `None` when no property is selected or the node
/// carries no such label.
pub fn highlight_for(tokens: &[GroupToken], selection: &str) -> Option<HighlightColor> {
	if selection.is_empty() {
		return None;
	}
	tokens
		.iter()
		.find(|token| token.property == selection)
		.map(|token| color_for(token.index))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn token(property: &str, index: usize) -> GroupToken {
		GroupToken {
			property: property.into(),
			index,
		}
	}

	#[test]
	fn first_indices_map_straight_into_the_palette() {
		assert_eq!(color_for(0), PALETTE[0]);
		assert_eq!(color_for(1), PALETTE[1]);
		assert_eq!(color_for(9), PALETTE[9]);
	}

	#[test]
	fn eleventh_value_wraps_to_the_first_color() {
		// A group with 11 distinct values reuses the palette from the top.
		assert_eq!(color_for(10), PALETTE[0]);
		assert_eq!(color_for(11), PALETTE[1]);
		assert_eq!(color_for(25), PALETTE[5]);
	}

	#[test]
	fn empty_selection_highlights_nothing() {
		let tokens = vec![token("team", 0)];
		assert_eq!(highlight_for(&tokens, ""), None);
	}

	#[test]
	fn selection_picks_the_matching_token() {
		let tokens = vec![token("zone", 2), token("team", 1)];
		assert_eq!(highlight_for(&tokens, "team"), Some(PALETTE[1]));
		assert_eq!(highlight_for(&tokens, "zone"), Some(PALETTE[2]));
		assert_eq!(highlight_for(&tokens, "owner"), None);
	}
}
