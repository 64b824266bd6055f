use thiserror::Error;

/// Failure loading the graph document. Any variant aborts the render; the
/// page surfaces it through an `ErrorBoundary` instead of drawing a
/// partial graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	#[error("graph request failed: {0}")]
	Network(String),
	#[error("graph endpoint returned status {0}")]
	Status(u16),
	#[error("invalid graph document: {0}")]
	Parse(String),
}
