mod builder;
mod component;
mod error;
mod fetch;
mod groups;
mod palette;
mod scene;
mod state;
mod svg;
mod types;

pub use component::NodeGraph;
pub use error::GraphError;
pub use fetch::{DATA_URI, load_document};
pub use types::{EdgeRecord, GraphDocument, NodeRecord};
