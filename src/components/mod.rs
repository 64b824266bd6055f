pub mod node_graph;
