//! Layout engine — positions, visible nodes and edges for a hierarchy.

pub mod engine;
pub mod graph;
pub mod types;

pub use engine::layout;
pub use graph::DiagramGraph;
pub use types::{LayoutEdge, LayoutNode, LayoutResult, Point};
