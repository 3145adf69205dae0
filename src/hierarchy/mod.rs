//! Hierarchy tree: id assignment, anchor synthesis and detail records.

pub mod builder;
pub mod details;
pub mod ids;

pub use builder::{Branch, Hierarchy, build};
pub use details::{DetailMap, NodeDetails, extract_details};
pub use ids::{ANCHOR_PREFIX, IdCounters, NodeKind, ROOT_ID, is_anchor_id, parse_node_id};
