//! Layout types: Point, LayoutNode, LayoutEdge, LayoutResult.

use std::collections::HashMap;

use serde::Serialize;

use crate::hierarchy::NodeKind;

// ─── Constants ────────────────────────────────────────────────────────────────

pub const EDGE_PREFIX: &str = "edge-";

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A visible node with its resolved position.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// External identifier from the source record, if it had one.
    pub external_id: Option<String>,
    pub position: Point,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            external_id: None,
            position,
        }
    }
}

// ─── LayoutEdge ───────────────────────────────────────────────────────────────

/// Parent → child connection between two visible nodes on adjacent levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl LayoutEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{EDGE_PREFIX}{source}-{target}"),
            source,
            target,
        }
    }
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// The full output of the layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// Root first, then visible branches in pre-order.
    pub nodes: Vec<LayoutNode>,
    /// In pre-order of their target.
    pub edges: Vec<LayoutEdge>,
    /// Every branch, anchors included.
    pub positions: HashMap<String, Point>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
