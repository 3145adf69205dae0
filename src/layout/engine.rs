//! Bottom-up tree layout.
//!
//! Phases:
//!   1. Api-level x in traversal order, one fixed slot per leaf (anchors too)
//!   2. Every ancestor's x = mean of its direct children's x
//!   3. y fixed per level
//!   4. Visible nodes (root + non-hidden branches) and edges between them,
//!      gathered in pre-order while the positions are assigned

use std::collections::HashMap;

use tracing::debug;

use super::types::{LayoutEdge, LayoutNode, LayoutResult, Point};
use crate::config::LayoutConfig;
use crate::hierarchy::{Branch, DetailMap, Hierarchy};

/// Lay out a built hierarchy.
pub fn layout(hierarchy: &Hierarchy, config: &LayoutConfig) -> LayoutResult {
    let mut placement = Placement {
        config,
        details: &hierarchy.details,
        cursor: config.start_x,
        positions: HashMap::new(),
    };
    let root = &hierarchy.root;

    let teams: Vec<Subtree> = root
        .children
        .iter()
        .map(|team| place(team, &root.id, &mut placement))
        .collect();
    let root_x = if teams.is_empty() {
        config.center_x
    } else {
        mean(teams.iter().map(|team| team.x))
    };
    let tree = placement.assemble(root, None, root_x, teams);

    let result = LayoutResult {
        nodes: tree.nodes,
        edges: tree.edges,
        positions: placement.positions,
    };
    debug!(
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        positioned = result.positions.len(),
        "layout complete"
    );
    result
}

/// State shared by one layout pass.
struct Placement<'a> {
    config: &'a LayoutConfig,
    details: &'a DetailMap,
    /// x of the next leaf slot.
    cursor: f64,
    positions: HashMap<String, Point>,
}

/// A placed branch: its x plus the visible nodes and edges of its subtree,
/// both in pre-order.
struct Subtree {
    x: f64,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

/// Position `branch` and its subtree.
///
/// Leaves take the next slot at the cursor; every other branch sits at the
/// mean of its children, which are placed first.
fn place(branch: &Branch, parent: &str, placement: &mut Placement<'_>) -> Subtree {
    let children: Vec<Subtree> = branch
        .children
        .iter()
        .map(|child| place(child, &branch.id, placement))
        .collect();
    let x = if children.is_empty() {
        let slot = placement.cursor;
        placement.cursor += placement.config.api_spacing;
        slot
    } else {
        mean(children.iter().map(|child| child.x))
    };
    placement.assemble(branch, Some(parent), x, children)
}

impl Placement<'_> {
    /// Record the position of `branch` and, unless it is hidden, emit its
    /// node and incoming edge ahead of its children's.
    fn assemble(
        &mut self,
        branch: &Branch,
        parent: Option<&str>,
        x: f64,
        children: Vec<Subtree>,
    ) -> Subtree {
        let position = Point::new(x, self.config.level_y(branch.kind));
        self.positions.insert(branch.id.clone(), position);

        let mut subtree = Subtree {
            x,
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        // hidden subtrees are hidden all the way down
        if branch.hidden {
            return subtree;
        }
        let mut node = LayoutNode::new(&branch.id, branch.kind, &branch.name, position);
        node.external_id = self
            .details
            .details_for(&branch.id)
            .and_then(|d| d.external_id.clone());
        subtree.nodes.push(node);
        if let Some(parent) = parent {
            subtree.edges.push(LayoutEdge::new(parent, &branch.id));
        }
        for child in children {
            subtree.nodes.extend(child.nodes);
            subtree.edges.extend(child.edges);
        }
        subtree
    }
}

/// Arithmetic mean of a non-empty sequence.
fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = xs.fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));
    sum / n as f64
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
