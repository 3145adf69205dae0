//! DiagramGraph — petgraph view over the visible nodes and edges.
//!
//! Used to check the shape of a finished layout: a single tree rooted at
//! `root`, each visible node reachable through exactly one edge.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::LayoutResult;
use crate::hierarchy::{NodeKind, ROOT_ID};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    pub kind: NodeKind,
}

pub struct DiagramGraph {
    pub digraph: DiGraph<NodeData, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// Edges whose endpoints are not visible nodes, as (source, target).
    pub dangling: Vec<(String, String)>,
}

impl DiagramGraph {
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let mut digraph: DiGraph<NodeData, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();
        let mut dangling = Vec::new();

        for node in &layout.nodes {
            if !node_index.contains_key(&node.id) {
                let idx = digraph.add_node(NodeData {
                    id: node.id.clone(),
                    kind: node.kind,
                });
                node_index.insert(node.id.clone(), idx);
            }
        }

        for edge in &layout.edges {
            match (node_index.get(&edge.source), node_index.get(&edge.target)) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, ());
                }
                _ => dangling.push((edge.source.clone(), edge.target.clone())),
            }
        }

        Self {
            digraph,
            node_index,
            dangling,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.degree(id, Direction::Incoming)
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.degree(id, Direction::Outgoing)
    }

    fn degree(&self, id: &str, dir: Direction) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self.digraph.edges_directed(idx, dir).count(),
        }
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        let &idx = self.node_index.get(id)?;
        self.digraph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .map(|p| self.digraph[p].id.as_str())
    }

    /// Child ids in the order their edges were added.
    pub fn children_of(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        // petgraph yields the newest edge first
        let mut children: Vec<&str> = self
            .digraph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|c| self.digraph[c].id.as_str())
            .collect();
        children.reverse();
        children
    }

    /// True when every edge joins visible nodes on adjacent levels, the root
    /// has no parent, every other node exactly one, and there is no cycle.
    pub fn is_tree(&self) -> bool {
        if !self.node_index.contains_key(ROOT_ID)
            || !self.dangling.is_empty()
            || is_cyclic_directed(&self.digraph)
        {
            return false;
        }
        let adjacent_levels = self.digraph.edge_indices().all(|e| {
            self.digraph.edge_endpoints(e).is_some_and(|(a, b)| {
                self.digraph[a].kind.level() + 1 == self.digraph[b].kind.level()
            })
        });
        adjacent_levels
            && self.node_index.keys().all(|id| {
                let expected = if id == ROOT_ID { 0 } else { 1 };
                self.in_degree(id) == expected
            })
    }

    /// Ids of visible nodes that violate [`is_tree`](Self::is_tree)'s
    /// in-degree rule, sorted.
    pub fn orphans(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .node_index
            .keys()
            .filter(|id| id.as_str() != ROOT_ID && self.in_degree(id) != 1)
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
