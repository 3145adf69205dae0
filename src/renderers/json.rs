//! JSON renderer: the node/edge/detail document consumed by the browser.
//!
//! Node and edge `type` values name the renderer's custom node component
//! and its edge style.

use serde::{Serialize, Serializer};

use super::Renderer;
use crate::Diagram;
use crate::error::RenderError;
use crate::hierarchy::{DetailMap, NodeDetails, NodeKind};
use crate::layout::{LayoutEdge, LayoutNode, Point};

pub const NODE_TYPE: &str = "customNode";
pub const EDGE_TYPE: &str = "smoothstep";

pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String, RenderError> {
        let doc = DiagramDoc {
            nodes: diagram.layout.nodes.iter().map(NodeDoc::from).collect(),
            edges: diagram.layout.edges.iter().map(EdgeDoc::from).collect(),
            details: DetailsDoc(&diagram.hierarchy.details),
        };
        let text = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(text)
    }
}

/// Inspector record as the panel reads it: `{"type": kind, "data": {...}}`.
pub fn details_json(details: &NodeDetails, pretty: bool) -> Result<String, RenderError> {
    let entry = DetailDoc::from(details);
    let text = if pretty {
        serde_json::to_string_pretty(&entry)?
    } else {
        serde_json::to_string(&entry)?
    };
    Ok(text)
}

// ─── Wire shapes ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DiagramDoc<'a> {
    nodes: Vec<NodeDoc<'a>>,
    edges: Vec<EdgeDoc<'a>>,
    details: DetailsDoc<'a>,
}

#[derive(Serialize)]
struct NodeDoc<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    node_type: &'static str,
    kind: NodeKind,
    data: NodeDataDoc<'a>,
    position: Point,
}

#[derive(Serialize)]
struct NodeDataDoc<'a> {
    label: &'a str,
    #[serde(rename = "nodeId", skip_serializing_if = "Option::is_none")]
    node_id: Option<&'a str>,
}

impl<'a> From<&'a LayoutNode> for NodeDoc<'a> {
    fn from(node: &'a LayoutNode) -> Self {
        Self {
            id: &node.id,
            node_type: NODE_TYPE,
            kind: node.kind,
            data: NodeDataDoc {
                label: &node.label,
                node_id: node.external_id.as_deref(),
            },
            position: node.position,
        }
    }
}

#[derive(Serialize)]
struct EdgeDoc<'a> {
    id: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(rename = "type")]
    edge_type: &'static str,
}

impl<'a> From<&'a LayoutEdge> for EdgeDoc<'a> {
    fn from(edge: &'a LayoutEdge) -> Self {
        Self {
            id: &edge.id,
            source: &edge.source,
            target: &edge.target,
            edge_type: EDGE_TYPE,
        }
    }
}

#[derive(Serialize)]
struct DetailDoc<'a> {
    #[serde(rename = "type")]
    kind: NodeKind,
    data: &'a NodeDetails,
}

impl<'a> From<&'a NodeDetails> for DetailDoc<'a> {
    fn from(details: &'a NodeDetails) -> Self {
        Self {
            kind: details.kind,
            data: details,
        }
    }
}

/// Serializes as an object keyed by node id, in insertion order.
struct DetailsDoc<'a>(&'a DetailMap);

impl Serialize for DetailsDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, d)| (id, DetailDoc::from(d))))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
