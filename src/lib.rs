//! hierarchy-flow — agent hierarchy JSON to positioned diagram data.
//!
//! Public API: `build_diagram()`, `render_json()`, [`Diagram`].
//!
//! Pipeline: JSON text → [`document::Application`] → [`hierarchy::build`]
//! (ids, anchors, detail map) → [`layout::layout`] (positions, visible
//! nodes, edges) → a [`renderers::Renderer`].

pub mod config;
pub mod document;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod renderers;

#[cfg(feature = "wasm")]
mod wasm;

use crate::config::LayoutConfig;
use crate::document::Application;
use crate::error::{Error, LoadError};
use crate::hierarchy::{Hierarchy, NodeDetails};
use crate::layout::{DiagramGraph, LayoutResult};
use crate::renderers::{JsonRenderer, Renderer};

/// A built hierarchy together with its layout.
///
/// Built once per document and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub hierarchy: Hierarchy,
    pub layout: LayoutResult,
}

impl Diagram {
    pub fn build(app: &Application, config: &LayoutConfig) -> Self {
        let hierarchy = hierarchy::build(app);
        let layout = layout::layout(&hierarchy, config);
        Self { hierarchy, layout }
    }

    /// Stored details for a node id; `None` for anchors and unknown ids.
    pub fn details_for(&self, id: &str) -> Option<&NodeDetails> {
        self.hierarchy.details.details_for(id)
    }

    /// Inspector record for a visible node: stored details, or a fallback
    /// built from the node's label. `None` when `id` is not a visible node.
    pub fn inspect(&self, id: &str) -> Option<NodeDetails> {
        let node = self.layout.node(id)?;
        Some(self.hierarchy.details.inspect(id, &node.label))
    }

    pub fn graph(&self) -> DiagramGraph {
        DiagramGraph::from_layout(&self.layout)
    }
}

/// Parse a JSON document and build its diagram.
pub fn build_diagram(src: &str, config: &LayoutConfig) -> Result<Diagram, LoadError> {
    let app = Application::from_json(src)?;
    Ok(Diagram::build(&app, config))
}

/// Parse a JSON document and render the diagram JSON with default spacing.
pub fn render_json(src: &str, pretty: bool) -> Result<String, Error> {
    let diagram = build_diagram(src, &LayoutConfig::default())?;
    Ok(JsonRenderer::new(pretty).render(&diagram)?)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
