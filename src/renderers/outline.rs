//! Indented text outline of the visible tree, one node per line.
//!
//! ```text
//! Acme [root] (305, 0)
//!   Payments [team-1] (305, 235)
//! ```

use std::fmt::Write;

use super::Renderer;
use crate::Diagram;
use crate::error::RenderError;
use crate::hierarchy::Branch;

pub struct OutlineRenderer {
    pub indent: usize,
}

impl OutlineRenderer {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Renderer for OutlineRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_branch(&mut out, diagram, &diagram.hierarchy.root, 0);
        Ok(out)
    }
}

impl OutlineRenderer {
    fn write_branch(&self, out: &mut String, diagram: &Diagram, branch: &Branch, depth: usize) {
        if branch.hidden {
            return;
        }
        let pad = " ".repeat(depth * self.indent);
        match diagram.layout.position(&branch.id) {
            Some(p) => {
                let _ = writeln!(out, "{pad}{} [{}] ({}, {})", branch.name, branch.id, p.x, p.y);
            }
            None => {
                let _ = writeln!(out, "{pad}{} [{}]", branch.name, branch.id);
            }
        }
        for child in &branch.children {
            self.write_branch(out, diagram, child, depth + 1);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_outline.rs"]
mod tests;
