//! Renderer trait and the bundled renderers.

pub mod json;
pub mod outline;

pub use json::JsonRenderer;
pub use outline::OutlineRenderer;

use crate::Diagram;
use crate::error::RenderError;

/// Turns a finished diagram into text for a consumer.
pub trait Renderer {
    fn render(&self, diagram: &Diagram) -> Result<String, RenderError>;
}
