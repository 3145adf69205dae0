//! WASM bindings for hierarchy-flow.
//!
//! Exposes `layout` and `layoutWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::renderers::{JsonRenderer, Renderer};

/// Build the diagram JSON (nodes, edges, details) with default spacing.
#[wasm_bindgen]
pub fn layout(src: &str) -> Result<String, JsError> {
    crate::render_json(src, false).map_err(|e| JsError::new(&e.to_string()))
}

/// Build the diagram JSON with custom spacing.
///
/// - `start_x`: x of the first api-level node
/// - `api_spacing`: distance between api-level nodes
/// - `vertical_spacing`: distance between levels
/// - `center_x`: root x when there are no teams
#[wasm_bindgen(js_name = "layoutWithOptions")]
pub fn layout_with_options(
    src: &str,
    start_x: f64,
    api_spacing: f64,
    vertical_spacing: f64,
    center_x: f64,
    pretty: bool,
) -> Result<String, JsError> {
    let config = LayoutConfig {
        start_x,
        api_spacing,
        vertical_spacing,
        center_x,
    };
    let diagram =
        crate::build_diagram(src, &config).map_err(|e| JsError::new(&e.to_string()))?;
    JsonRenderer::new(pretty)
        .render(&diagram)
        .map_err(|e| JsError::new(&e.to_string()))
}
