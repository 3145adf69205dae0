use crate::hierarchy::NodeKind;

/// Spacing constants for the layout engine.
///
/// Defaults match the diagram the browser renderer expects.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// x of the first api-level node.
    pub start_x: f64,
    /// Distance between consecutive api-level nodes, anchors included.
    pub api_spacing: f64,
    /// Distance between levels.
    pub vertical_spacing: f64,
    /// Root x when the application has no teams.
    pub center_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            api_spacing: 410.0,
            vertical_spacing: 235.0,
            center_x: 400.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed y of a level: root = 0, api = 4 × spacing.
    pub fn level_y(&self, kind: NodeKind) -> f64 {
        kind.level() as f64 * self.vertical_spacing
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
