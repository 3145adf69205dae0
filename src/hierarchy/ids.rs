//! Node kinds, node ids and the per-kind id counters.
//!
//! Real ids look like `team-3`: the kind prefix plus a 1-based counter that
//! runs across the whole document (not per parent). Anchor ids share one
//! separate counter and always start with [`ANCHOR_PREFIX`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ─── Constants ───────────────────────────────────────────────────────────────

pub const ROOT_ID: &str = "root";
pub const ANCHOR_PREFIX: &str = "anchor-";

static NODE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(team|agent|tool|api)-([1-9][0-9]*)$").expect("node id pattern is valid")
});

// ─── NodeKind ────────────────────────────────────────────────────────────────

/// One of the five fixed levels of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[serde(rename = "application")]
    Root,
    Team,
    Agent,
    Tool,
    Api,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Root,
        NodeKind::Team,
        NodeKind::Agent,
        NodeKind::Tool,
        NodeKind::Api,
    ];

    /// Id prefix, without the trailing dash.
    pub fn prefix(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Team => "team",
            NodeKind::Agent => "agent",
            NodeKind::Tool => "tool",
            NodeKind::Api => "api",
        }
    }

    /// Depth in the tree: root = 0, api = 4.
    pub fn level(self) -> usize {
        self as usize
    }

    /// Label used by the inspector panel.
    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Root => "Application",
            NodeKind::Team => "Business Team",
            NodeKind::Agent => "Agent",
            NodeKind::Tool => "Tool",
            NodeKind::Api => "API",
        }
    }

    /// The level directly below this one, if any.
    pub fn child(self) -> Option<NodeKind> {
        match self {
            NodeKind::Root => Some(NodeKind::Team),
            NodeKind::Team => Some(NodeKind::Agent),
            NodeKind::Agent => Some(NodeKind::Tool),
            NodeKind::Tool => Some(NodeKind::Api),
            NodeKind::Api => None,
        }
    }

    /// Classify an id by prefix. Anything unrecognised is treated as the root.
    pub fn from_id(id: &str) -> NodeKind {
        NodeKind::ALL[1..]
            .iter()
            .copied()
            .find(|kind| {
                id.strip_prefix(kind.prefix())
                    .is_some_and(|rest| rest.starts_with('-'))
            })
            .unwrap_or(NodeKind::Root)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Split a real node id into its kind and 1-based ordinal.
///
/// Returns `None` for the root, anchors and anything malformed.
pub fn parse_node_id(id: &str) -> Option<(NodeKind, usize)> {
    let caps = NODE_ID.captures(id)?;
    let kind = match &caps[1] {
        "team" => NodeKind::Team,
        "agent" => NodeKind::Agent,
        "tool" => NodeKind::Tool,
        _ => NodeKind::Api,
    };
    let ordinal = caps[2].parse().ok()?;
    Some((kind, ordinal))
}

pub fn is_anchor_id(id: &str) -> bool {
    id.starts_with(ANCHOR_PREFIX)
}

// ─── IdCounters ──────────────────────────────────────────────────────────────

/// Counter bundle threaded through one hierarchy build.
///
/// Each field holds the number of ids handed out so far, so after a build
/// it equals the number of real records of that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdCounters {
    pub teams: usize,
    pub agents: usize,
    pub tools: usize,
    pub apis: usize,
    pub anchors: usize,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next real id for `kind`. The root has a fixed id and consumes nothing.
    pub fn next_id(&mut self, kind: NodeKind) -> String {
        let slot = match kind {
            NodeKind::Root => return ROOT_ID.to_string(),
            NodeKind::Team => &mut self.teams,
            NodeKind::Agent => &mut self.agents,
            NodeKind::Tool => &mut self.tools,
            NodeKind::Api => &mut self.apis,
        };
        *slot += 1;
        format!("{}-{}", kind.prefix(), slot)
    }

    /// Next anchor id, labelled with `kind`: `anchor-<kind>-<n>`.
    pub fn next_anchor(&mut self, kind: NodeKind) -> String {
        self.anchors += 1;
        format!("{ANCHOR_PREFIX}{}-{}", kind.prefix(), self.anchors)
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::Root => 1,
            NodeKind::Team => self.teams,
            NodeKind::Agent => self.agents,
            NodeKind::Tool => self.tools,
            NodeKind::Api => self.apis,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_ids.rs"]
mod tests;
