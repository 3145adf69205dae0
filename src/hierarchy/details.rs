//! Per-node detail records for the inspector panel.

use indexmap::IndexMap;
use serde::Serialize;

use super::ids::NodeKind;
use crate::document::{Agent, Api, Application, Team, Tool};

/// The input field set of one record, keyed in [`DetailMap`] by node id.
///
/// The api-only fields are `Some` exactly when `kind` is [`NodeKind::Api`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    #[serde(skip)]
    pub kind: NodeKind,
    pub name: String,
    pub description: String,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_params: Option<String>,
}

impl NodeDetails {
    fn plain(kind: NodeKind, name: &str, description: &str, external_id: Option<&String>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            external_id: external_id.cloned(),
            method: None,
            endpoint: None,
            payload: None,
            input_params: None,
            output_params: None,
        }
    }

    pub fn application(app: &Application) -> Self {
        Self::plain(NodeKind::Root, &app.name, &app.description, app.id.as_ref())
    }

    pub fn team(team: &Team) -> Self {
        Self::plain(NodeKind::Team, &team.name, &team.description, team.id.as_ref())
    }

    pub fn agent(agent: &Agent) -> Self {
        Self::plain(NodeKind::Agent, &agent.name, &agent.description, agent.id.as_ref())
    }

    pub fn tool(tool: &Tool) -> Self {
        Self::plain(NodeKind::Tool, &tool.name, &tool.description, tool.id.as_ref())
    }

    pub fn api(api: &Api) -> Self {
        Self {
            method: Some(api.method.clone()),
            endpoint: Some(api.endpoint.clone()),
            payload: Some(api.payload.clone()),
            input_params: Some(api.input_params.clone()),
            output_params: Some(api.output_params.clone()),
            ..Self::plain(NodeKind::Api, &api.name, &api.description, api.id.as_ref())
        }
    }

    /// Minimal record for a node with no stored details: just its label.
    pub fn fallback(id: &str, label: &str) -> Self {
        Self::plain(NodeKind::from_id(id), label, "", None)
    }
}

/// Lookup from node id to [`NodeDetails`], in insertion order.
///
/// Holds the root and every real record; anchors never get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailMap {
    records: IndexMap<String, NodeDetails>,
}

impl DetailMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record. A repeated id keeps its first position but takes the new record.
    pub fn insert(&mut self, id: impl Into<String>, details: NodeDetails) {
        self.records.insert(id.into(), details);
    }

    /// Stored details for `id`. Absence is normal (anchors, unknown ids).
    pub fn details_for(&self, id: &str) -> Option<&NodeDetails> {
        self.records.get(id)
    }

    /// What the inspector shows for a clicked node: the stored record, or a
    /// fallback carrying only the label the renderer already has.
    pub fn inspect(&self, id: &str, label: &str) -> NodeDetails {
        self.details_for(id)
            .cloned()
            .unwrap_or_else(|| NodeDetails::fallback(id, label))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeDetails)> {
        self.records.iter().map(|(id, d)| (id.as_str(), d))
    }
}

/// Detail map for `app`, produced by the same traversal that assigns ids.
pub fn extract_details(app: &Application) -> DetailMap {
    super::builder::build(app).details
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_details.rs"]
mod tests;
