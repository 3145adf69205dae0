//! Hierarchy builder: document → Branch tree with ids, anchors and details.
//!
//! Pre-order walk over teams → agents → tools → apis. Every real record
//! takes the next id of its kind and leaves a detail record behind. A
//! record that ends up with no children gets a hidden anchor chain reaching
//! down to the api level, so every path in the tree has the same depth.

use tracing::{debug, trace};

use super::details::{DetailMap, NodeDetails};
use super::ids::{IdCounters, NodeKind, ROOT_ID};
use crate::document::{Agent, Api, Application, Team, Tool};

// ─── Branch ──────────────────────────────────────────────────────────────────

/// One node of the hierarchy tree.
///
/// `kind` is the level the branch sits on, also for anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub hidden: bool,
    pub children: Vec<Branch>,
}

impl Branch {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        children: Vec<Branch>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            hidden: false,
            children,
        }
    }

    pub fn anchor(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            hidden: true,
            ..Self::new(id, name, kind, Vec::new())
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order iterator over this branch and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Branch> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let branch = stack.pop()?;
            stack.extend(branch.children.iter().rev());
            Some(branch)
        })
    }

    pub fn find(&self, id: &str) -> Option<&Branch> {
        self.walk().find(|b| b.id == id)
    }
}

// ─── Hierarchy ───────────────────────────────────────────────────────────────

/// Result of one build. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    /// Synthetic root (`root`, named after the application).
    pub root: Branch,
    pub details: DetailMap,
    /// Final counter values: the number of real records per kind.
    pub counts: IdCounters,
}

impl Hierarchy {
    /// All branches including the root and anchors.
    pub fn branch_count(&self) -> usize {
        self.root.walk().count()
    }

    pub fn find(&self, id: &str) -> Option<&Branch> {
        self.root.find(id)
    }
}

// ─── Build ───────────────────────────────────────────────────────────────────

pub fn build(app: &Application) -> Hierarchy {
    let mut ids = IdCounters::new();
    let mut details = DetailMap::new();
    details.insert(ROOT_ID, NodeDetails::application(app));

    let teams = app
        .business_teams
        .iter()
        .map(|team| build_team(team, &mut ids, &mut details))
        .collect();
    let root = Branch::new(ROOT_ID, &app.name, NodeKind::Root, teams);

    debug!(
        teams = ids.teams,
        agents = ids.agents,
        tools = ids.tools,
        apis = ids.apis,
        anchors = ids.anchors,
        "built hierarchy for {:?}",
        app.name
    );

    Hierarchy {
        root,
        details,
        counts: ids,
    }
}

fn build_team(team: &Team, ids: &mut IdCounters, details: &mut DetailMap) -> Branch {
    let id = ids.next_id(NodeKind::Team);
    details.insert(id.as_str(), NodeDetails::team(team));
    let mut agents: Vec<Branch> = team
        .agents
        .iter()
        .map(|agent| build_agent(agent, ids, details))
        .collect();
    if agents.is_empty() {
        agents.extend(anchor_chain(&team.name, NodeKind::Team, ids));
    }
    Branch::new(id, &team.name, NodeKind::Team, agents)
}

fn build_agent(agent: &Agent, ids: &mut IdCounters, details: &mut DetailMap) -> Branch {
    let id = ids.next_id(NodeKind::Agent);
    details.insert(id.as_str(), NodeDetails::agent(agent));
    let mut tools: Vec<Branch> = agent
        .tools
        .iter()
        .map(|tool| build_tool(tool, ids, details))
        .collect();
    if tools.is_empty() {
        tools.extend(anchor_chain(&agent.name, NodeKind::Agent, ids));
    }
    Branch::new(id, &agent.name, NodeKind::Agent, tools)
}

fn build_tool(tool: &Tool, ids: &mut IdCounters, details: &mut DetailMap) -> Branch {
    let id = ids.next_id(NodeKind::Tool);
    details.insert(id.as_str(), NodeDetails::tool(tool));
    let mut apis: Vec<Branch> = tool
        .apis
        .iter()
        .map(|api| build_api(api, ids, details))
        .collect();
    if apis.is_empty() {
        apis.extend(anchor_chain(&tool.name, NodeKind::Tool, ids));
    }
    Branch::new(id, &tool.name, NodeKind::Tool, apis)
}

fn build_api(api: &Api, ids: &mut IdCounters, details: &mut DetailMap) -> Branch {
    let id = ids.next_id(NodeKind::Api);
    details.insert(id.as_str(), NodeDetails::api(api));
    Branch::new(id, &api.name, NodeKind::Api, Vec::new())
}

/// Hidden placeholder chain under an empty `owner`, one anchor per level
/// down to the api level.
///
/// The top anchor is labelled with the owner's kind and named
/// `"<owner> Anchor"`; deeper anchors are labelled with their own level
/// (`"<owner> Tool Anchor"`, `"<owner> API Anchor"`). Ids are drawn top
/// first. Returns `None` only for an api owner, which has no level below.
fn anchor_chain(owner: &str, owner_kind: NodeKind, ids: &mut IdCounters) -> Option<Branch> {
    let mut links = Vec::new();
    let mut level = owner_kind.child();
    while let Some(kind) = level {
        let anchor = if links.is_empty() {
            Branch::anchor(ids.next_anchor(owner_kind), format!("{owner} Anchor"), kind)
        } else {
            Branch::anchor(
                ids.next_anchor(kind),
                format!("{owner} {} Anchor", kind.display_name()),
                kind,
            )
        };
        trace!(id = %anchor.id, level = %kind, "synthesized anchor");
        links.push(anchor);
        level = kind.child();
    }
    links.into_iter().rev().reduce(|child, mut parent| {
        parent.children.push(child);
        parent
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_builder.rs"]
mod tests;
