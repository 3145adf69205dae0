use super::*;
use crate::config::LayoutConfig;
use crate::document::Application;
use crate::hierarchy::build;
use crate::layout::engine::layout;
use crate::layout::types::{LayoutEdge, LayoutNode, Point};

const SAMPLE: &str = include_str!("../fixtures/sample.json");

fn sample_graph() -> DiagramGraph {
    let app = Application::from_json(SAMPLE).unwrap();
    DiagramGraph::from_layout(&layout(&build(&app), &LayoutConfig::default()))
}

fn node(id: &str) -> LayoutNode {
    LayoutNode::new(id, NodeKind::from_id(id), id, Point::new(0.0, 0.0))
}

fn manual(nodes: &[&str], edges: &[(&str, &str)]) -> DiagramGraph {
    let mut result = LayoutResult::new();
    result.nodes = nodes.iter().map(|id| node(id)).collect();
    result.edges = edges.iter().map(|(s, t)| LayoutEdge::new(*s, *t)).collect();
    DiagramGraph::from_layout(&result)
}

// ── Construction ──────────────────────────────────────────────────────────

#[test]
fn test_sample_counts() {
    let g = sample_graph();
    assert_eq!(g.node_count(), 13);
    assert_eq!(g.edge_count(), 12);
    assert!(g.dangling.is_empty());
}

#[test]
fn test_sample_is_tree() {
    let g = sample_graph();
    assert!(g.is_tree());
    assert!(g.orphans().is_empty());
}

#[test]
fn test_degrees() {
    let g = sample_graph();
    assert_eq!(g.in_degree("root"), 0);
    assert_eq!(g.out_degree("root"), 3);
    assert_eq!(g.out_degree("tool-1"), 2);
    // anchors are not part of the visible graph
    assert_eq!(g.out_degree("tool-2"), 0);
    assert_eq!(g.in_degree("anchor-tool-1"), 0);
    assert_eq!(g.in_degree("missing"), 0);
}

#[test]
fn test_parent_and_children() {
    let g = sample_graph();
    assert_eq!(g.parent_of("api-2"), Some("tool-1"));
    assert_eq!(g.parent_of("root"), None);
    assert_eq!(g.parent_of("ghost"), None);
    assert_eq!(g.children_of("root"), vec!["team-1", "team-2", "team-3"]);
    assert_eq!(g.children_of("agent-1"), vec!["tool-1", "tool-2"]);
    assert!(g.children_of("ghost").is_empty());
}

// ── Violations ────────────────────────────────────────────────────────────

#[test]
fn test_single_root_is_tree() {
    assert!(manual(&["root"], &[]).is_tree());
}

#[test]
fn test_missing_root_not_tree() {
    assert!(!manual(&["team-1"], &[]).is_tree());
}

#[test]
fn test_orphan_detected() {
    let g = manual(&["root", "team-1", "team-2"], &[("root", "team-1")]);
    assert!(!g.is_tree());
    assert_eq!(g.orphans(), vec!["team-2".to_string()]);
}

#[test]
fn test_dangling_edge_detected() {
    let g = manual(&["root", "team-1"], &[("root", "team-1"), ("team-1", "anchor-team-1")]);
    assert_eq!(
        g.dangling,
        vec![("team-1".to_string(), "anchor-team-1".to_string())]
    );
    assert!(!g.is_tree());
}

#[test]
fn test_level_skip_not_tree() {
    let g = manual(&["root", "agent-1"], &[("root", "agent-1")]);
    assert!(!g.is_tree());
}

#[test]
fn test_double_parent_not_tree() {
    let g = manual(
        &["root", "team-1", "team-2", "agent-1"],
        &[
            ("root", "team-1"),
            ("root", "team-2"),
            ("team-1", "agent-1"),
            ("team-2", "agent-1"),
        ],
    );
    assert!(!g.is_tree());
    assert_eq!(g.orphans(), vec!["agent-1".to_string()]);
}
