use super::*;

#[test]
fn test_point_new() {
    let p = Point::new(3.0, 7.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 7.5);
}

#[test]
fn test_layout_node_new() {
    let n = LayoutNode::new("team-1", NodeKind::Team, "Payments", Point::new(10.0, 20.0));
    assert_eq!(n.id, "team-1");
    assert_eq!(n.kind, NodeKind::Team);
    assert_eq!(n.label, "Payments");
    assert!(n.external_id.is_none());
    assert_eq!(n.position, Point::new(10.0, 20.0));
}

#[test]
fn test_layout_edge_id() {
    let e = LayoutEdge::new("agent-1", "tool-2");
    assert_eq!(e.id, "edge-agent-1-tool-2");
    assert_eq!(e.source, "agent-1");
    assert_eq!(e.target, "tool-2");
}

#[test]
fn test_layout_result_new() {
    let lr = LayoutResult::new();
    assert!(lr.nodes.is_empty());
    assert!(lr.edges.is_empty());
    assert!(lr.positions.is_empty());
    assert!(lr.position("root").is_none());
    assert!(lr.node("root").is_none());
}

#[test]
fn test_edge_prefix() {
    assert_eq!(EDGE_PREFIX, "edge-");
}
