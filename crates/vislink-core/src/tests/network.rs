use super::set_of;
use crate::*;

#[test]
fn network_collapses_keys_shared_by_both_roles() {
    let input = set_of(&[
        ("a", "b", Some(5.0)),
        ("b", "c", Some(2.0)),
        ("c", "a", Some(1.0)),
    ]);
    let g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    let names: Vec<&str> = g.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(g.edges.len(), 3);

    assert_eq!(g.nodes[0].weight, 6.0);
    assert_eq!(g.nodes[1].weight, 7.0);
    assert_eq!(g.nodes[2].weight, 3.0);
    assert_eq!(g.total_node_weight(), 2.0 * g.total_edge_weight());
}

#[test]
fn network_edges_resolve_against_node_list() {
    let input = set_of(&[("x", "y", Some(4.0)), ("z", "y", Some(1.0))]);
    let g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    for e in &g.edges {
        assert!(e.source_index < g.nodes.len());
        assert!(e.target_index < g.nodes.len());
    }
    let y = g.index_of(&Key::from("y")).unwrap();
    assert_eq!(g.edges[1].target_index, y);
    assert_eq!(g.edges[1].weight, 1.0);
}

#[test]
fn network_leaves_simulation_state_at_rest() {
    let input = set_of(&[("x", "y", Some(4.0))]);
    let g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    for n in &g.nodes {
        assert_eq!(n.position, Point::ZERO);
        assert_eq!(n.velocity, Point::ZERO);
        assert!(!n.fixed);
    }
}

#[test]
fn network_rejects_reflexive_relationship() {
    let input = set_of(&[("A", "A", Some(4.0))]);
    let err = build_network_graph(&extract_links(&input).unwrap()).unwrap_err();
    match err {
        Error::ReflexiveRelationship { key } => assert_eq!(key, "A"),
        other => panic!("expected ReflexiveRelationship, got {other:?}"),
    }
}

#[test]
fn network_from_series_propagates_insufficient_data() {
    let input = set_of(&[("a", "b", Some(0.0))]);
    let err = network_from_series(&input).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { .. }));
}

#[test]
fn neighbors_and_connectivity() {
    let input = set_of(&[
        ("a", "b", Some(1.0)),
        ("c", "a", Some(1.0)),
        ("a", "b", Some(2.0)),
        ("d", "e", Some(1.0)),
    ]);
    let g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    let a = g.index_of(&Key::from("a")).unwrap();
    let b = g.index_of(&Key::from("b")).unwrap();
    let c = g.index_of(&Key::from("c")).unwrap();
    let d = g.index_of(&Key::from("d")).unwrap();

    let mut expected = vec![b, c];
    expected.sort_unstable();
    assert_eq!(g.neighbors(a), expected);
    assert!(g.are_connected(a, b));
    assert!(g.are_connected(b, a));
    assert!(g.are_connected(d, d));
    assert!(!g.are_connected(a, d));
}

#[test]
fn pin_marks_node_fixed_at_position() {
    let input = set_of(&[("a", "b", Some(1.0))]);
    let mut g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    assert!(g.pin(&Key::from("b"), 10.0, 20.0));
    assert!(!g.pin(&Key::from("missing"), 0.0, 0.0));
    let b = &g.nodes[1];
    assert!(b.fixed);
    assert_eq!(b.position, Point::new(10.0, 20.0));
}

#[test]
fn pin_rejects_non_finite_coordinates() {
    let input = set_of(&[("a", "b", Some(1.0))]);
    let mut g = build_network_graph(&extract_links(&input).unwrap()).unwrap();
    assert!(!g.pin(&Key::from("a"), f64::NAN, 5.0));
    assert!(!g.pin(&Key::from("a"), 5.0, f64::INFINITY));
    let a = &g.nodes[0];
    assert!(!a.fixed);
    assert_eq!(a.position, Point::ZERO);
}
