use super::set_of;
use crate::*;

#[test]
fn chord_matrix_accumulates_duplicate_links_symmetrically() {
    let input = set_of(&[
        ("A", "B", Some(5.0)),
        ("A", "B", Some(3.0)),
        ("B", "A", Some(2.0)),
    ]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();

    let labels: Vec<String> = m.labels().iter().map(|l| l.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "A (source)",
            "B (source)",
            "B (destination)",
            "A (destination)"
        ]
    );

    let a_src = m.index_of(&Key::from("A"), Role::Source).unwrap();
    let b_src = m.index_of(&Key::from("B"), Role::Source).unwrap();
    let a_dst = m.index_of(&Key::from("A"), Role::Destination).unwrap();
    let b_dst = m.index_of(&Key::from("B"), Role::Destination).unwrap();

    assert_eq!(m.cell(a_src, b_dst), 8.0);
    assert_eq!(m.cell(b_dst, a_src), 8.0);
    assert_eq!(m.cell(b_src, a_dst), 2.0);
    assert_eq!(m.cell(a_dst, b_src), 2.0);
    assert_eq!(m.value(&Key::from("A"), &Key::from("B")), 8.0);
    assert!(m.is_symmetric());
}

#[test]
fn chord_labels_list_sources_before_destinations() {
    let input = set_of(&[("x", "y", Some(1.0)), ("y", "z", Some(2.0))]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    assert_eq!(m.source_count(), 2);
    assert!(m.labels()[..2].iter().all(RoleLabel::is_source));
    assert!(m.labels()[2..].iter().all(|l| l.role == Role::Destination));
    assert_eq!(m.len(), 4);
}

#[test]
fn chord_key_in_both_roles_occupies_two_indices() {
    let input = set_of(&[("hub", "leaf", Some(1.0)), ("leaf", "hub", Some(1.0))]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    let hub_src = m.index_of(&Key::from("hub"), Role::Source);
    let hub_dst = m.index_of(&Key::from("hub"), Role::Destination);
    assert!(hub_src.is_some() && hub_dst.is_some());
    assert_ne!(hub_src, hub_dst);
}

#[test]
fn chord_role_marker_inside_key_does_not_collide() {
    let input = set_of(&[
        ("a source", "b", Some(1.0)),
        ("a", "b", Some(2.0)),
    ]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    assert_eq!(m.source_count(), 2);
    assert_eq!(m.value(&Key::from("a source"), &Key::from("b")), 1.0);
    assert_eq!(m.value(&Key::from("a"), &Key::from("b")), 2.0);
}

#[test]
fn chord_tolerates_self_loops() {
    let input = set_of(&[("a", "a", Some(4.0))]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.cell(0, 1), 4.0);
    assert_eq!(m.cell(1, 0), 4.0);
    assert_eq!(m.cell(0, 0), 0.0);
}

#[test]
fn chord_unlinked_pairs_are_zero_and_half_sum_matches() {
    let input = set_of(&[("a", "b", Some(1.5)), ("c", "d", Some(2.5))]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    assert_eq!(m.value(&Key::from("a"), &Key::from("d")), 0.0);
    let total: f64 = m.matrix().iter().flatten().sum();
    assert_eq!(total / 2.0, 4.0);
}

#[test]
fn chord_rejects_negative_values() {
    let input = set_of(&[("a", "b", Some(-1.0))]);
    let err = build_chord_matrix(&extract_links(&input).unwrap()).unwrap_err();
    assert!(matches!(err, Error::NegativeValue { .. }), "{err}");
}

#[test]
fn chord_from_series_checks_role_order_first() {
    let input = set_of(&[("a", "b", Some(1.0))]).with_meta(RelationMeta {
        metric: Some("count".to_string()),
        bindings: vec![
            BucketBinding {
                role: Role::Destination,
                field: "dst".to_string(),
            },
            BucketBinding {
                role: Role::Source,
                field: "src".to_string(),
            },
        ],
    });
    let err = chord_from_series(&input).unwrap_err();
    assert!(matches!(err, Error::OrderingError { .. }), "{err}");
}

#[test]
fn chord_lookups_outside_the_matrix_read_as_empty() {
    let input = set_of(&[("a", "b", Some(1.0))]);
    let m = build_chord_matrix(&extract_links(&input).unwrap()).unwrap();
    assert_eq!(m.cell(0, 1), 1.0);
    assert_eq!(m.cell(2, 0), 0.0);
    assert_eq!(m.cell(0, 99), 0.0);
    assert!(m.label(1).is_some());
    assert!(m.label(2).is_none());
    assert_eq!(m.row_sum(5), 0.0);
    assert_eq!(m.matrix().len(), m.labels().len());
}
