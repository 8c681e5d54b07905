use super::set_of;
use crate::*;

#[test]
fn extract_links_drops_zero_and_null_records() {
    let input = set_of(&[
        ("a", "b", Some(5.0)),
        ("a", "c", Some(0.0)),
        ("d", "b", None),
        ("b", "a", Some(2.0)),
    ]);
    let out = extract_links(&input).unwrap();
    assert_eq!(out.links.len(), 2);
    assert_eq!(out.skipped, 2);
    assert!(out.links.iter().all(|l| l.value != 0.0));
    assert_eq!(out.sources, vec![Key::from("a"), Key::from("b")]);
    assert_eq!(out.destinations, vec![Key::from("b"), Key::from("a")]);
}

#[test]
fn extract_links_keeps_first_seen_order_across_series() {
    let input = SeriesSet::new(vec![
        Series::new(vec![
            ValueRecord::new("z", "y", Some(1.0)),
            ValueRecord::new("a", "y", Some(1.0)),
        ]),
        Series::new(vec![
            ValueRecord::new("m", "x", Some(3.0)),
            ValueRecord::new("z", "x", Some(3.0)),
        ]),
    ]);
    let out = extract_links(&input).unwrap();
    let sources: Vec<&str> = out.sources.iter().map(Key::as_str).collect();
    let destinations: Vec<&str> = out.destinations.iter().map(Key::as_str).collect();
    assert_eq!(sources, vec!["z", "a", "m"]);
    assert_eq!(destinations, vec!["y", "x"]);
    assert_eq!(out.links.len(), 4);
}

#[test]
fn extract_links_keeps_duplicate_pairs_as_separate_links() {
    let input = set_of(&[("a", "b", Some(5.0)), ("a", "b", Some(3.0))]);
    let out = extract_links(&input).unwrap();
    assert_eq!(out.links.len(), 2);
    assert_eq!(out.total_value(), 8.0);
}

#[test]
fn extract_links_all_zero_is_insufficient_data() {
    let input = set_of(&[("a", "b", Some(0.0)), ("c", "d", None)]);
    let err = extract_links(&input).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { .. }), "{err}");
    assert_eq!(
        err.to_string(),
        "Not enough data: every link is equal to zero - nothing to show"
    );
}

#[test]
fn extract_links_empty_input_is_insufficient_data() {
    let err = extract_links(&SeriesSet::default()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { .. }));
}

#[test]
fn extract_links_rejects_unbucketed_source() {
    let input = set_of(&[("_all", "b", Some(4.0))]);
    let err = extract_links(&input).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { .. }));
}

#[test]
fn extract_links_rejects_non_finite_values() {
    let input = set_of(&[("a", "b", Some(f64::INFINITY))]);
    let err = extract_links(&input).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn node_keys_union_collapses_shared_keys() {
    let input = set_of(&[("a", "b", Some(1.0)), ("b", "c", Some(1.0))]);
    let out = extract_links(&input).unwrap();
    let keys: Vec<&str> = out.node_keys().into_iter().map(Key::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}
