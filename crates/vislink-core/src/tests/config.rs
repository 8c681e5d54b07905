use crate::*;
use serde_json::json;

#[test]
fn defaults_populate_typed_options() {
    let cfg = VislinkConfig::defaults();
    assert_eq!(cfg.radar(), RadarOptions::default());
    assert_eq!(cfg.chord(), ChordOptions::default());
    assert_eq!(cfg.network(), NetworkOptions::default());
}

#[test]
fn overrides_merge_over_defaults() {
    let cfg = VislinkConfig::with_overrides(&json!({
        "network": { "width": 300, "charge": -60.5 },
        "radar": { "maxSplits": 4 }
    }));
    let net = cfg.network();
    assert_eq!(net.width, 300.0);
    assert_eq!(net.charge, -60.5);
    assert_eq!(net.height, NetworkOptions::default().height);
    assert_eq!(cfg.radar().max_splits, 4);
    assert_eq!(cfg.radar().min_axes, 3);
}

#[test]
fn set_value_creates_intermediate_objects() {
    let mut cfg = VislinkConfig::empty_object();
    cfg.set_value("chord.padding", json!(0.1));
    assert_eq!(cfg.get_f64("chord.padding"), Some(0.1));
    assert_eq!(cfg.chord().padding, 0.1);
    assert_eq!(cfg.chord().width, ChordOptions::default().width);
}

#[test]
fn set_value_coerces_non_object_root() {
    let mut cfg = VislinkConfig::from_value(json!(42));
    cfg.set_value("network.seed", json!(7));
    assert_eq!(cfg.get_u64("network.seed"), Some(7));
}

#[test]
fn typed_getters_reject_wrong_types() {
    let cfg = VislinkConfig::from_value(json!({ "chord": { "padding": "wide" } }));
    assert_eq!(cfg.get_f64("chord.padding"), None);
    assert_eq!(cfg.get_str("chord.padding"), Some("wide"));
    assert_eq!(cfg.chord().padding, 0.05);
}
