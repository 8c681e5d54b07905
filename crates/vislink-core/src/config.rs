use serde_json::{Map, Value, json};

/// Render configuration: a JSON object addressed with dotted paths (`network.charge`).
#[derive(Debug, Clone, PartialEq)]
pub struct VislinkConfig(Value);

impl Default for VislinkConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl VislinkConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Built-in defaults for every diagram kind.
    pub fn defaults() -> Self {
        Self(json!({
            "chord": {
                "width": 600.0,
                "height": 600.0,
                "padding": 0.05,
                "sortSubgroupsDescending": true
            },
            "network": {
                "width": 960.0,
                "height": 500.0,
                "charge": -150.0,
                "linkDistance": 50.0,
                "linkStrength": 1.0,
                "gravity": 0.1,
                "friction": 0.9,
                "alpha": 0.1,
                "alphaDecay": 0.99,
                "alphaMin": 0.001,
                "maxIterations": 150,
                "seed": 0
            },
            "radar": {
                "width": 500.0,
                "height": 500.0,
                "rangeLow": 0.05,
                "rangeHigh": 0.9,
                "maxSplits": 8,
                "minAxes": 3,
                "levels": 10,
                "axisLabelFactor": 1.05
            }
        }))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut cfg = Self::defaults();
        cfg.deep_merge(overrides);
        cfg
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.lookup(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
    }

    pub fn get_u64(&self, dotted_path: &str) -> Option<u64> {
        let v = self.lookup(dotted_path)?;
        v.as_u64()
            .or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.lookup(dotted_path)?.as_bool()
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.lookup(dotted_path)?.as_str()
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    pub fn radar(&self) -> RadarOptions {
        let d = RadarOptions::default();
        RadarOptions {
            range_low: self.get_f64("radar.rangeLow").unwrap_or(d.range_low),
            range_high: self.get_f64("radar.rangeHigh").unwrap_or(d.range_high),
            max_splits: self
                .get_u64("radar.maxSplits")
                .map(|n| (n as usize).min(crate::radar::MAX_SPLITS))
                .unwrap_or(d.max_splits),
            min_axes: self
                .get_u64("radar.minAxes")
                .map(|n| (n as usize).max(crate::radar::MIN_AXES))
                .unwrap_or(d.min_axes),
        }
    }

    pub fn chord(&self) -> ChordOptions {
        let d = ChordOptions::default();
        ChordOptions {
            width: self.get_f64("chord.width").unwrap_or(d.width),
            height: self.get_f64("chord.height").unwrap_or(d.height),
            padding: self.get_f64("chord.padding").unwrap_or(d.padding),
            sort_subgroups_descending: self
                .get_bool("chord.sortSubgroupsDescending")
                .unwrap_or(d.sort_subgroups_descending),
        }
    }

    pub fn network(&self) -> NetworkOptions {
        let d = NetworkOptions::default();
        NetworkOptions {
            width: self.get_f64("network.width").unwrap_or(d.width),
            height: self.get_f64("network.height").unwrap_or(d.height),
            charge: self.get_f64("network.charge").unwrap_or(d.charge),
            link_distance: self
                .get_f64("network.linkDistance")
                .unwrap_or(d.link_distance),
            link_strength: self
                .get_f64("network.linkStrength")
                .unwrap_or(d.link_strength),
            gravity: self.get_f64("network.gravity").unwrap_or(d.gravity),
            friction: self.get_f64("network.friction").unwrap_or(d.friction),
            alpha: self.get_f64("network.alpha").unwrap_or(d.alpha),
            alpha_decay: self.get_f64("network.alphaDecay").unwrap_or(d.alpha_decay),
            alpha_min: self.get_f64("network.alphaMin").unwrap_or(d.alpha_min),
            max_iterations: self
                .get_u64("network.maxIterations")
                .map(|n| n as usize)
                .unwrap_or(d.max_iterations),
            seed: self.get_u64("network.seed").unwrap_or(d.seed),
        }
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

/// Radar normalization bounds and shape limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarOptions {
    pub range_low: f64,
    pub range_high: f64,
    /// More splits than this are rejected; the polygons become unreadable. Never above 8.
    pub max_splits: usize,
    /// A radar shape needs at least a triangle. Never below 3.
    pub min_axes: usize,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            range_low: 0.05,
            range_high: 0.9,
            max_splits: crate::radar::MAX_SPLITS,
            min_axes: crate::radar::MIN_AXES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordOptions {
    pub width: f64,
    pub height: f64,
    /// Angular gap between neighboring groups, in radians.
    pub padding: f64,
    pub sort_subgroups_descending: bool,
}

impl Default for ChordOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            padding: 0.05,
            sort_subgroups_descending: true,
        }
    }
}

/// Bounding box and physics parameters for the network layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkOptions {
    pub width: f64,
    pub height: f64,
    /// Negative values repel.
    pub charge: f64,
    pub link_distance: f64,
    pub link_strength: f64,
    pub gravity: f64,
    pub friction: f64,
    pub alpha: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
    pub max_iterations: usize,
    pub seed: u64,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            charge: -150.0,
            link_distance: 50.0,
            link_strength: 1.0,
            gravity: 0.1,
            friction: 0.9,
            alpha: 0.1,
            alpha_decay: 0.99,
            alpha_min: 1e-3,
            max_iterations: 150,
            seed: 0,
        }
    }
}
