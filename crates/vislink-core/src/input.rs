//! Tabular aggregation results as handed over by the query layer.

use crate::key::{Key, Role};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bucket key emitted by the query layer when no split aggregation is configured.
pub const UNBUCKETED_KEY: &str = "_all";

/// One aggregation bucket: `x` is the source term, `label` the destination term and `y` the metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub x: Key,
    pub label: Key,
    #[serde(default)]
    pub y: Option<f64>,
}

impl ValueRecord {
    pub fn new(x: impl Into<Key>, label: impl Into<Key>, y: Option<f64>) -> Self {
        Self {
            x: x.into(),
            label: label.into(),
            y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub values: Vec<ValueRecord>,
}

impl Series {
    pub fn new(values: Vec<ValueRecord>) -> Self {
        Self {
            label: None,
            values,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Display name of this series: its explicit label, or the label of its first record.
    pub fn name(&self) -> Option<String> {
        self.label
            .clone()
            .or_else(|| self.values.first().map(|v| v.label.to_string()))
    }
}

/// Which bucket field feeds which relation role, in the order the user configured them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketBinding {
    pub role: Role,
    pub field: String,
}

/// Human-readable naming of the series payload. Never used for computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationMeta {
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub bindings: Vec<BucketBinding>,
}

impl RelationMeta {
    pub fn field_for(&self, role: Role) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.role == role)
            .map(|b| b.field.as_str())
    }

    /// Fails when a destination binding is configured ahead of every source binding.
    ///
    /// Relation diagrams infer roles from bucket order, so this must hold before any matrix or
    /// graph is built from the series.
    pub fn check_role_order(&self) -> Result<()> {
        let first_source = self.bindings.iter().position(|b| b.role == Role::Source);
        let first_destination = self
            .bindings
            .iter()
            .position(|b| b.role == Role::Destination);
        match (first_source, first_destination) {
            (Some(s), Some(d)) if d < s => Err(Error::OrderingError {
                message: format!(
                    "destination field `{}` is configured before source field `{}`",
                    self.bindings[d].field, self.bindings[s].field
                ),
            }),
            (None, Some(d)) => Err(Error::OrderingError {
                message: format!(
                    "destination field `{}` is configured without a source field",
                    self.bindings[d].field
                ),
            }),
            _ => Ok(()),
        }
    }
}

/// The full input of one render invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    #[serde(default)]
    pub meta: RelationMeta,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl SeriesSet {
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            meta: RelationMeta::default(),
            series,
        }
    }

    pub fn with_meta(mut self, meta: RelationMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn records(&self) -> impl Iterator<Item = &ValueRecord> {
        self.series.iter().flat_map(|s| s.values.iter())
    }
}
