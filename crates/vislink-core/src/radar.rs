use crate::config::RadarOptions;
use crate::input::SeriesSet;
use crate::key::Key;
use crate::scale::LinearScale;
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;

/// Hard cap on splits. Configuration may lower it, never raise it.
pub const MAX_SPLITS: usize = 8;
/// Hard floor on axes. Configuration may raise it, never lower it.
pub const MIN_AXES: usize = 3;

/// `(min_axes, max_splits)` after clamping the configured values to the hard limits.
fn limits(opts: &RadarOptions) -> (usize, usize) {
    (opts.min_axes.max(MIN_AXES), opts.max_splits.min(MAX_SPLITS))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarEntry {
    pub axis: String,
    pub normalized_value: f64,
    pub raw_value: f64,
}

/// One polygon: a split with one entry per axis, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub split: Key,
    pub entries: Vec<RadarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarModel {
    pub splits: Vec<Key>,
    pub axes: Vec<String>,
    pub series: Vec<RadarSeries>,
    /// Per-axis maximum of the raw values (floored at zero).
    pub axis_max: Vec<f64>,
}

/// Normalizes a radar payload where every series is one axis (one metric aggregation) and every
/// record within it is one split.
///
/// Splits come from the first axis in record order; the other axes are matched by split key, and
/// a split missing from an axis reads as zero.
pub fn normalize_radar(input: &SeriesSet, opts: &RadarOptions) -> Result<RadarModel> {
    let (min_axes, _) = limits(opts);
    let axis_count = input.series.len();
    if axis_count < min_axes {
        return Err(Error::InsufficientAxes {
            count: axis_count,
            min: min_axes,
        });
    }
    let Some(first_axis) = input.series.first() else {
        return Err(Error::insufficient("radar diagrams need at least one axis"));
    };

    let axes: Vec<String> = input
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| s.name().unwrap_or_else(|| format!("axis {}", i + 1)))
        .collect();

    let splits: IndexSet<Key> = first_axis
        .values
        .iter()
        .map(|r| r.x.clone())
        .collect();
    let splits: Vec<Key> = splits.into_iter().collect();

    let raw: Vec<Vec<f64>> = splits
        .iter()
        .map(|split| {
            input
                .series
                .iter()
                .map(|s| {
                    s.values
                        .iter()
                        .find(|r| &r.x == split)
                        .and_then(|r| r.y)
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    normalize_values(splits, axes, &raw, opts)
}

/// Rescales `raw[split][axis]` into the configured range, axis by axis.
///
/// Each axis uses the domain `[0, max]` over all splits. An all-zero axis maps every split onto
/// the lower bound.
pub fn normalize_values(
    splits: Vec<Key>,
    axes: Vec<String>,
    raw: &[Vec<f64>],
    opts: &RadarOptions,
) -> Result<RadarModel> {
    let (min_axes, max_splits) = limits(opts);
    if axes.len() < min_axes {
        return Err(Error::InsufficientAxes {
            count: axes.len(),
            min: min_axes,
        });
    }
    if splits.is_empty() {
        return Err(Error::insufficient("radar diagrams need at least one split"));
    }
    if splits.len() > max_splits {
        return Err(Error::TooManySplits {
            count: splits.len(),
            max: max_splits,
        });
    }
    if raw.len() != splits.len() || raw.iter().any(|row| row.len() != axes.len()) {
        return Err(Error::insufficient(format!(
            "expected {} x {} radar values",
            splits.len(),
            axes.len()
        )));
    }
    if let Some(bad) = raw.iter().flatten().find(|v| !v.is_finite()) {
        return Err(Error::InvalidValue { value: *bad });
    }

    let range = (opts.range_low, opts.range_high);
    let axis_max: Vec<f64> = (0..axes.len())
        .map(|a| raw.iter().map(|row| row[a]).fold(0.0f64, f64::max))
        .collect();
    let scales: Vec<LinearScale> = axis_max
        .iter()
        .map(|&max| LinearScale::new((0.0, max), range))
        .collect();

    let series: Vec<RadarSeries> = splits
        .iter()
        .zip(raw)
        .map(|(split, row)| RadarSeries {
            split: split.clone(),
            entries: axes
                .iter()
                .zip(row)
                .zip(&scales)
                .map(|((axis, &value), scale)| RadarEntry {
                    axis: axis.clone(),
                    normalized_value: scale.map(value.max(0.0)),
                    raw_value: value,
                })
                .collect(),
        })
        .collect();

    tracing::debug!(
        splits = splits.len(),
        axes = axes.len(),
        "normalized radar values"
    );

    Ok(RadarModel {
        splits,
        axes,
        series,
        axis_max,
    })
}
