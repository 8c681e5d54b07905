mod chord;
mod config;
mod links;
mod network;

use crate::{Series, SeriesSet, ValueRecord};

/// One series holding `(source, destination, value)` records.
pub(crate) fn set_of(records: &[(&str, &str, Option<f64>)]) -> SeriesSet {
    SeriesSet::new(vec![Series::new(
        records
            .iter()
            .map(|(s, d, v)| ValueRecord::new(*s, *d, *v))
            .collect(),
    )])
}
