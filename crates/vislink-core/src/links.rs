//! Flattening of per-series records into weighted links.

use crate::input::{SeriesSet, UNBUCKETED_KEY};
use crate::key::Key;
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;

/// A weighted relation between two keys. `value` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub source: Key,
    pub destination: Key,
    pub value: f64,
}

impl Link {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// Output of [`extract_links`]: both key sets keep first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedLinks {
    pub sources: Vec<Key>,
    pub destinations: Vec<Key>,
    pub links: Vec<Link>,
    /// Records dropped because their value was zero or missing.
    pub skipped: usize,
}

impl ExtractedLinks {
    /// Union of source and destination keys, first-seen order, sources first.
    pub fn node_keys(&self) -> IndexSet<&Key> {
        self.sources.iter().chain(self.destinations.iter()).collect()
    }

    pub fn total_value(&self) -> f64 {
        self.links.iter().map(|l| l.value).sum()
    }
}

pub fn extract_links(input: &SeriesSet) -> Result<ExtractedLinks> {
    let mut sources: IndexSet<Key> = IndexSet::new();
    let mut destinations: IndexSet<Key> = IndexSet::new();
    let mut links: Vec<Link> = Vec::new();
    let mut skipped = 0usize;

    for record in input.records() {
        if record.x.as_str() == UNBUCKETED_KEY {
            return Err(Error::insufficient(
                "relation diagrams require Source and Destination to be set",
            ));
        }
        let value = match record.y {
            Some(v) if v == 0.0 => {
                skipped += 1;
                continue;
            }
            None => {
                skipped += 1;
                continue;
            }
            Some(v) if !v.is_finite() => return Err(Error::InvalidValue { value: v }),
            Some(v) => v,
        };

        sources.insert(record.x.clone());
        destinations.insert(record.label.clone());
        links.push(Link {
            source: record.x.clone(),
            destination: record.label.clone(),
            value,
        });
    }

    if sources.is_empty() || destinations.is_empty() {
        return Err(Error::insufficient(
            "every link is equal to zero - nothing to show",
        ));
    }

    tracing::debug!(
        links = links.len(),
        sources = sources.len(),
        destinations = destinations.len(),
        skipped,
        "extracted links"
    );

    Ok(ExtractedLinks {
        sources: sources.into_iter().collect(),
        destinations: destinations.into_iter().collect(),
        links,
        skipped,
    })
}
