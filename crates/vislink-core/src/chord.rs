use crate::key::{Key, Role, RoleLabel};
use crate::links::ExtractedLinks;
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Square weighted adjacency over role-tagged labels.
///
/// Labels list every source key first, then every destination key. `matrix[i][j] == matrix[j][i]`
/// holds for every pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordMatrix {
    labels: Vec<RoleLabel>,
    matrix: Vec<Vec<f64>>,
}

impl ChordMatrix {
    pub fn labels(&self) -> &[RoleLabel] {
        &self.labels
    }

    /// Rows of the square matrix, one per label.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn label(&self, index: usize) -> Option<&RoleLabel> {
        self.labels.get(index)
    }

    /// `matrix[i][j]`, or zero when either index is out of range.
    pub fn cell(&self, i: usize, j: usize) -> f64 {
        self.matrix
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, key: &Key, role: Role) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l.role == role && &l.key == key)
    }

    pub fn value(&self, source: &Key, destination: &Key) -> f64 {
        match (
            self.index_of(source, Role::Source),
            self.index_of(destination, Role::Destination),
        ) {
            (Some(i), Some(j)) => self.cell(i, j),
            _ => 0.0,
        }
    }

    /// Number of leading source-role labels.
    pub fn source_count(&self) -> usize {
        self.labels.iter().take_while(|l| l.is_source()).count()
    }

    pub fn row_sum(&self, index: usize) -> f64 {
        self.matrix.get(index).map(|r| r.iter().sum()).unwrap_or(0.0)
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.matrix.len();
        self.matrix.iter().all(|row| row.len() == n)
            && (0..n).all(|i| (0..n).all(|j| self.cell(i, j) == self.cell(j, i)))
    }
}

pub fn build_chord_matrix(extracted: &ExtractedLinks) -> Result<ChordMatrix> {
    if extracted.sources.is_empty() || extracted.destinations.is_empty() {
        return Err(Error::insufficient("chord diagrams need at least one link"));
    }

    let labels: Vec<RoleLabel> = extracted
        .sources
        .iter()
        .cloned()
        .map(RoleLabel::source)
        .chain(
            extracted
                .destinations
                .iter()
                .cloned()
                .map(RoleLabel::destination),
        )
        .collect();

    let mut index: FxHashMap<&RoleLabel, usize> = FxHashMap::default();
    index.reserve(labels.len());
    for (i, label) in labels.iter().enumerate() {
        index.insert(label, i);
    }

    let n = labels.len();
    let mut matrix = vec![vec![0.0f64; n]; n];
    for link in &extracted.links {
        if link.value < 0.0 {
            return Err(Error::NegativeValue {
                source_key: link.source.to_string(),
                destination_key: link.destination.to_string(),
                value: link.value,
            });
        }
        let row = RoleLabel::source(link.source.clone());
        let col = RoleLabel::destination(link.destination.clone());
        let (Some(&i), Some(&j)) = (index.get(&row), index.get(&col)) else {
            return Err(Error::insufficient(format!(
                "link {} -> {} references a key outside the extracted key sets",
                link.source, link.destination
            )));
        };
        matrix[i][j] += link.value;
        matrix[j][i] += link.value;
    }

    tracing::debug!(labels = n, links = extracted.links.len(), "built chord matrix");

    Ok(ChordMatrix { labels, matrix })
}
