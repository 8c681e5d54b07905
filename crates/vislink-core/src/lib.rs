#![forbid(unsafe_code)]

//! Relation data model for chord, network and radar diagrams (headless).
//!
//! Takes `(source, destination, value)` aggregation tuples and produces layout-ready structures:
//! - a symmetric adjacency matrix over role-tagged labels (chord)
//! - a weighted node/edge graph (network; positions are solved by `narwhal`)
//! - per-axis normalized radial values (radar)
//!
//! Every transformation is a pure function of its input; nothing persists between calls.

pub mod chord;
pub mod config;
pub mod error;
pub mod input;
pub mod key;
pub mod links;
pub mod network;
pub mod radar;
pub mod scale;

#[cfg(test)]
mod tests;

pub use chord::{ChordMatrix, build_chord_matrix};
pub use config::{ChordOptions, NetworkOptions, RadarOptions, VislinkConfig};
pub use error::{Error, Result};
pub use input::{BucketBinding, RelationMeta, Series, SeriesSet, ValueRecord};
pub use key::{Key, Role, RoleLabel};
pub use links::{ExtractedLinks, Link, extract_links};
pub use network::{GraphEdge, GraphNode, NetworkGraph, Point, build_network_graph};
pub use radar::{RadarEntry, RadarModel, RadarSeries, normalize_radar, normalize_values};
pub use scale::LinearScale;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Chord,
    Network,
    Radar,
}

impl DiagramKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramKind::Chord => "chord",
            DiagramKind::Network => "network",
            DiagramKind::Radar => "radar",
        }
    }
}

impl FromStr for DiagramKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chord" => Ok(Self::Chord),
            "network" | "relation" => Ok(Self::Network),
            "radar" | "spider" => Ok(Self::Radar),
            _ => Err(()),
        }
    }
}

/// Role order check, link extraction and matrix construction in one call.
pub fn chord_from_series(input: &SeriesSet) -> Result<ChordMatrix> {
    input.meta.check_role_order()?;
    let extracted = extract_links(input)?;
    build_chord_matrix(&extracted)
}

/// Role order check, link extraction and graph construction in one call.
pub fn network_from_series(input: &SeriesSet) -> Result<NetworkGraph> {
    input.meta.check_role_order()?;
    let extracted = extract_links(input)?;
    build_network_graph(&extracted)
}

pub fn radar_from_series(input: &SeriesSet, opts: &RadarOptions) -> Result<RadarModel> {
    normalize_radar(input, opts)
}
