use crate::key::Key;
use crate::links::ExtractedLinks;
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A graph vertex. `position` and `velocity` belong to the layout solver; the builder leaves them
/// at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: Key,
    /// Sum of the values of every link touching this node.
    pub weight: f64,
    pub position: Point,
    pub velocity: Point,
    pub fixed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source_index: usize,
    pub target_index: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl NetworkGraph {
    pub fn index_of(&self, name: &Key) -> Option<usize> {
        self.nodes.iter().position(|n| &n.name == name)
    }

    /// Pins `name` at `(x, y)`. The solver keeps pinned nodes in place.
    ///
    /// Returns `false` when no node has that name or a coordinate is not finite; the graph is
    /// left untouched in both cases.
    pub fn pin(&mut self, name: &Key, x: f64, y: f64) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        let Some(idx) = self.index_of(name) else {
            return false;
        };
        let node = &mut self.nodes[idx];
        node.position = Point::new(x, y);
        node.velocity = Point::ZERO;
        node.fixed = true;
        true
    }

    /// Indices of nodes sharing an edge with `index`, ascending, without duplicates.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|e| {
                if e.source_index == index {
                    Some(e.target_index)
                } else if e.target_index == index {
                    Some(e.source_index)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Whether `a` and `b` share an edge in either direction. A node is connected to itself.
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        a == b
            || self.edges.iter().any(|e| {
                (e.source_index == a && e.target_index == b)
                    || (e.source_index == b && e.target_index == a)
            })
    }

    pub fn total_node_weight(&self) -> f64 {
        self.nodes.iter().map(|n| n.weight).sum()
    }

    pub fn total_edge_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

pub fn build_network_graph(extracted: &ExtractedLinks) -> Result<NetworkGraph> {
    if let Some(link) = extracted.links.iter().find(|l| l.is_self_loop()) {
        return Err(Error::ReflexiveRelationship {
            key: link.source.to_string(),
        });
    }
    if extracted.links.is_empty() {
        return Err(Error::insufficient("network diagrams need at least one link"));
    }

    let keys: IndexSet<&Key> = extracted.node_keys();
    let mut nodes: Vec<GraphNode> = keys
        .iter()
        .map(|k| GraphNode {
            name: (*k).clone(),
            weight: 0.0,
            position: Point::ZERO,
            velocity: Point::ZERO,
            fixed: false,
        })
        .collect();

    let mut edges: Vec<GraphEdge> = Vec::with_capacity(extracted.links.len());
    for link in &extracted.links {
        let (Some(s), Some(t)) = (
            keys.get_index_of(&link.source),
            keys.get_index_of(&link.destination),
        ) else {
            return Err(Error::insufficient(format!(
                "link {} -> {} references a key outside the extracted key sets",
                link.source, link.destination
            )));
        };
        nodes[s].weight += link.value;
        nodes[t].weight += link.value;
        edges.push(GraphEdge {
            source_index: s,
            target_index: t,
            weight: link.value,
        });
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "built network graph"
    );

    Ok(NetworkGraph { nodes, edges })
}
