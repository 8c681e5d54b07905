use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` and returns its index.
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
    }

    pub fn validate(&self) -> Result<()> {
        let node_count = self.nodes.len();
        for (edge, e) in self.edges.iter().enumerate() {
            if e.source >= node_count || e.target >= node_count {
                return Err(Error::MissingEndpoint { edge, node_count });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub weight: f64,
    /// Current position. Used as the starting point when the solver does not randomize, and
    /// always kept as-is for fixed nodes.
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fixed: bool,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: 0.0,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            fixed: false,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Fixed at `(x, y)`: the node still pushes and pulls its neighbors but never moves.
    pub fn pinned(self, x: f64, y: f64) -> Self {
        let mut node = self.at(x, y);
        node.fixed = true;
        node
    }

    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// An undirected spring between two node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub graph: Graph,
    /// Ticks actually run.
    pub iterations: usize,
    pub alpha: f64,
    /// `true` when `alpha` dropped below the threshold before the iteration cap.
    pub converged: bool,
}

impl LayoutResult {
    pub fn positions(&self) -> Vec<Point> {
        self.graph.nodes.iter().map(Node::position).collect()
    }
}
