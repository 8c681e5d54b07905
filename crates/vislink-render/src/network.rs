use crate::Result;
use crate::model::{Bounds, NetworkDiagramLayout, NetworkEdgeLayout, NetworkNodeLayout};
use crate::palette::{self, EDGE_DARK, EDGE_LIGHT};
use narwhal::ForceOptions;
use std::f64::consts::PI;
use vislink_core::{LinearScale, NetworkGraph, NetworkOptions, Point};

/// A network graph after the force solve, with solver diagnostics.
#[derive(Debug, Clone)]
pub struct SolvedNetwork {
    pub graph: NetworkGraph,
    pub iterations: usize,
    pub converged: bool,
}

pub fn force_options(opts: &NetworkOptions) -> ForceOptions {
    ForceOptions {
        width: opts.width,
        height: opts.height,
        charge: opts.charge,
        link_distance: opts.link_distance,
        link_strength: opts.link_strength,
        gravity: opts.gravity,
        friction: opts.friction,
        alpha: opts.alpha,
        alpha_decay: opts.alpha_decay,
        alpha_min: opts.alpha_min,
        max_iterations: opts.max_iterations,
        random_seed: opts.seed,
        randomize: true,
    }
}

fn to_force_graph(graph: &NetworkGraph) -> narwhal::Graph {
    let mut g = narwhal::Graph::new();
    for node in &graph.nodes {
        let n = narwhal::Node::new(node.name.as_str()).with_weight(node.weight);
        g.add_node(if node.fixed {
            n.pinned(node.position.x, node.position.y)
        } else {
            n.at(node.position.x, node.position.y)
        });
    }
    for e in &graph.edges {
        g.add_edge(e.source_index, e.target_index, e.weight);
    }
    g
}

fn solved(mut graph: NetworkGraph, result: narwhal::LayoutResult) -> SolvedNetwork {
    for (node, placed) in graph.nodes.iter_mut().zip(&result.graph.nodes) {
        node.position = Point::new(placed.x, placed.y);
        node.velocity = Point::new(placed.vx, placed.vy);
    }
    SolvedNetwork {
        graph,
        iterations: result.iterations,
        converged: result.converged,
    }
}

/// Runs the force solver over `graph`. Pinned nodes keep their coordinates.
pub fn solve_network(graph: NetworkGraph, opts: &NetworkOptions) -> Result<SolvedNetwork> {
    let result = narwhal::layout(to_force_graph(&graph), &force_options(opts))?;
    Ok(solved(graph, result))
}

/// [`solve_network`] on a background worker thread.
pub async fn solve_network_in_background(
    graph: NetworkGraph,
    opts: &NetworkOptions,
) -> Result<SolvedNetwork> {
    let result =
        narwhal::layout_in_background(to_force_graph(&graph), force_options(opts)).await?;
    Ok(solved(graph, result))
}

/// Visual encodings over a solved graph: categorical node colors, node radius from weight, and
/// edge stroke from light gray to black by weight.
pub fn network_diagram(solved: &SolvedNetwork, opts: &NetworkOptions) -> NetworkDiagramLayout {
    let graph = &solved.graph;

    let radius_scale = LinearScale::from_extent(graph.nodes.iter().map(|n| n.weight), (10.0, 100.0));
    let nodes: Vec<NetworkNodeLayout> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let area = radius_scale.map_or(10.0, |s| s.map(n.weight));
            NetworkNodeLayout {
                name: n.name.to_string(),
                weight: n.weight,
                x: n.position.x,
                y: n.position.y,
                radius: (area * PI).sqrt(),
                color: palette::category20(i).to_string(),
                fixed: n.fixed,
            }
        })
        .collect();

    let stroke_scale = LinearScale::from_extent(graph.edges.iter().map(|e| e.weight), (0.0, 1.0));
    let edges: Vec<NetworkEdgeLayout> = graph
        .edges
        .iter()
        .map(|e| {
            let t = stroke_scale.map_or(0.0, |s| s.map(e.weight));
            let at = |i: usize| graph.nodes.get(i).map(|n| n.position).unwrap_or_default();
            let (s, d) = (at(e.source_index), at(e.target_index));
            NetworkEdgeLayout {
                source_index: e.source_index,
                target_index: e.target_index,
                weight: e.weight,
                stroke: EDGE_LIGHT.interpolate(EDGE_DARK, t).to_hex(),
                x1: s.x,
                y1: s.y,
                x2: d.x,
                y2: d.y,
            }
        })
        .collect();

    NetworkDiagramLayout {
        bounds: Some(Bounds::of_size(opts.width, opts.height)),
        width: opts.width,
        height: opts.height,
        iterations: solved.iterations,
        converged: solved.converged,
        nodes,
        edges,
    }
}

pub fn layout_network_diagram(
    graph: NetworkGraph,
    opts: &NetworkOptions,
) -> Result<NetworkDiagramLayout> {
    let solved = solve_network(graph, opts)?;
    Ok(network_diagram(&solved, opts))
}
