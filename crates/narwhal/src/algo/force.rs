use crate::algo::ForceOptions;
use crate::algo::rng::XorShift64Star;
use crate::error::{Error, Result};
use crate::graph::{Graph, LayoutResult};
use nalgebra as na;

type Vec2 = na::Vector2<f64>;

// Below this squared distance two nodes count as coincident and get a random nudge.
const MIN_DIST2: f64 = 1e-6;

pub fn layout(mut graph: Graph, opts: &ForceOptions) -> Result<LayoutResult> {
    opts.validate()?;
    graph.validate()?;
    // Positions taken as-is must be usable as a starting state.
    if let Some(node) = graph
        .nodes
        .iter()
        .position(|n| (n.fixed || !opts.randomize) && !(n.x.is_finite() && n.y.is_finite()))
    {
        return Err(Error::NonFinitePosition { node });
    }

    let mut sim = Simulation::new(&graph, opts);

    if graph.nodes.len() <= 1 || graph.edges.is_empty() {
        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "degenerate graph, skipping force simulation"
        );
        sim.write_back(&mut graph);
        return Ok(LayoutResult {
            graph,
            iterations: 0,
            alpha: sim.alpha,
            converged: true,
        });
    }

    let mut iterations = 0usize;
    while sim.alpha >= opts.alpha_min && iterations < opts.max_iterations {
        sim.tick(opts);
        iterations += 1;
        tracing::trace!(iteration = iterations, alpha = sim.alpha, "force tick");
    }
    let converged = sim.alpha < opts.alpha_min;

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        iterations,
        alpha = sim.alpha,
        converged,
        "force layout finished"
    );

    sim.write_back(&mut graph);
    Ok(LayoutResult {
        graph,
        iterations,
        alpha: sim.alpha,
        converged,
    })
}

/// Mutable solver state for one `layout` call. Created from the graph, ticked in place, then
/// copied back onto the graph's nodes.
struct Simulation {
    pos: Vec<Vec2>,
    vel: Vec<Vec2>,
    fixed: Vec<bool>,
    /// Edge endpoints with self-loops removed.
    springs: Vec<(usize, usize)>,
    degree: Vec<f64>,
    alpha: f64,
    center: Vec2,
    bounds: Vec2,
    rng: XorShift64Star,
    forces: Vec<Vec2>,
}

impl Simulation {
    fn new(graph: &Graph, opts: &ForceOptions) -> Self {
        let n = graph.nodes.len();
        let mut rng = XorShift64Star::new(opts.random_seed);

        let mut pos: Vec<Vec2> = Vec::with_capacity(n);
        let mut vel: Vec<Vec2> = Vec::with_capacity(n);
        let mut fixed: Vec<bool> = Vec::with_capacity(n);
        for node in &graph.nodes {
            // Drawn for every node so the stream stays keyed by node index.
            let rx = rng.next_f64_unit();
            let ry = rng.next_f64_unit();
            let p = if node.fixed || !opts.randomize {
                Vec2::new(node.x, node.y)
            } else {
                Vec2::new(rx * opts.width, ry * opts.height)
            };
            pos.push(p);
            vel.push(if node.fixed {
                Vec2::zeros()
            } else {
                Vec2::new(node.vx, node.vy)
            });
            fixed.push(node.fixed);
        }

        let mut degree = vec![0.0f64; n];
        let springs: Vec<(usize, usize)> = graph
            .edges
            .iter()
            .filter(|e| e.source != e.target)
            .map(|e| {
                degree[e.source] += 1.0;
                degree[e.target] += 1.0;
                (e.source, e.target)
            })
            .collect();

        Self {
            pos,
            vel,
            fixed,
            springs,
            degree,
            alpha: opts.alpha,
            center: Vec2::new(opts.width / 2.0, opts.height / 2.0),
            bounds: Vec2::new(opts.width, opts.height),
            rng,
            forces: vec![Vec2::zeros(); n],
        }
    }

    fn tick(&mut self, opts: &ForceOptions) {
        let alpha = self.alpha;
        for f in &mut self.forces {
            *f = Vec2::zeros();
        }

        self.apply_springs(alpha, opts);
        self.apply_charge(alpha, opts);
        self.apply_gravity(alpha, opts);

        for i in 0..self.pos.len() {
            if self.fixed[i] {
                self.vel[i] = Vec2::zeros();
                continue;
            }
            self.vel[i] = (self.vel[i] + self.forces[i]) * opts.friction;
            let next = self.pos[i] + self.vel[i];
            self.pos[i] = Vec2::new(
                next.x.clamp(0.0, self.bounds.x),
                next.y.clamp(0.0, self.bounds.y),
            );
        }

        self.alpha *= opts.alpha_decay;
    }

    /// Pulls (or pushes) each edge's endpoints toward `link_distance`. The correction is split
    /// by degree so hubs move less than leaves.
    fn apply_springs(&mut self, alpha: f64, opts: &ForceOptions) {
        for idx in 0..self.springs.len() {
            let (s, t) = self.springs[idx];
            let mut d = self.pos[t] - self.pos[s];
            let mut dist = d.norm();
            if dist * dist < MIN_DIST2 {
                d = self.jitter();
                dist = d.norm();
            }
            let l = alpha * opts.link_strength * (dist - opts.link_distance) / dist;
            let pull = d * l;
            let share = self.degree[s] / (self.degree[s] + self.degree[t]);
            self.forces[t] -= pull * share;
            self.forces[s] += pull * (1.0 - share);
        }
    }

    /// All-pairs charge; magnitude falls off with distance.
    fn apply_charge(&mut self, alpha: f64, opts: &ForceOptions) {
        if opts.charge == 0.0 {
            return;
        }
        let n = self.pos.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut d = self.pos[j] - self.pos[i];
                let mut dist2 = d.norm_squared();
                if dist2 < MIN_DIST2 {
                    d = self.jitter();
                    dist2 = d.norm_squared().max(MIN_DIST2);
                }
                let k = alpha * opts.charge / dist2;
                self.forces[i] += d * k;
                self.forces[j] -= d * k;
            }
        }
    }

    fn apply_gravity(&mut self, alpha: f64, opts: &ForceOptions) {
        let k = alpha * opts.gravity;
        if k == 0.0 {
            return;
        }
        for (f, p) in self.forces.iter_mut().zip(&self.pos) {
            *f += (self.center - p) * k;
        }
    }

    fn jitter(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.next_f64_signed() * 1e-2,
            self.rng.next_f64_signed() * 1e-2,
        )
    }

    fn write_back(&self, graph: &mut Graph) {
        for ((node, p), v) in graph.nodes.iter_mut().zip(&self.pos).zip(&self.vel) {
            node.x = p.x;
            node.y = p.y;
            node.vx = v.x;
            node.vy = v.y;
        }
    }
}
