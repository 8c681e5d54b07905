pub mod force;
mod rng;

use crate::error::{Error, Result};

/// Simulation parameters.
///
/// Defaults follow the classic d3 v3 force layout used by relation diagrams: strong repulsion,
/// short springs, weak gravity, and a slow alpha decay cut off by the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceOptions {
    /// Bounding box. Gravity pulls toward its center and positions are clamped inside it.
    pub width: f64,
    pub height: f64,
    /// Pairwise charge. Negative values repel.
    pub charge: f64,
    /// Spring rest length.
    pub link_distance: f64,
    pub link_strength: f64,
    pub gravity: f64,
    /// Velocity damping applied every tick, in `[0, 1]`.
    pub friction: f64,
    /// Starting temperature.
    pub alpha: f64,
    /// Multiplier applied to `alpha` after each tick, in `(0, 1)`.
    pub alpha_decay: f64,
    /// The solve converges once `alpha` drops below this.
    pub alpha_min: f64,
    pub max_iterations: usize,
    pub random_seed: u64,
    /// Scatter non-fixed nodes uniformly over the box before the first tick. When `false`, the
    /// positions already on the nodes are the starting state.
    pub randomize: bool,
}

impl Default for ForceOptions {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            charge: -150.0,
            link_distance: 50.0,
            link_strength: 1.0,
            gravity: 0.1,
            friction: 0.9,
            alpha: 0.1,
            alpha_decay: 0.99,
            alpha_min: 1e-3,
            max_iterations: 150,
            random_seed: 0,
            randomize: true,
        }
    }
}

impl ForceOptions {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("charge", self.charge),
            ("link_distance", self.link_distance),
            ("link_strength", self.link_strength),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("alpha", self.alpha),
            ("alpha_decay", self.alpha_decay),
            ("alpha_min", self.alpha_min),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.link_distance < 0.0 {
            return Err(invalid("link_distance must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction must lie in [0, 1]"));
        }
        if !(self.alpha_decay > 0.0 && self.alpha_decay < 1.0) {
            return Err(invalid("alpha_decay must lie in (0, 1)"));
        }
        if self.alpha < 0.0 || self.alpha_min < 0.0 {
            return Err(invalid("alpha and alpha_min must not be negative"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidOptions {
        message: message.into(),
    }
}
