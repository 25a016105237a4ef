use serde::{Deserialize, Serialize};

/// A point particle in the 2-D domain: position and velocity, unit-free mass
/// taken from the configuration. Identity is the index in the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position (x, y)
    pub position: [f64; 2],
    /// Velocity (vx, vy)
    pub velocity: [f64; 2],
}

impl Particle {
    pub fn new(position: [f64; 2], velocity: [f64; 2]) -> Self {
        Self { position, velocity }
    }

    /// Free-flight motion update: position += velocity * dt.
    /// Mutates position only; no constraint on the sign of `dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.position[0] += self.velocity[0] * dt;
        self.position[1] += self.velocity[1] * dt;
    }

    /// Speed |v|.
    #[inline]
    pub fn speed(&self) -> f64 {
        dot(self.velocity, self.velocity).sqrt()
    }
}

/// 2-D dot product.
#[inline]
pub fn dot(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}
