use dsmc_core::{Particle, dot};

/// Macroscopic aggregates read from the ensemble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSample {
    /// Vector mean of all velocities
    pub mean_velocity: [f64; 2],
    /// Mean kinetic energy per particle, sum(v.v) / 2N. The drift velocity
    /// is not subtracted, so this is a temperature proxy rather than a
    /// variance-based temperature.
    pub temperature: f64,
}

/// Compute the macroscopic sample. Read-only; never mutates the ensemble.
pub fn sample_macroscopic(particles: &[Particle]) -> MacroSample {
    if particles.is_empty() {
        return MacroSample {
            mean_velocity: [0.0, 0.0],
            temperature: 0.0,
        };
    }

    let n = particles.len() as f64;
    let mut sum_v = [0.0f64, 0.0f64];
    let mut sum_v_sq = 0.0f64;
    for p in particles {
        sum_v[0] += p.velocity[0];
        sum_v[1] += p.velocity[1];
        sum_v_sq += dot(p.velocity, p.velocity);
    }

    MacroSample {
        mean_velocity: [sum_v[0] / n, sum_v[1] / n],
        temperature: sum_v_sq / (2.0 * n),
    }
}
