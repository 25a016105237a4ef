use std::f64::consts::TAU;

use dsmc_core::{Particle, dot};
use rand::Rng;

use crate::grid::SpatialGrid;
use crate::streams::StepStreams;

/// Stochastic collision pass over the ensemble.
///
/// Strategies mutate velocities in place and leave positions untouched. The
/// grid passed in must have been rebuilt from the current positions.
pub trait CollisionStrategy {
    fn collide(&self, particles: &mut [Particle], grid: &SpatialGrid, streams: &StepStreams);

    /// Name used in logs and snapshots of run parameters.
    fn name(&self) -> &'static str;
}

/// Reference DSMC collision model: isotropic elastic scattering between
/// random pairs drawn within each grid cell.
///
/// A cell with `n` members performs `n / 2` pair draws. The member list is
/// not reduced between draws, so in a populous cell one particle can
/// scatter more than once per step. Each scattering keeps the pair's
/// center-of-mass velocity and relative speed, randomizing only the
/// direction of the relative velocity.
pub struct IsotropicScatter;

impl CollisionStrategy for IsotropicScatter {
    fn collide(&self, particles: &mut [Particle], grid: &SpatialGrid, streams: &StepStreams) {
        for (ci, cell) in grid.iter_cells().enumerate() {
            let n = cell.len();
            if n < 2 {
                continue;
            }
            let mut rng = streams.cell_stream(ci);
            for _ in 0..n / 2 {
                let (a, b) = draw_distinct_pair(n, &mut rng);
                scatter_pair(particles, cell[a], cell[b], &mut rng);
            }
        }
    }

    fn name(&self) -> &'static str {
        "isotropic-scatter"
    }
}

/// Non-physical baseline: pairs particles uniformly across the whole
/// ensemble, ignoring spatial locality, and swaps their velocities.
/// Useful only as a cheap regression reference.
pub struct NaiveSwap;

impl CollisionStrategy for NaiveSwap {
    fn collide(&self, particles: &mut [Particle], _grid: &SpatialGrid, streams: &StepStreams) {
        let n = particles.len();
        if n < 2 {
            return;
        }
        let mut rng = streams.ensemble_stream();
        for _ in 0..n / 2 {
            let (a, b) = draw_distinct_pair(n, &mut rng);
            let held = particles[a].velocity;
            particles[a].velocity = particles[b].velocity;
            particles[b].velocity = held;
        }
    }

    fn name(&self) -> &'static str {
        "naive-swap"
    }
}

/// Two distinct slots drawn uniformly without replacement from `0..n`.
fn draw_distinct_pair(n: usize, rng: &mut impl Rng) -> (usize, usize) {
    debug_assert!(n >= 2);
    let a = rng.gen_range(0..n);
    let mut b = rng.gen_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Isotropic elastic collision between particles `i` and `j`.
///
/// Same-velocity pairs are skipped: zero relative speed admits no
/// scattering direction, and there is no momentum to exchange.
fn scatter_pair(particles: &mut [Particle], i: usize, j: usize, rng: &mut impl Rng) {
    let v1 = particles[i].velocity;
    let v2 = particles[j].velocity;
    let rel = [v1[0] - v2[0], v1[1] - v2[1]];
    let speed = dot(rel, rel).sqrt();
    if speed == 0.0 {
        return;
    }

    let theta = rng.gen_range(0.0..TAU);
    let cm = [(v1[0] + v2[0]) * 0.5, (v1[1] + v2[1]) * 0.5];
    let rel_new = [speed * theta.cos(), speed * theta.sin()];

    particles[i].velocity = [cm[0] + rel_new[0] * 0.5, cm[1] + rel_new[1] * 0.5];
    particles[j].velocity = [cm[0] - rel_new[0] * 0.5, cm[1] - rel_new[1] * 0.5];
}
