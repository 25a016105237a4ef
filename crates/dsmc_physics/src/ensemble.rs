use dsmc_core::{Error, Particle, Result, SimConfig};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draw the initial particle ensemble for a validated configuration.
///
/// Positions are uniform over the square domain. Velocity components are
/// normal with mean zero and the thermal speed sqrt(2 k_B T / m) as scale,
/// approximating thermal equilibrium at `config.temperature`.
pub fn maxwell_boltzmann_ensemble(
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Particle>> {
    let normal = Normal::new(0.0, config.thermal_speed())
        .map_err(|e| Error::InvalidConfig(format!("velocity distribution: {e}")))?;

    let mut particles = Vec::with_capacity(config.num_particles);
    for _ in 0..config.num_particles {
        let position = [
            rng.gen_range(0.0..config.domain_size),
            rng.gen_range(0.0..config.domain_size),
        ];
        let velocity = [normal.sample(rng), normal.sample(rng)];
        particles.push(Particle::new(position, velocity));
    }
    Ok(particles)
}
