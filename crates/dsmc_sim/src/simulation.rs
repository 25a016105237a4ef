use dsmc_core::{Error, Particle, Result, SimConfig};
use dsmc_physics::{
    CollisionStrategy, IsotropicScatter, MacroSample, SpatialGrid, StepStreams, boundary,
    ensemble::maxwell_boltzmann_ensemble, sample_macroscopic,
};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Driver lifecycle. `Finished` is terminal: it is reached when a bounded
/// `run` completes, after which the driver holds no further obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Idle,
    Running,
    Finished,
}

/// The simulation driver: owns the ensemble and the grid for the run's
/// duration and executes the per-step pipeline
/// motion → boundary → grid rebuild → collisions.
///
/// The phase order is load-bearing: the collision pass must observe the
/// grid rebuilt from post-boundary positions.
pub struct Simulation {
    config: SimConfig,
    particles: Vec<Particle>,
    grid: SpatialGrid,
    strategy: Box<dyn CollisionStrategy>,
    state: SimState,
    step_count: u64,
}

impl Simulation {
    /// Build a simulation with the reference isotropic-scatter collision
    /// model and a freshly drawn Maxwell-Boltzmann ensemble.
    ///
    /// Errors: `Error::InvalidConfig` from configuration validation.
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_strategy(config, Box::new(IsotropicScatter))
    }

    /// Build a simulation with an explicit collision strategy.
    pub fn with_strategy(config: SimConfig, strategy: Box<dyn CollisionStrategy>) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = maxwell_boltzmann_ensemble(&config, &mut rng)?;
        Ok(Self::assemble(config, particles, 0, strategy))
    }

    /// Rebuild a driver from previously captured state (e.g. a snapshot).
    /// The ensemble length must match `config.num_particles`.
    pub fn from_parts(
        config: SimConfig,
        particles: Vec<Particle>,
        step_count: u64,
    ) -> Result<Self> {
        config.validate()?;
        if particles.len() != config.num_particles {
            return Err(Error::InvalidConfig(format!(
                "ensemble length {} does not match num_particles {}",
                particles.len(),
                config.num_particles
            )));
        }
        Ok(Self::assemble(
            config,
            particles,
            step_count,
            Box::new(IsotropicScatter),
        ))
    }

    fn assemble(
        config: SimConfig,
        particles: Vec<Particle>,
        step_count: u64,
        strategy: Box<dyn CollisionStrategy>,
    ) -> Self {
        let grid = SpatialGrid::new(config.domain_size, config.num_cells);
        Self {
            config,
            particles,
            grid,
            strategy,
            state: SimState::Idle,
            step_count,
        }
    }

    /// Advance exactly one step. This is the narrow per-frame API for
    /// external consumers (e.g. a renderer stepping once per frame and then
    /// querying `positions`).
    ///
    /// Returns `false` without stepping once the driver is `Finished`.
    pub fn step(&mut self) -> bool {
        if self.state == SimState::Finished {
            return false;
        }
        self.state = SimState::Running;
        self.advance_step();
        true
    }

    /// Execute `num_steps` pipeline steps, emitting a macroscopic sample to
    /// the log sink every `sample_interval` steps, then transition to
    /// `Finished`.
    ///
    /// Errors: `Error::InvalidState` if the driver already finished a run.
    pub fn run(&mut self, num_steps: u64) -> Result<()> {
        if self.state == SimState::Finished {
            return Err(Error::InvalidState("run called on a finished simulation"));
        }
        self.state = SimState::Running;
        for _ in 0..num_steps {
            let step = self.step_count;
            self.advance_step();
            if step % self.config.sample_interval == 0 {
                let sample = sample_macroscopic(&self.particles);
                info!(
                    "step {step}: mean velocity ({:.6e}, {:.6e}), temperature {:.6e}",
                    sample.mean_velocity[0], sample.mean_velocity[1], sample.temperature
                );
            }
        }
        self.state = SimState::Finished;
        Ok(())
    }

    fn advance_step(&mut self) {
        let dt = self.config.dt;
        for particle in &mut self.particles {
            particle.advance(dt);
        }
        boundary::apply_reflective(&mut self.particles, self.config.domain_size);
        self.grid.rebuild(&self.particles);

        let streams = StepStreams::new(self.config.seed, self.step_count);
        self.strategy.collide(&mut self.particles, &self.grid, &streams);

        self.step_count += 1;
    }

    /// Macroscopic aggregates of the current ensemble.
    pub fn sample(&self) -> MacroSample {
        sample_macroscopic(&self.particles)
    }

    /// Current positions, one `(x, y)` pair per particle, in ensemble order.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Read access to the full ensemble.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Number of steps executed so far (counts across `run` and `step`).
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Name of the active collision strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_simulation_starts_idle() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(sim.state(), SimState::Idle);
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.particles().len(), SimConfig::default().num_particles);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = SimConfig {
            num_cells: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn step_transitions_idle_to_running() {
        let mut sim = Simulation::new(SimConfig {
            num_particles: 16,
            ..SimConfig::default()
        })
        .unwrap();
        assert!(sim.step());
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.step_count(), 1);
    }

    #[test]
    fn run_reaches_finished_and_refuses_a_second_run() {
        let mut sim = Simulation::new(SimConfig {
            num_particles: 16,
            ..SimConfig::default()
        })
        .unwrap();
        sim.run(5).unwrap();
        assert_eq!(sim.state(), SimState::Finished);
        assert_eq!(sim.step_count(), 5);
        assert!(sim.run(1).is_err());
        assert!(!sim.step());
        assert_eq!(sim.step_count(), 5);
    }

    #[test]
    fn from_parts_requires_matching_ensemble_length() {
        let config = SimConfig {
            num_particles: 3,
            ..SimConfig::default()
        };
        let particles = vec![Particle::new([0.5, 0.5], [0.0, 0.0]); 2];
        assert!(Simulation::from_parts(config, particles, 0).is_err());
    }

    #[test]
    fn positions_reports_one_pair_per_particle() {
        let config = SimConfig {
            num_particles: 8,
            ..SimConfig::default()
        };
        let sim = Simulation::new(config).unwrap();
        let positions = sim.positions();
        assert_eq!(positions.len(), 8);
        for (pos, particle) in positions.iter().zip(sim.particles()) {
            assert_eq!(*pos, particle.position);
        }
    }
}
