// Physical constants and default simulation parameters.
// Positions are in units of the domain side length, velocities follow from
// the Maxwell-Boltzmann draw, so only the Boltzmann constant is physical.

/// Boltzmann constant in J/K
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Default number of particles in the ensemble
pub const DEFAULT_NUM_PARTICLES: usize = 1_000;

/// Default side length of the square domain
pub const DEFAULT_DOMAIN_SIZE: f64 = 1.0;

/// Default gas temperature in Kelvin
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Default time step
pub const DEFAULT_DT: f64 = 0.001;

/// Default grid resolution (cells per axis)
pub const DEFAULT_NUM_CELLS: usize = 10;

/// Default particle mass
pub const DEFAULT_PARTICLE_MASS: f64 = 1.0;

/// Default cadence of macroscopic sampling, in steps
pub const DEFAULT_SAMPLE_INTERVAL: u64 = 10;
