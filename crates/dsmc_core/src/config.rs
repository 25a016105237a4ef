use serde::{Deserialize, Serialize};

use crate::constants::{
    BOLTZMANN, DEFAULT_DOMAIN_SIZE, DEFAULT_DT, DEFAULT_NUM_CELLS, DEFAULT_NUM_PARTICLES,
    DEFAULT_PARTICLE_MASS, DEFAULT_SAMPLE_INTERVAL, DEFAULT_TEMPERATURE,
};
use crate::error::{Error, Result};

/// Simulation configuration, immutable once the driver is constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of particles in the ensemble (fixed for the run)
    pub num_particles: usize,
    /// Side length of the square domain
    pub domain_size: f64,
    /// Gas temperature in Kelvin, parameterizes the initial velocity draw
    pub temperature: f64,
    /// Time step
    pub dt: f64,
    /// Grid resolution: cells per axis
    pub num_cells: usize,
    /// Mass of every particle
    pub particle_mass: f64,
    /// Macroscopic sampling cadence, in steps
    pub sample_interval: u64,
    /// Random seed for deterministic runs
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_particles: DEFAULT_NUM_PARTICLES,
            domain_size: DEFAULT_DOMAIN_SIZE,
            temperature: DEFAULT_TEMPERATURE,
            dt: DEFAULT_DT,
            num_cells: DEFAULT_NUM_CELLS,
            particle_mass: DEFAULT_PARTICLE_MASS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Validate all parameters, rejecting anything the engine cannot run with.
    ///
    /// Errors: `Error::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(Error::InvalidConfig("num_particles must be > 0".into()));
        }
        if !self.domain_size.is_finite() || self.domain_size <= 0.0 {
            return Err(Error::InvalidConfig(
                "domain_size must be finite and > 0".into(),
            ));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(Error::InvalidConfig(
                "temperature must be finite and > 0".into(),
            ));
        }
        if !self.dt.is_finite() {
            return Err(Error::InvalidConfig("dt must be finite".into()));
        }
        if self.num_cells == 0 {
            return Err(Error::InvalidConfig("num_cells must be > 0".into()));
        }
        if !self.particle_mass.is_finite() || self.particle_mass <= 0.0 {
            return Err(Error::InvalidConfig(
                "particle_mass must be finite and > 0".into(),
            ));
        }
        if self.sample_interval == 0 {
            return Err(Error::InvalidConfig("sample_interval must be > 0".into()));
        }
        Ok(())
    }

    /// Side length of one grid cell. Positive for any validated config.
    pub fn cell_size(&self) -> f64 {
        self.domain_size / self.num_cells as f64
    }

    /// Thermal speed sqrt(2 k_B T / m), the scale of the initial
    /// Maxwell-Boltzmann velocity components.
    pub fn thermal_speed(&self) -> f64 {
        (2.0 * BOLTZMANN * self.temperature / self.particle_mass).sqrt()
    }
}
