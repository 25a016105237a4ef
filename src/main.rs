//! Headless demo driver: seed a thermal ensemble, run a bounded simulation
//! and leave a snapshot of the final state on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use dsmc_core::SimConfig;
use dsmc_sim::Simulation;
use dsmc_storage::{SimSnapshot, save_snapshot};
use log::{error, info};

const NUM_STEPS: u64 = 1_000;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    info!(
        "dsmc: {} particles, domain {} x {}, {} cells/axis, dt {}, seed {}",
        config.num_particles,
        config.domain_size,
        config.domain_size,
        config.num_cells,
        config.dt,
        config.seed
    );

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: SimConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(config)?;
    sim.run(NUM_STEPS)?;

    let sample = sim.sample();
    info!(
        "finished after {} steps ({}): mean velocity ({:.6e}, {:.6e}), temperature {:.6e}",
        sim.step_count(),
        sim.strategy_name(),
        sample.mean_velocity[0],
        sample.mean_velocity[1],
        sample.temperature
    );

    let path = PathBuf::from("target/dsmc_final.bin");
    let snapshot = SimSnapshot {
        config: sim.config().clone(),
        step_count: sim.step_count(),
        particles: sim.particles().to_vec(),
    };
    save_snapshot(&snapshot, &path)?;
    info!("snapshot written to {}", path.display());

    Ok(())
}
