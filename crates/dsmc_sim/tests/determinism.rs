//! Reproducibility: trajectories are a pure function of the configuration.

use dsmc_core::SimConfig;
use dsmc_physics::NaiveSwap;
use dsmc_sim::Simulation;

#[test]
fn identical_configs_produce_bit_identical_trajectories() {
    let config = SimConfig {
        num_particles: 100,
        seed: 1234,
        ..SimConfig::default()
    };
    let mut first = Simulation::new(config.clone()).unwrap();
    let mut second = Simulation::new(config).unwrap();

    first.run(50).unwrap();
    second.run(50).unwrap();

    assert_eq!(first.particles(), second.particles());
}

#[test]
fn different_seeds_diverge() {
    let base = SimConfig {
        num_particles: 100,
        ..SimConfig::default()
    };
    let sim_a = Simulation::new(SimConfig { seed: 1, ..base.clone() }).unwrap();
    let sim_b = Simulation::new(SimConfig { seed: 2, ..base }).unwrap();
    assert_ne!(sim_a.particles(), sim_b.particles());
}

#[test]
fn frame_stepping_matches_a_bounded_run() {
    // The per-frame step API and run() must walk the same trajectory.
    let config = SimConfig {
        num_particles: 60,
        seed: 9,
        ..SimConfig::default()
    };
    let mut ran = Simulation::new(config.clone()).unwrap();
    let mut stepped = Simulation::new(config).unwrap();

    ran.run(30).unwrap();
    for _ in 0..30 {
        assert!(stepped.step());
    }

    assert_eq!(ran.particles(), stepped.particles());
}

#[test]
fn naive_swap_runs_are_reproducible_too() {
    let config = SimConfig {
        num_particles: 40,
        seed: 77,
        ..SimConfig::default()
    };
    let mut first =
        Simulation::with_strategy(config.clone(), Box::new(NaiveSwap)).unwrap();
    let mut second = Simulation::with_strategy(config, Box::new(NaiveSwap)).unwrap();

    first.run(25).unwrap();
    second.run(25).unwrap();

    assert_eq!(first.particles(), second.particles());
}

#[test]
fn resumed_run_continues_the_same_trajectory() {
    // Stepping 10+10 from a snapshot of the halfway state must equal
    // stepping 20 straight through, because collision streams derive from
    // (seed, step index) rather than from a generator carried across steps.
    let config = SimConfig {
        num_particles: 50,
        seed: 5,
        ..SimConfig::default()
    };
    let mut straight = Simulation::new(config.clone()).unwrap();
    let mut front = Simulation::new(config.clone()).unwrap();

    for _ in 0..10 {
        front.step();
    }
    let mut resumed =
        Simulation::from_parts(config, front.particles().to_vec(), front.step_count()).unwrap();

    for _ in 0..20 {
        straight.step();
    }
    for _ in 0..10 {
        resumed.step();
    }

    assert_eq!(straight.particles(), resumed.particles());
}
