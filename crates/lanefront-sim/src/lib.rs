//! Simulation engine for LANEFRONT.
//!
//! Owns the hecs unit world, steps economy, spawning and combat once per
//! frame, and produces FrameSnapshots for whatever drives it.

pub mod economy;
pub mod engine;
pub mod run;
pub mod spawner;
pub mod structures;
pub mod systems;
pub mod upgrades;
pub mod world_setup;

pub use lanefront_core as core;
pub use engine::SimulationEngine;
