/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (boid, world, params, physics, flock) has no graphics
 * dependencies; the interactive viewer modules are only built with the
 * `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidState};
pub use debug::{DebugInfo, FlockStats};
pub use error::ParamsError;
pub use flock::Flock;
pub use params::SimulationParams;
pub use physics::step;
pub use world::World;

// Define modules
pub mod boid;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod physics;
pub mod world;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod input;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;

// Constants
pub const SEPARATION_FACTOR: f32 = 0.05;
pub const INITIAL_SPEED: f32 = 5.0;
pub const DEFAULT_BOID_COUNT: usize = 100;
pub const POPULATION_STEP: usize = 10;
pub const DEFAULT_WORLD_WIDTH: f32 = 1280.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 720.0;
pub const BOID_SIZE: f32 = 15.0;
