/*
 * Flock Module
 *
 * The simulation engine. A Flock owns the boids, the world they live in and
 * the random number generator used to spawn new boids. Parameters are not
 * stored here; the caller passes them into every tick.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::boid::Boid;
use crate::debug::FlockStats;
use crate::params::SimulationParams;
use crate::physics;
use crate::world::World;
use crate::DEFAULT_BOID_COUNT;

pub struct Flock {
    boids: Vec<Boid>,
    world: World,
    rng: StdRng,
}

impl Flock {
    /// Creates a flock of `count` randomly placed boids.
    pub fn new(count: usize, world: World) -> Self {
        Self::with_rng(count, world, StdRng::from_entropy())
    }

    /// Like [`Flock::new`], but spawning is reproducible for a given seed.
    pub fn with_seed(count: usize, world: World, seed: u64) -> Self {
        Self::with_rng(count, world, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, world: World, rng: StdRng) -> Self {
        let mut flock = Self {
            boids: Vec::with_capacity(count),
            world,
            rng,
        };
        flock.add_agents(count);
        flock
    }

    /// Replaces the whole population with `count` fresh boids.
    pub fn initialize(&mut self, count: usize) {
        self.boids.clear();
        self.add_agents(count);
        debug!(count, "flock initialized");
    }

    pub fn reset(&mut self) {
        self.initialize(DEFAULT_BOID_COUNT);
    }

    /// Appends `count` random boids; existing boids are untouched.
    pub fn add_agents(&mut self, count: usize) {
        let world = self.world;
        let rng = &mut self.rng;
        self.boids
            .extend((0..count).map(|_| Boid::random(&mut *rng, &world)));
        debug!(added = count, population = self.boids.len(), "boids added");
    }

    /// Drops the `count` most recently added boids, or all of them if there
    /// are fewer. Returns how many were removed.
    pub fn remove_agents(&mut self, count: usize) -> usize {
        let removed = count.min(self.boids.len());
        self.boids.truncate(self.boids.len() - removed);
        debug!(removed, population = self.boids.len(), "boids removed");
        removed
    }

    /// Grows or shrinks the population by `delta`, never below zero.
    pub fn change_population(&mut self, delta: isize) {
        if delta >= 0 {
            self.add_agents(delta.unsigned_abs());
        } else {
            self.remove_agents(delta.unsigned_abs());
        }
    }

    /// Advances every boid by one tick.
    pub fn tick(&mut self, params: &SimulationParams) {
        physics::step(&mut self.boids, &self.world, params);
    }

    pub fn resize_world(&mut self, width: f32, height: f32) {
        if self.world.width != width || self.world.height != height {
            debug!(width, height, "world resized");
            self.world.resize(width, height);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn stats(&self) -> FlockStats {
        FlockStats::measure(&self.boids, &self.world)
    }
}
