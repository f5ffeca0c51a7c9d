/*
 * Physics Module
 *
 * This module advances the whole flock by one tick. It copies the position
 * and velocity of every boid into a snapshot first, so every neighbor scan
 * in the tick sees the flock as it was before the tick started.
 *
 * Each boid's update reads only the snapshot and its own state, so the
 * per-boid work can run on rayon's pool without changing the result:
 * sequential and parallel ticks are bit-identical.
 */

use rayon::prelude::*;
use tracing::trace;

use crate::boid::{Boid, BoidState};
use crate::params::SimulationParams;
use crate::world::World;

// Below this many boids the thread pool costs more than it saves
const PARALLEL_THRESHOLD: usize = 64;

/// Advances every boid in `boids` by exactly one tick.
pub fn step(boids: &mut [Boid], world: &World, params: &SimulationParams) {
    if boids.is_empty() {
        return;
    }

    let snapshot = take_snapshot(boids);
    let parallel = params.enable_parallel && boids.len() >= PARALLEL_THRESHOLD;

    trace!(boids = boids.len(), parallel, "advancing flock");

    if parallel {
        boids
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, boid)| boid.step(i, &snapshot, world, params));
    } else {
        for (i, boid) in boids.iter_mut().enumerate() {
            boid.step(i, &snapshot, world, params);
        }
    }
}

pub fn take_snapshot(boids: &[Boid]) -> Vec<BoidState> {
    boids.iter().map(Boid::state).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_params() -> SimulationParams {
        SimulationParams {
            edge_margin: 0.0,
            edge_turn_factor: 0.0,
            trail_enabled: false,
            ..SimulationParams::default()
        }
    }

    #[test]
    fn empty_flock_is_a_no_op() {
        let mut boids: Vec<Boid> = Vec::new();
        step(&mut boids, &World::default(), &SimulationParams::default());
        assert!(boids.is_empty());
    }

    #[test]
    fn neighbours_see_pre_tick_state() {
        // Two boids in range with no edges or speed cap in play. If the second
        // boid saw the first one's updated velocity, the results would not mirror.
        let params = SimulationParams {
            cohesion_factor: 0.0,
            separation_distance: 0.0,
            alignment_factor: 0.5,
            visual_range: 100.0,
            speed_limit: 1000.0,
            ..quiet_params()
        };
        let mut boids = vec![
            Boid::new(Vec2::new(500.0, 500.0), Vec2::new(4.0, 0.0)),
            Boid::new(Vec2::new(510.0, 500.0), Vec2::new(0.0, 4.0)),
        ];

        step(&mut boids, &World::new(1000.0, 1000.0), &params);

        // Average of both pre-tick velocities is (2, 2); each moves half way there
        assert_eq!(boids[0].velocity, Vec2::new(3.0, 1.0));
        assert_eq!(boids[1].velocity, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = World::new(800.0, 600.0);
        let original: Vec<Boid> = (0..PARALLEL_THRESHOLD * 3)
            .map(|_| Boid::random(&mut rng, &world))
            .collect();

        let mut sequential = original.clone();
        let mut parallel = original;
        let seq_params = SimulationParams {
            enable_parallel: false,
            ..SimulationParams::default()
        };
        let par_params = SimulationParams {
            enable_parallel: true,
            ..SimulationParams::default()
        };

        for _ in 0..20 {
            step(&mut sequential, &world, &seq_params);
            step(&mut parallel, &world, &par_params);
        }

        assert_eq!(sequential, parallel);
    }
}
