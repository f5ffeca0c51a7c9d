/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Cohesion: Steer towards the average position of neighbors
 * 2. Separation: Avoid crowding neighbors
 * 3. Alignment: Steer towards the average heading of neighbors
 *
 * On top of the rules the velocity is capped, the boid is nudged back from
 * the world edges, and its position is integrated and recorded in its trail.
 *
 * Neighbor scans always look at a snapshot of the flock taken before the tick,
 * never at boids that have already been updated this tick.
 */

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::params::SimulationParams;
use crate::world::World;
use crate::{INITIAL_SPEED, SEPARATION_FACTOR};

/// Position and velocity of one boid as seen by its neighbors during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidState {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Past positions, oldest first.
    pub trail: VecDeque<Vec2>,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            trail: VecDeque::new(),
        }
    }

    /// A boid somewhere inside `world`, moving at up to `INITIAL_SPEED` on each axis.
    pub fn random<R: Rng>(rng: &mut R, world: &World) -> Self {
        let position = Vec2::new(
            sample_extent(rng, world.width),
            sample_extent(rng, world.height),
        );
        let velocity = Vec2::new(
            rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
            rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
        );
        Self::new(position, velocity)
    }

    pub fn state(&self) -> BoidState {
        BoidState {
            position: self.position,
            velocity: self.velocity,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    // Angle of travel in radians, used to orient the boid when drawing
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Runs every phase of one tick for the boid at `index` in `snapshot`.
    pub fn step(&mut self, index: usize, snapshot: &[BoidState], world: &World, params: &SimulationParams) {
        self.cohesion(snapshot, params.visual_range, params.cohesion_factor);
        self.separation(index, snapshot, params.separation_distance);
        self.alignment(snapshot, params.visual_range, params.alignment_factor);
        self.limit_speed(params.speed_limit);
        self.contain(world, params.edge_margin, params.edge_turn_factor);
        self.integrate();
        self.record_trail(params.trail_enabled, params.history_length);
    }

    // Fly towards the centre of mass of the boids in visual range.
    // The scan does not skip this boid; at distance zero it always counts
    // itself, which pulls the centroid towards its own position.
    pub fn cohesion(&mut self, snapshot: &[BoidState], visual_range: f32, factor: f32) {
        let mut center = Vec2::ZERO;
        let mut count = 0usize;

        for other in snapshot {
            if self.position.distance(other.position) < visual_range {
                center += other.position;
                count += 1;
            }
        }

        if count > 0 {
            center /= count as f32;
            self.velocity += (center - self.position) * factor;
        }
    }

    // Move away from every other boid closer than `min_distance`.
    // Unlike cohesion and alignment, this boid is skipped by index.
    pub fn separation(&mut self, index: usize, snapshot: &[BoidState], min_distance: f32) {
        let mut away = Vec2::ZERO;

        for (j, other) in snapshot.iter().enumerate() {
            if j != index && self.position.distance(other.position) < min_distance {
                away += self.position - other.position;
            }
        }

        self.velocity += away * SEPARATION_FACTOR;
    }

    // Match the average pre-tick velocity of the boids in visual range,
    // this boid's own pre-tick velocity included.
    pub fn alignment(&mut self, snapshot: &[BoidState], visual_range: f32, factor: f32) {
        let mut average = Vec2::ZERO;
        let mut count = 0usize;

        for other in snapshot {
            if self.position.distance(other.position) < visual_range {
                average += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            average /= count as f32;
            self.velocity += (average - self.velocity) * factor;
        }
    }

    pub fn limit_speed(&mut self, speed_limit: f32) {
        // A non-positive limit stops the boid instead of flipping its direction
        let limit = speed_limit.max(0.0);
        let speed = self.velocity.length();

        if speed > limit {
            self.velocity = self.velocity / speed * limit;
        }
    }

    // Turn back towards the interior near an edge. Each axis and each edge is
    // checked on its own; the position itself is never clamped.
    pub fn contain(&mut self, world: &World, margin: f32, turn_factor: f32) {
        if self.position.x < margin {
            self.velocity.x += turn_factor;
        }
        if self.position.x > world.width - margin {
            self.velocity.x -= turn_factor;
        }
        if self.position.y < margin {
            self.velocity.y += turn_factor;
        }
        if self.position.y > world.height - margin {
            self.velocity.y -= turn_factor;
        }
    }

    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn record_trail(&mut self, enabled: bool, history_length: usize) {
        if !enabled {
            self.trail.clear();
            return;
        }

        self.trail.push_back(self.position);
        while self.trail.len() > history_length {
            self.trail.pop_front();
        }
    }
}

// Uniform in [0, extent); a degenerate world puts everything on the axis origin
fn sample_extent<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state(x: f32, y: f32, vx: f32, vy: f32) -> BoidState {
        BoidState {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn random_boid_lies_inside_world() {
        let mut rng = StdRng::seed_from_u64(7);
        let world = World::new(300.0, 200.0);

        for _ in 0..500 {
            let boid = Boid::random(&mut rng, &world);
            assert!((0.0..300.0).contains(&boid.position.x));
            assert!((0.0..200.0).contains(&boid.position.y));
            assert!(boid.velocity.x.abs() <= INITIAL_SPEED);
            assert!(boid.velocity.y.abs() <= INITIAL_SPEED);
            assert!(boid.trail.is_empty());
        }
    }

    #[test]
    fn random_boid_in_degenerate_world_sits_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let boid = Boid::random(&mut rng, &World::new(0.0, -5.0));
        assert_eq!(boid.position, Vec2::ZERO);
    }

    #[test]
    fn cohesion_pulls_towards_centroid_including_self() {
        let mut boid = Boid::new(Vec2::new(0.0, 0.0), Vec2::ZERO);
        let snapshot = [state(0.0, 0.0, 0.0, 0.0), state(10.0, 0.0, 0.0, 0.0)];

        boid.cohesion(&snapshot, 50.0, 0.1);

        // Centroid of self and neighbour is (5, 0), not (10, 0)
        assert_relative_eq!(boid.velocity.x, 0.5);
        assert_relative_eq!(boid.velocity.y, 0.0);
    }

    #[test]
    fn cohesion_with_zero_range_does_nothing() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(1.0, 2.0));
        let snapshot = [state(0.0, 0.0, 1.0, 2.0), state(1.0, 0.0, 0.0, 0.0)];

        boid.cohesion(&snapshot, 0.0, 0.5);

        assert_eq!(boid.velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn separation_ignores_self_and_far_boids() {
        let mut boid = Boid::new(Vec2::new(0.0, 0.0), Vec2::ZERO);
        let snapshot = [
            state(0.0, 0.0, 0.0, 0.0),
            state(4.0, 0.0, 0.0, 0.0),
            state(0.0, 3.0, 0.0, 0.0),
            state(100.0, 0.0, 0.0, 0.0),
        ];

        boid.separation(0, &snapshot, 10.0);

        assert_relative_eq!(boid.velocity.x, -4.0 * SEPARATION_FACTOR);
        assert_relative_eq!(boid.velocity.y, -3.0 * SEPARATION_FACTOR);
    }

    #[test]
    fn separation_counts_coincident_other_boid_without_blowing_up() {
        let mut boid = Boid::new(Vec2::new(5.0, 5.0), Vec2::new(1.0, 1.0));
        let snapshot = [state(5.0, 5.0, 1.0, 1.0), state(5.0, 5.0, 0.0, 0.0)];

        boid.separation(0, &snapshot, 10.0);

        // The offset to a coincident boid is zero, so nothing changes
        assert_eq!(boid.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn alignment_blends_towards_average_velocity() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(2.0, 0.0));
        let snapshot = [state(0.0, 0.0, 2.0, 0.0), state(1.0, 0.0, 0.0, 4.0)];

        boid.alignment(&snapshot, 10.0, 0.5);

        // Average is (1, 2); half way from (2, 0) is (1.5, 1)
        assert_relative_eq!(boid.velocity.x, 1.5);
        assert_relative_eq!(boid.velocity.y, 1.0);
    }

    #[test]
    fn limit_speed_rescales_to_exact_limit() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(30.0, 40.0));
        boid.limit_speed(10.0);

        assert_relative_eq!(boid.speed(), 10.0, epsilon = 1e-5);
        assert_relative_eq!(boid.velocity.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(boid.velocity.y, 8.0, epsilon = 1e-5);
    }

    #[test]
    fn limit_speed_leaves_slow_boids_alone() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        boid.limit_speed(5.0);
        assert_eq!(boid.velocity, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn non_positive_limit_stops_the_boid() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        boid.limit_speed(-2.0);
        assert_eq!(boid.velocity, Vec2::ZERO);

        let mut still = Boid::new(Vec2::ZERO, Vec2::ZERO);
        still.limit_speed(0.0);
        assert_eq!(still.velocity, Vec2::ZERO);
    }

    #[test]
    fn contain_pushes_in_on_both_axes_at_a_corner() {
        let world = World::new(1000.0, 1000.0);
        let mut boid = Boid::new(Vec2::new(990.0, 10.0), Vec2::ZERO);

        boid.contain(&world, 200.0, 1.0);

        assert_eq!(boid.velocity, Vec2::new(-1.0, 1.0));
        assert_eq!(boid.position, Vec2::new(990.0, 10.0));
    }

    #[test]
    fn contain_in_narrow_world_applies_both_edges() {
        // Margins overlap, so both pushes cancel out
        let world = World::new(100.0, 1000.0);
        let mut boid = Boid::new(Vec2::new(50.0, 500.0), Vec2::ZERO);

        boid.contain(&world, 200.0, 1.0);

        assert_eq!(boid.velocity.x, 0.0);
    }

    #[test]
    fn trail_is_bounded_and_chronological() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(1.0, 0.0));

        for _ in 0..10 {
            boid.integrate();
            boid.record_trail(true, 3);
        }

        let xs: Vec<f32> = boid.trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![8.0, 9.0, 10.0]);
    }

    #[test]
    fn disabled_trail_is_cleared() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::ZERO);
        boid.record_trail(true, 5);
        boid.record_trail(true, 5);
        assert_eq!(boid.trail.len(), 2);

        boid.record_trail(false, 5);
        assert!(boid.trail.is_empty());
    }

    #[test]
    fn zero_history_keeps_no_trail() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::ZERO);
        boid.record_trail(true, 0);
        assert!(boid.trail.is_empty());
    }

    #[test]
    fn heading_follows_velocity() {
        let boid = Boid::new(Vec2::ZERO, Vec2::new(0.0, 2.0));
        assert_relative_eq!(boid.heading(), std::f32::consts::FRAC_PI_2);
    }
}
