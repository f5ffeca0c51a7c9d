/*
 * Debug Information Module
 *
 * This module defines the metrics shown in the viewer's debug overlay:
 * - FPS (frames per second) and frame time
 * - Time spent in the last simulation tick
 * - A summary of the flock (population, speeds, centre of mass)
 */

use std::time::Duration;

use glam::Vec2;

use crate::boid::Boid;
use crate::world::World;

/// Summary of the flock at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockStats {
    pub population: usize,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub centroid: Option<Vec2>,
    pub out_of_bounds: usize,
}

impl FlockStats {
    pub fn measure(boids: &[Boid], world: &World) -> Self {
        if boids.is_empty() {
            return Self::default();
        }

        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut position_sum = Vec2::ZERO;
        let mut out_of_bounds = 0;

        for boid in boids {
            let speed = boid.speed();
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            position_sum += boid.position;
            if !world.contains(boid.position) {
                out_of_bounds += 1;
            }
        }

        let n = boids.len() as f32;
        Self {
            population: boids.len(),
            mean_speed: speed_sum / n,
            max_speed,
            centroid: Some(position_sum / n),
            out_of_bounds,
        }
    }
}

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_time: Duration,
    pub ticks: u64,
    pub stats: FlockStats,
}
