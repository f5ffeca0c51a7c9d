/*
 * World Module
 *
 * The bounded plane the flock lives in. Coordinates run from (0, 0) at the
 * top-left corner to (width, height). The bounds only steer boids; positions
 * are never clamped, so a boid may sit outside the world for a few ticks.
 */

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Called when the viewport changes; boids are left where they are
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(crate::DEFAULT_WORLD_WIDTH, crate::DEFAULT_WORLD_HEIGHT)
    }
}
