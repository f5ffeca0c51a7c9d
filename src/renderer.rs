/*
 * Renderer Module
 *
 * This module draws the flock. World coordinates have their origin in the
 * top-left corner with y growing downwards; nannou puts the origin in the
 * centre of the window with y growing upwards, so every point is mapped
 * before drawing.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::world::World;
use crate::BOID_SIZE;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let world = model.flock.world();

    // Trails go underneath every boid
    if model.params.trail_enabled {
        for boid in model.flock.boids() {
            draw_trail(&draw, boid, world);
        }
    }

    for boid in model.flock.boids() {
        draw_boid(&draw, boid, world);
    }

    if model.show_debug {
        draw_debug_info(&draw, model, app.window_rect());
    }

    draw.to_frame(app, &frame).expect("failed to draw the flock");
    model.egui.draw_to_frame(&frame).expect("failed to draw the controls");
}

pub fn world_to_screen(point: ::glam::Vec2, world: &World) -> Point2 {
    pt2(point.x - world.width / 2.0, world.height / 2.0 - point.y)
}

fn draw_boid(draw: &Draw, boid: &Boid, world: &World) {
    let points = [
        pt2(0.0, 0.0),
        pt2(-BOID_SIZE, BOID_SIZE / 3.0),
        pt2(-BOID_SIZE, -BOID_SIZE / 3.0),
    ];

    // Flipping y flips the angle too
    draw.polygon()
        .color(WHITE)
        .points(points)
        .xy(world_to_screen(boid.position, world))
        .rotate(-boid.heading());
}

fn draw_trail(draw: &Draw, boid: &Boid, world: &World) {
    if boid.trail.len() < 2 {
        return;
    }

    // Older points fade out
    let len = boid.trail.len() as f32;
    let points = boid.trail.iter().enumerate().map(|(i, p)| {
        let alpha = 0.4 * (i as f32 + 1.0) / len;
        (world_to_screen(*p, world), rgba(0.333, 0.549, 0.957, alpha))
    });

    draw.polyline().weight(1.0).points_colored(points);
}

// Draw debug information in the top-left corner
fn draw_debug_info(draw: &Draw, model: &Model, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let info = &model.debug_info;
    let stats = &info.stats;

    let centroid = match stats.centroid {
        Some(c) => format!("({:.0}, {:.0})", c.x, c.y),
        None => "-".to_string(),
    };

    let debug_texts = [
        format!("FPS: {:.1}", info.fps),
        format!("Frame time: {:.2} ms", info.frame_time.as_secs_f64() * 1000.0),
        format!("Tick time: {:.2} ms", info.tick_time.as_secs_f64() * 1000.0),
        format!("Ticks: {}", info.ticks),
        format!("Boids: {} ({} outside)", stats.population, stats.out_of_bounds),
        format!("Speed: mean {:.1}, max {:.1}", stats.mean_speed, stats.max_speed),
        format!("Centre of mass: {}", centroid),
        format!("World: {:.0}x{:.0}", model.flock.world().width, model.flock.world().height),
    ];

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 100.0, y)
            .color(WHITE)
            .font_size(14);
    }
}
