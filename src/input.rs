/*
 * Input Module
 *
 * Keyboard shortcuts for the viewer:
 * - Space: pause / resume
 * - T: toggle trails
 * - R: reset the flock
 * - + / =: add boids, -: remove boids
 * - D: toggle the debug overlay
 */

use nannou::prelude::*;

use crate::app::{Model, PopulationRequest};

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Typing into an egui field should not drive the simulation
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => model.paused = !model.paused,
        Key::T => model.params.trail_enabled = !model.params.trail_enabled,
        Key::D => model.show_debug = !model.show_debug,
        Key::R => model.apply(PopulationRequest::Reset),
        Key::Equals | Key::Plus => model.apply(PopulationRequest::Add),
        Key::Minus => model.apply(PopulationRequest::Remove),
        _ => {}
    }
}
