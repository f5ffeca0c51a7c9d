/*
 * Application Module
 *
 * This module defines the viewer's model and update loop. The window is the
 * world: every frame the world is resized to the window, and the flock is
 * ticked at a fixed rate unless the simulation is paused.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::world::World;
use crate::{input, renderer, ui, DEFAULT_BOID_COUNT, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, POPULATION_STEP};

// Ticks per second; rendering may run faster but the flock only moves this often
pub const TARGET_TPS: f32 = 60.0;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
    pub paused: bool,
    pub tick_interval: Duration,
    pub last_tick: Instant,
}

/// Population changes requested from the UI or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationRequest {
    Add,
    Remove,
    Reset,
}

impl Model {
    pub fn apply(&mut self, request: PopulationRequest) {
        match request {
            PopulationRequest::Add => self.flock.add_agents(POPULATION_STEP),
            PopulationRequest::Remove => {
                self.flock.remove_agents(POPULATION_STEP);
            }
            PopulationRequest::Reset => self.flock.reset(),
        }
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(DEFAULT_WORLD_WIDTH as u32, DEFAULT_WORLD_HEIGHT as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window was just created");
    let egui = Egui::from_window(&window);
    let rect = window.rect();

    let params = load_params();
    let flock = Flock::new(DEFAULT_BOID_COUNT, World::new(rect.w(), rect.h()));
    info!(boids = flock.len(), width = rect.w(), height = rect.h(), "viewer started");

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        show_debug: false,
        paused: false,
        tick_interval: Duration::from_secs_f32(1.0 / TARGET_TPS),
        last_tick: Instant::now(),
    }
}

// The first command line argument may name a JSON parameter preset
fn load_params() -> SimulationParams {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationParams::default();
    };

    match SimulationParams::from_json_file(&path) {
        Ok(params) => {
            info!(%path, "loaded parameter preset");
            params
        }
        Err(err) => {
            warn!(%path, error = %err, "ignoring parameter preset, using defaults");
            SimulationParams::default()
        }
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Follow the window size without touching the boids
    let rect = app.window_rect();
    model.flock.resize_world(rect.w(), rect.h());

    let request = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.paused,
        &mut model.show_debug,
        &model.debug_info,
    );
    if let Some(request) = request {
        model.apply(request);
    }

    let now = Instant::now();
    if !model.paused && now.duration_since(model.last_tick) >= model.tick_interval {
        model.last_tick = now;
        model.flock.tick(&model.params);
        model.debug_info.tick_time = now.elapsed();
        model.debug_info.ticks += 1;
    }

    model.debug_info.stats = model.flock.stats();
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
