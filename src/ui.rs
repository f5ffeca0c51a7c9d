/*
 * UI Module
 *
 * This module builds the control window using nannou_egui. Sliders write
 * straight into SimulationParams; the flock picks the new values up on its
 * next tick. Population buttons are returned as a request so the caller can
 * apply them outside the egui frame.
 */

use nannou_egui::{egui, Egui};

use crate::app::PopulationRequest;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::POPULATION_STEP;

pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    paused: &mut bool,
    show_debug: &mut bool,
    debug_info: &DebugInfo,
) -> Option<PopulationRequest> {
    let mut request = None;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.horizontal(|ui| {
                    if ui.button(format!("Add {POPULATION_STEP}")).clicked() {
                        request = Some(PopulationRequest::Add);
                    }
                    if ui.button(format!("Remove {POPULATION_STEP}")).clicked() {
                        request = Some(PopulationRequest::Remove);
                    }
                    if ui.button("Reset").clicked() {
                        request = Some(PopulationRequest::Reset);
                    }
                });
                ui.label(format!("Boids: {}", debug_info.stats.population));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.cohesion_factor, SimulationParams::get_cohesion_range()).text("Coherence"));
                ui.add(egui::Slider::new(&mut params.separation_distance, SimulationParams::get_separation_range()).text("Separation"));
                ui.add(egui::Slider::new(&mut params.alignment_factor, SimulationParams::get_alignment_range()).text("Alignment"));
                ui.add(egui::Slider::new(&mut params.visual_range, SimulationParams::get_visual_range_range()).text("Visual Range"));
                ui.add(egui::Slider::new(&mut params.speed_limit, SimulationParams::get_speed_limit_range()).text("Speed Limit"));
            });

            ui.collapsing("Edges", |ui| {
                ui.add(egui::Slider::new(&mut params.edge_margin, SimulationParams::get_edge_margin_range()).text("Margin"));
                ui.add(egui::Slider::new(&mut params.edge_turn_factor, SimulationParams::get_edge_turn_factor_range()).text("Turn Factor"));
            });

            ui.collapsing("Trails", |ui| {
                ui.checkbox(&mut params.trail_enabled, "Draw Trails");
                ui.add(egui::Slider::new(&mut params.history_length, SimulationParams::get_history_length_range()).text("Trail Length"));
            });

            ui.separator();
            ui.checkbox(&mut params.enable_parallel, "Parallel Update");
            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    request
}
