/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. The caller owns the value
 * and hands it to every tick; the engine never modifies it. Presets can be
 * loaded from JSON, and any field left out of a preset keeps its default.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub separation_distance: f32,
    pub cohesion_factor: f32,
    pub alignment_factor: f32,
    pub visual_range: f32,
    pub speed_limit: f32,
    pub edge_margin: f32,
    pub edge_turn_factor: f32,
    pub history_length: usize,
    pub trail_enabled: bool,
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            separation_distance: 20.0,
            cohesion_factor: 0.005,
            alignment_factor: 0.05,
            visual_range: 120.0,
            speed_limit: 15.0,
            edge_margin: 200.0,
            edge_turn_factor: 1.0,
            history_length: 50,
            trail_enabled: true,
            enable_parallel: true,
        }
    }
}

impl SimulationParams {
    /// Parses a JSON preset and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Rejects NaN and infinite values. Zero and negative values are accepted;
    /// they simply switch the corresponding rule off.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("separation_distance", self.separation_distance),
            ("cohesion_factor", self.cohesion_factor),
            ("alignment_factor", self.alignment_factor),
            ("visual_range", self.visual_range),
            ("speed_limit", self.speed_limit),
            ("edge_margin", self.edge_margin),
            ("edge_turn_factor", self.edge_turn_factor),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(ParamsError::NonFinite { field }),
            None => Ok(()),
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_separation_range() -> std::ops::RangeInclusive<f32> {
        0.0..=100.0
    }

    pub fn get_cohesion_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }

    pub fn get_alignment_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_visual_range_range() -> std::ops::RangeInclusive<f32> {
        0.0..=400.0
    }

    pub fn get_speed_limit_range() -> std::ops::RangeInclusive<f32> {
        1.0..=50.0
    }

    pub fn get_history_length_range() -> std::ops::RangeInclusive<usize> {
        0..=200
    }

    pub fn get_edge_margin_range() -> std::ops::RangeInclusive<f32> {
        0.0..=400.0
    }

    pub fn get_edge_turn_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }
}
