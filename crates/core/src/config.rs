//! Tunable simulation constants.
//! Defaults reproduce the shipped game; the app may override them from a settings file.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// Smallest grid side that still leaves an interior for the carver to work in.
pub const MIN_GRID_SIDE: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub guard_count: usize,
    pub scout_count: usize,
    pub player_speed: f32,
    pub guard_speed: f32,
    pub scout_speed: f32,
    pub footprint_half_extent: f32,
    /// Seconds of uninterrupted sighting before the player is caught.
    pub detection_grace: f32,
    pub win_radius_sq: f32,
    pub guard_view_half_angle_deg: f32,
    pub guard_view_distance: f32,
    pub guard_turn_cooldown: f32,
    pub guard_center_tolerance_rate: f32,
    pub guard_center_tolerance_max: f32,
    pub scout_detect_radius_sq: f32,
    pub scout_move_time_min: u32,
    pub scout_move_time_span: u32,
    pub max_generation_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 22,
            height: 17,
            guard_count: 4,
            scout_count: 4,
            player_speed: 3.0,
            guard_speed: 0.7,
            scout_speed: 0.5,
            footprint_half_extent: 0.25,
            detection_grace: 0.3,
            win_radius_sq: 0.4,
            guard_view_half_angle_deg: 22.5,
            guard_view_distance: 2.5,
            guard_turn_cooldown: 0.5,
            guard_center_tolerance_rate: 0.7,
            guard_center_tolerance_max: 0.05,
            scout_detect_radius_sq: 1.0,
            scout_move_time_min: 5,
            scout_move_time_span: 5,
            max_generation_attempts: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    GridTooSmall { width: usize, height: usize },
    NonPositive { field: &'static str, value: f32 },
    ZeroCount { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { width, height } => write!(
                f,
                "grid {width}x{height} is too small, both sides must be at least {MIN_GRID_SIDE}"
            ),
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{field}` must be a positive finite number, got {value}")
            }
            ConfigError::ZeroCount { field } => write!(f, "`{field}` must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_SIDE || self.height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall { width: self.width, height: self.height });
        }

        let positive_fields = [
            ("player_speed", self.player_speed),
            ("guard_speed", self.guard_speed),
            ("scout_speed", self.scout_speed),
            ("footprint_half_extent", self.footprint_half_extent),
            ("detection_grace", self.detection_grace),
            ("win_radius_sq", self.win_radius_sq),
            ("guard_view_half_angle_deg", self.guard_view_half_angle_deg),
            ("guard_view_distance", self.guard_view_distance),
            ("guard_turn_cooldown", self.guard_turn_cooldown),
            ("guard_center_tolerance_rate", self.guard_center_tolerance_rate),
            ("guard_center_tolerance_max", self.guard_center_tolerance_max),
            ("scout_detect_radius_sq", self.scout_detect_radius_sq),
        ];
        for (field, value) in positive_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.scout_move_time_span == 0 {
            return Err(ConfigError::ZeroCount { field: "scout_move_time_span" });
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::ZeroCount { field: "max_generation_attempts" });
        }
        Ok(())
    }

    /// Generation start cell: horizontal centre, one row above the bottom border.
    pub fn start_cell(&self) -> Cell {
        Cell::new((self.width / 2) as i32, 1)
    }
}
