use bevy::prelude::*;
use constants::{animation, layout};
use serde::{Deserialize, Serialize};

/// Tunables for layout, idle animation and camera flights.
/// Every field falls back to the `constants` crate when absent from the manifest.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub star_point_count: usize,
    pub star_outer_radius: f32,
    pub star_inner_radius: f32,
    pub star_rotation: f32,
    pub idle_period_ms: f32,
    pub closest_point_divisions: usize,
    pub arc_length_divisions: usize,
    pub hover_follow_factor: f32,
    pub flight_lerp_factor: f32,
    pub flight_arrival_distance: f32,
    pub flight_target_offset: [f32; 3],
    pub initial_camera_position: [f32; 3],
    pub orbit_damping: f32,
    pub orbit_rotate_speed: f32,
    pub orbit_zoom_speed: f32,
    pub show_wip_notice: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            star_point_count: layout::STAR_POINT_COUNT,
            star_outer_radius: layout::STAR_OUTER_RADIUS,
            star_inner_radius: layout::STAR_INNER_RADIUS,
            star_rotation: layout::STAR_ROTATION,
            idle_period_ms: animation::IDLE_PERIOD_MS,
            closest_point_divisions: animation::CLOSEST_POINT_DIVISIONS,
            arc_length_divisions: animation::ARC_LENGTH_DIVISIONS,
            hover_follow_factor: animation::HOVER_FOLLOW_FACTOR,
            flight_lerp_factor: animation::FLIGHT_LERP_FACTOR,
            flight_arrival_distance: animation::FLIGHT_ARRIVAL_DISTANCE,
            flight_target_offset: animation::FLIGHT_TARGET_OFFSET,
            initial_camera_position: animation::INITIAL_CAMERA_POSITION,
            orbit_damping: animation::ORBIT_DAMPING,
            orbit_rotate_speed: animation::ORBIT_ROTATE_SPEED,
            orbit_zoom_speed: animation::ORBIT_ZOOM_SPEED,
            show_wip_notice: true,
        }
    }
}

impl SceneSettings {
    pub fn initial_camera_position(&self) -> Vec3 {
        Vec3::from_array(self.initial_camera_position)
    }

    pub fn flight_target_offset(&self) -> Vec3 {
        Vec3::from_array(self.flight_target_offset)
    }
}
