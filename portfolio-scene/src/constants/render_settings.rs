use bevy::prelude::*;

/// Flat yellow shared by every marker.
pub const MARKER_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

pub const CLEAR_COLOUR: Color = Color::BLACK;

/// Key lights sit either side of the scene, aimed at the origin.
pub const KEY_LIGHT_POSITIONS: [Vec3; 2] = [Vec3::new(10.0, 10.0, 10.0), Vec3::new(-10.0, 10.0, 10.0)];
pub const KEY_LIGHT_ILLUMINANCE: f32 = 4_000.0;

pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
