use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS, KEY_LIGHT_ILLUMINANCE, KEY_LIGHT_POSITIONS,
};
use bevy::prelude::*;

/// Two white key lights aimed at the origin plus a soft ambient fill.
pub fn spawn_lighting(commands: &mut Commands) {
    for position in KEY_LIGHT_POSITIONS {
        commands.spawn((
            DirectionalLight {
                illuminance: KEY_LIGHT_ILLUMINANCE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}
