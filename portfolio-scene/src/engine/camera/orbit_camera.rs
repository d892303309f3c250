use crate::engine::assets::scene_settings::SceneSettings;
use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};
use constants::animation::{ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ZOOM_STEP};
use std::f32::consts::{PI, TAU};

/// Keeps the polar angle off the poles so `look_at` has a stable up vector.
const POLAR_EPSILON: f32 = 1e-3;

/// Marks the camera that renders the portfolio scene.
#[derive(Component)]
pub struct SceneCamera;

/// Damped orbit around a fixed target.
///
/// The camera position is read back every update, so anything else that moves
/// the camera (a flight, for instance) is picked up without a jump.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub enabled: bool,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
}

impl OrbitCamera {
    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self {
            damping: settings.orbit_damping.clamp(f32::EPSILON, 1.0),
            rotate_speed: settings.orbit_rotate_speed,
            zoom_speed: settings.orbit_zoom_speed,
            ..default()
        }
    }

    /// Queue a drag of `drag` pixels on a viewport `viewport_height` pixels tall.
    /// A full-height drag turns the camera once around.
    pub fn rotate(&mut self, drag: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.theta_delta -= TAU * drag.x / height * self.rotate_speed;
        self.phi_delta -= TAU * drag.y / height * self.rotate_speed;
    }

    /// Queue a zoom of `steps` wheel notches; positive moves closer.
    pub fn zoom(&mut self, steps: f32) {
        self.scale *= ORBIT_ZOOM_STEP.powf(self.zoom_speed * steps);
    }

    /// Drop any residual motion, used while controls are disabled.
    pub fn clear_motion(&mut self) {
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
    }

    pub fn has_motion(&self) -> bool {
        self.theta_delta.abs() > f32::EPSILON
            || self.phi_delta.abs() > f32::EPSILON
            || (self.scale - 1.0).abs() > f32::EPSILON
    }

    /// Apply one frame of damped motion to a camera at `position`.
    pub fn update(&mut self, position: Vec3) -> Vec3 {
        let offset = position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return position;
        }

        let theta = offset.x.atan2(offset.z) + self.theta_delta * self.damping;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.phi_delta * self.damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;
        self.scale = 1.0;

        self.target + spherical_to_offset(radius, phi, theta)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: true,
            damping: constants::animation::ORBIT_DAMPING,
            rotate_speed: constants::animation::ORBIT_ROTATE_SPEED,
            zoom_speed: constants::animation::ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
        }
    }
}

fn spherical_to_offset(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let ring = phi.sin() * radius;
    Vec3::new(ring * theta.sin(), phi.cos() * radius, ring * theta.cos())
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if !orbit.enabled {
        orbit.clear_motion();
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let height = windows.single().map(|w| w.height()).unwrap_or(1.0);
        orbit.rotate(mouse_delta, height);
    }

    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    let target = orbit.target;
    camera_transform.translation = orbit.update(camera_transform.translation);
    camera_transform.look_at(target, Vec3::Y);
}
