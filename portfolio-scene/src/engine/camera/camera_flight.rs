use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::orbit_camera::{OrbitCamera, SceneCamera};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightKind {
    /// Toward a clicked marker; orbit controls lock on arrival.
    ToMarker,
    /// Back to the rest pose; orbit controls unlock on arrival.
    Home,
}

impl FlightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToMarker => "to_marker",
            Self::Home => "home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub kind: FlightKind,
    pub target: Vec3,
    pub look_at: Vec3,
}

impl Flight {
    pub fn to_marker(marker: Vec3, offset: Vec3) -> Self {
        Self {
            kind: FlightKind::ToMarker,
            target: marker + offset,
            look_at: marker,
        }
    }

    pub fn home(rest_position: Vec3) -> Self {
        Self {
            kind: FlightKind::Home,
            target: rest_position,
            look_at: Vec3::ZERO,
        }
    }

    /// Move `position` a fixed fraction toward the target.
    /// Returns the new position and whether it is within `arrival_distance`.
    pub fn step(&self, position: Vec3, lerp_factor: f32, arrival_distance: f32) -> (Vec3, bool) {
        let next = position.lerp(self.target, lerp_factor);
        (next, next.distance(self.target) < arrival_distance)
    }
}

/// The flight in progress, if any. While one is active the orbit controls and
/// roaming marker are paused.
#[derive(Resource, Default, Debug)]
pub struct CameraFlight {
    active: Option<Flight>,
}

impl CameraFlight {
    /// Begin a flight, replacing any flight already underway.
    pub fn start(&mut self, flight: Flight) {
        if let Some(previous) = self.active.replace(flight) {
            debug!("Camera flight {} replaced", previous.kind.as_str());
        }
        info!("Camera flight {} started toward {}", flight.kind.as_str(), flight.target);
    }

    pub fn active(&self) -> Option<&Flight> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CameraFlightFinished {
    pub kind: FlightKind,
}

/// Run condition for systems that must stay idle during a flight.
pub fn no_camera_flight(flight: Res<CameraFlight>) -> bool {
    !flight.is_active()
}

pub fn camera_flight_system(
    mut flight: ResMut<CameraFlight>,
    settings: Res<SceneSettings>,
    mut orbit: ResMut<OrbitCamera>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
    mut finished: EventWriter<CameraFlightFinished>,
) {
    let Some(active) = flight.active().copied() else {
        return;
    };
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let (position, arrived) = active.step(
        camera_transform.translation,
        settings.flight_lerp_factor,
        settings.flight_arrival_distance,
    );
    camera_transform.translation = position;
    camera_transform.look_at(active.look_at, Vec3::Y);

    if arrived {
        flight.active = None;
        orbit.enabled = active.kind == FlightKind::Home;
        info!(
            "Camera flight {} finished, orbit controls {}",
            active.kind.as_str(),
            if orbit.enabled { "enabled" } else { "locked" }
        );
        finished.write(CameraFlightFinished { kind: active.kind });
    }
}
