use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::path::star_path::StarPath;
use crate::engine::scene::markers::RoamingMarker;
use crate::interaction::pointer::PointerHit;
use bevy::prelude::*;

/// Drive the roaming marker: follow the pointer while a formation marker is
/// hovered, otherwise travel the star path.
pub fn update_roaming_marker(
    time: Res<Time>,
    settings: Res<SceneSettings>,
    path: Option<Res<StarPath>>,
    hit: Res<PointerHit>,
    mut markers: Query<(&mut Transform, &mut RoamingMarker)>,
) {
    let Some(path) = path else {
        return;
    };

    let hover_point = hit.0.as_ref().map(|hit| hit.point);
    let delta_ms = time.delta_secs() * 1000.0;
    for (mut transform, mut marker) in &mut markers {
        step_roaming_marker(&mut transform, &mut marker, hover_point, &path, &settings, delta_ms);
    }
}

/// One frame of roaming marker motion.
///
/// When hover ends the idle phase is re-synchronised to the closest path
/// sample, so the marker rejoins the path near where it was released.
pub fn step_roaming_marker(
    transform: &mut Transform,
    marker: &mut RoamingMarker,
    hover_point: Option<Vec3>,
    path: &StarPath,
    settings: &SceneSettings,
    delta_ms: f32,
) {
    if let Some(point) = hover_point {
        marker.was_hovering = true;
        transform.translation = transform
            .translation
            .lerp(point, settings.hover_follow_factor);
        return;
    }

    if marker.was_hovering {
        if let Some(closest) = path.closest_point(transform.translation, settings.closest_point_divisions) {
            debug!(
                "Hover released, rejoining path at t={:.3} ({:.2} away)",
                closest.t, closest.distance
            );
            marker.phase.resync(closest.t);
        }
        marker.was_hovering = false;
    }

    let t = marker.phase.advance(delta_ms);
    let Some(position) = path.point_at(t) else {
        return;
    };
    transform.translation = position;
    if let Some(tangent) = path.tangent_at(t) {
        transform.look_to(tangent, Vec3::Y);
    }
}
