use crate::engine::camera::orbit_camera::SceneCamera;
use crate::engine::scene::markers::FormationMarker;
use crate::interaction::ray::ray_hits_capsule;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Last known cursor position in logical window pixels.
/// Before the first move the pointer sits at the viewport centre.
#[derive(Resource, Default)]
pub struct PointerState {
    pub cursor: Option<Vec2>,
}

impl PointerState {
    pub fn position_or_center(&self, window_size: Vec2) -> Vec2 {
        self.cursor.unwrap_or(window_size * 0.5)
    }
}

/// Formation marker under the pointer this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerHit {
    pub entity: Entity,
    pub section_id: String,
    pub point: Vec3,
    pub distance: f32,
}

#[derive(Resource, Default)]
pub struct PointerHit(pub Option<MarkerHit>);

pub fn track_pointer(mut cursor_moved: EventReader<CursorMoved>, mut pointer: ResMut<PointerState>) {
    for cursor in cursor_moved.read() {
        pointer.cursor = Some(cursor.position);
    }
}

/// Cast the pointer ray from the scene camera against every formation marker.
pub fn update_pointer_hit(
    pointer: Res<PointerState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    markers: Query<(Entity, &GlobalTransform, &FormationMarker)>,
    mut hit: ResMut<PointerHit>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single()) else {
        hit.0 = None;
        return;
    };

    let cursor = pointer.position_or_center(window.size());
    hit.0 = camera
        .viewport_to_world(camera_transform, cursor)
        .ok()
        .and_then(|ray| nearest_marker_hit(ray, &markers));
}

pub fn nearest_marker_hit<'a>(
    ray: Ray3d,
    markers: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a FormationMarker)>,
) -> Option<MarkerHit> {
    let direction = *ray.direction;
    markers
        .into_iter()
        .filter_map(|(entity, xf, marker)| {
            let t = ray_hits_capsule(ray.origin, direction, xf, marker.radius, marker.length)?;
            Some(MarkerHit {
                entity,
                section_id: marker.section_id.clone(),
                point: ray.origin + direction * t,
                distance: t,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
