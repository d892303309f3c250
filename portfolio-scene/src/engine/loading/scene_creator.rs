use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::orbit_camera::SceneCamera;
use crate::engine::scene::markers::spawn_markers;
use bevy::prelude::*;

/// Spawn the markers and move the camera to its rest pose once settings are known.
pub fn create_scene_on_enter(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    spawn_markers(&mut commands, &mut meshes, &mut materials, &settings);

    for mut camera_transform in &mut cameras {
        *camera_transform = Transform::from_translation(settings.initial_camera_position())
            .looking_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::path::star_path::StarPath;
    use crate::engine::scene::markers::{FormationMarker, RoamingMarker};

    #[test]
    fn creates_markers_path_and_camera_pose() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(SceneSettings {
                initial_camera_position: [0.0, 2.0, 10.0],
                ..default()
            })
            .add_systems(Update, create_scene_on_enter);
        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::default()))
            .id();

        app.update();

        let world = app.world_mut();
        assert!(world.get_resource::<StarPath>().is_some());
        let formation = world.query::<&FormationMarker>().iter(world).count();
        let roaming = world.query::<&RoamingMarker>().iter(world).count();
        assert_eq!((formation, roaming), (5, 1));

        let mut ids: Vec<String> = world
            .query::<&FormationMarker>()
            .iter(world)
            .map(|m| m.section_id.clone())
            .collect();
        ids.sort();
        assert_eq!(ids, ["section-0", "section-1", "section-2", "section-3", "section-4"]);

        let translation = world.get::<Transform>(camera).unwrap().translation;
        assert_eq!(translation, Vec3::new(0.0, 2.0, 10.0));
    }
}
