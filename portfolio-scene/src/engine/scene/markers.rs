use crate::constants::render_settings::MARKER_COLOUR;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::path::idle_phase::IdlePhase;
use crate::engine::path::star_path::StarPath;
use bevy::prelude::*;
use constants::layout::{
    FORMATION_CAPSULE_LENGTH, FORMATION_CAPSULE_RADIUS, FORMATION_STRIDE, ROAMING_CAPSULE_LENGTH,
    ROAMING_CAPSULE_RADIUS,
};
use constants::section::section_id;

/// Static capsule on an outer star point, tagged with the section it opens.
#[derive(Component, Debug, Clone)]
pub struct FormationMarker {
    pub section_id: String,
    pub radius: f32,
    pub length: f32,
}

/// Capsule that travels the star path while idle and follows the pointer on hover.
#[derive(Component, Debug, Clone)]
pub struct RoamingMarker {
    pub was_hovering: bool,
    pub phase: IdlePhase,
}

impl RoamingMarker {
    pub fn new(period_ms: f32) -> Self {
        Self {
            was_hovering: false,
            phase: IdlePhase::new(period_ms),
        }
    }
}

/// Build the star path from settings and spawn both marker kinds along it.
/// The path is inserted as a resource for the roaming marker systems.
pub fn spawn_markers(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SceneSettings,
) {
    let path = StarPath::from_layout(
        settings.star_point_count,
        settings.star_outer_radius,
        settings.star_inner_radius,
        settings.star_rotation,
        settings.arc_length_divisions,
    );

    let material = materials.add(StandardMaterial {
        base_color: MARKER_COLOUR,
        unlit: true,
        ..default()
    });

    let roaming_mesh = meshes.add(Capsule3d::new(ROAMING_CAPSULE_RADIUS, ROAMING_CAPSULE_LENGTH));
    commands.spawn((
        Mesh3d(roaming_mesh),
        MeshMaterial3d(material.clone()),
        Transform::from_translation(path.point_at(0.0).unwrap_or(Vec3::ZERO)),
        RoamingMarker::new(settings.idle_period_ms),
        Name::new("Roaming marker"),
    ));

    let formation_mesh = meshes.add(Capsule3d::new(FORMATION_CAPSULE_RADIUS, FORMATION_CAPSULE_LENGTH));
    for (index, position) in formation_positions(&path).into_iter().enumerate() {
        let id = section_id(index);
        commands.spawn((
            Mesh3d(formation_mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            FormationMarker {
                section_id: id.clone(),
                radius: FORMATION_CAPSULE_RADIUS,
                length: FORMATION_CAPSULE_LENGTH,
            },
            Name::new(format!("Formation marker {id}")),
        ));
    }

    info!(
        "Spawned roaming marker and {} formation markers",
        path.control_points().len().div_ceil(FORMATION_STRIDE)
    );
    commands.insert_resource(path);
}

/// Outer star points, one per formation marker.
pub fn formation_positions(path: &StarPath) -> Vec<Vec3> {
    path.control_points()
        .iter()
        .step_by(FORMATION_STRIDE)
        .copied()
        .collect()
}
