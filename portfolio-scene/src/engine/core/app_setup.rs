use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::constants::path::{LOG_FILTER, PORTFOLIO_MANIFEST_EXTENSION};
use crate::constants::render_settings::CLEAR_COLOUR;
use crate::engine::assets::portfolio_manifest::PortfolioManifest;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::camera_flight::{
    CameraFlight, CameraFlightFinished, camera_flight_system, no_camera_flight,
};
use crate::engine::camera::orbit_camera::{OrbitCamera, SceneCamera, orbit_camera_controller};
use crate::engine::core::app_state::{AppState, log_running_state};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::scene_creator::create_scene_on_enter;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::fps_tracking::fps_notification_system;
// Interaction
use crate::interaction::notice::{DismissWipNotice, WipNotice, dismiss_wip_notice, show_wip_notice};
use crate::interaction::pointer::{PointerHit, PointerState, track_pointer, update_pointer_hit};
use crate::interaction::roaming::update_roaming_marker;
use crate::interaction::section::{
    CloseSectionRequest, OpenSection, OpenSectionRequest, SectionEvent, close_section_on_escape,
    handle_close_section_requests, handle_open_section_requests, select_marker_on_click,
};
// Web RPC and native overlay
#[cfg(not(target_arch = "wasm32"))]
use crate::overlay::OverlayPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use constants::animation::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PortfolioManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PortfolioManifest>::new(&[
            PORTFOLIO_MANIFEST_EXTENSION,
        ]))
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(CLEAR_COLOUR));

    // The browser page draws its own modal, tooltip and banner in the DOM.
    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(OverlayPlugin);

    // Initialise resources early; manifest values replace the settings once loaded.
    app.init_resource::<ManifestLoader>()
        .init_resource::<SceneSettings>()
        .init_resource::<OrbitCamera>()
        .init_resource::<CameraFlight>()
        .init_resource::<PointerState>()
        .init_resource::<PointerHit>()
        .init_resource::<OpenSection>()
        .init_resource::<WipNotice>()
        .add_event::<OpenSectionRequest>()
        .add_event::<CloseSectionRequest>()
        .add_event::<SectionEvent>()
        .add_event::<CameraFlightFinished>()
        .add_event::<DismissWipNotice>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            load_manifest_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (create_scene_on_enter, show_wip_notice, log_running_state),
        );

    // One frame: sample input, orbit, hit test, roam, select, then fly.
    let runtime_systems = (
        track_pointer,
        orbit_camera_controller.run_if(no_camera_flight),
        update_pointer_hit,
        update_roaming_marker.run_if(no_camera_flight),
        select_marker_on_click,
        close_section_on_escape,
        handle_open_section_requests,
        handle_close_section_requests,
        dismiss_wip_notice,
        camera_flight_system,
        fps_notification_system,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, settings: Res<SceneSettings>) {
    spawn_lighting(&mut commands);
    spawn_scene_camera(&mut commands, &settings);
}

fn spawn_scene_camera(commands: &mut Commands, settings: &SceneSettings) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(settings.initial_camera_position())
            .looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
        Name::new("Scene camera"),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
