use crate::constants::path::PORTFOLIO_MANIFEST_PATH;
use crate::engine::assets::portfolio_manifest::PortfolioManifest;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::AppState;
use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<PortfolioManifest>>,
    loaded: bool,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading portfolio manifest from {}", PORTFOLIO_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(PORTFOLIO_MANIFEST_PATH));
}

/// Wait for the manifest, publish its content and settings as resources, then
/// move to `Running`. A failed load runs the scene on built-in defaults.
pub fn load_manifest_system(
    mut manifest_loader: ResMut<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<PortfolioManifest>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if manifest_loader.loaded {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    let manifest = if let Some(manifest) = manifests.get(handle) {
        info!(
            "✓ Portfolio manifest loaded: {} sections, {} achievements",
            manifest.sections.len(),
            manifest.achievements.len()
        );
        manifest.clone()
    } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        warn!("Portfolio manifest failed to load ({err}), using defaults");
        PortfolioManifest::default()
    } else {
        return;
    };

    install_manifest(&mut commands, manifest);
    manifest_loader.loaded = true;
    info!("→ Transitioning to Running state");
    next_state.set(AppState::Running);
}

fn install_manifest(commands: &mut Commands, manifest: PortfolioManifest) {
    commands.insert_resource(OrbitCamera::from_settings(&manifest.settings));
    commands.insert_resource(manifest.settings.clone());
    commands.insert_resource(manifest);
}
