//! Portfolio content and scene tunables loaded from JSON.
//!
//! Both live in one manifest asset so a page can restyle the scene and change
//! its copy without a rebuild.

/// Section copy, achievement tooltips and the settings block, as a Bevy asset.
pub mod portfolio_manifest;

/// Layout, animation and camera tunables with defaults from the `constants` crate.
pub mod scene_settings;
