/// Asset paths, canvas selector and log filter.
pub mod path;

/// Colours and light levels for the scene.
pub mod render_settings;
