//! Portfolio manifest loading and scene creation.
//!
//! The manifest is the only asset the scene waits for. Once it resolves (or
//! fails) its settings become resources and the markers are spawned.

/// Portfolio manifest loading with a defaults fallback on failure.
pub mod manifest_loader;

/// Marker spawning and camera rest pose on entering `Running`.
pub mod scene_creator;
