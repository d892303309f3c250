//! Scene contents: lights and the capsule markers.

/// Directional key lights and ambient fill.
pub mod lighting;

/// Formation and roaming marker components, spawned along the star path.
pub mod markers;
