//! Idle path geometry and timing for the roaming marker.
//!
//! The star path is a closed Catmull-Rom loop through alternating outer and
//! inner star points. The idle phase maps frame time onto a position along it.

/// Closed star curve with arc-length sampling and closest-point search.
pub mod star_path;

/// Periodic loop position driven by frame deltas.
pub mod idle_phase;
