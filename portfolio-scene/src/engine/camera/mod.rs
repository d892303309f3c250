//! Scene camera control.
//!
//! The orbit camera handles free look around the origin. Flights take over
//! the camera when a section opens or closes, and pause the orbit while they
//! run.

/// Damped orbit controls and the scene camera marker.
pub mod orbit_camera;

/// Fly-to and fly-back animation between the rest pose and a marker.
pub mod camera_flight;
