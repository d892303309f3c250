//! Compile-time defaults shared by the portfolio scene.
//!
//! Every value here can be overridden at run time through the `settings`
//! block of the portfolio manifest.

/// Star path geometry and marker dimensions.
pub mod layout;

/// Timing and interpolation factors for the roaming marker and camera flights.
pub mod animation;

/// Section identifiers and fallback titles.
pub mod section;
