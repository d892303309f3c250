//! Pointer-driven behaviour of the portfolio scene.
//!
//! Every frame the pointer is turned into a world ray and tested against the
//! formation markers. The result drives two things:
//!
//! - The roaming marker, which follows the hit point while hovered and rejoins
//!   the star path at the closest sample once the pointer leaves
//! - Section selection, where a left click opens the marker's section and
//!   starts a camera flight toward it
//!
//! ## Frame Order
//!
//! ```text
//! track_pointer ─> orbit ─> update_pointer_hit ─> update_roaming_marker
//!                                    │
//!                                    └─> select_marker_on_click ─> open/close requests ─> camera flight
//! ```
//!
//! Orbit and roaming updates are skipped while a camera flight is active.

/// Analytic ray-capsule intersection in marker-local space.
pub mod ray;

/// Cursor tracking and nearest formation marker under the pointer.
pub mod pointer;

/// Idle path travel and hover follow for the roaming marker.
pub mod roaming;

/// Open section state, click selection and open/close request handling.
///
/// Requests arrive from pointer clicks, the Escape key, the native overlay or RPC.
pub mod section;

/// Work-in-progress notice visibility.
pub mod notice;
