/// Duration of one full lap of the idle path, in milliseconds.
pub const IDLE_PERIOD_MS: f32 = 2000.0;

/// Sampling resolution of the closest-point search used on hover hand-off.
pub const CLOSEST_POINT_DIVISIONS: usize = 100;

/// Arc-length table resolution for uniform-speed sampling of the idle path.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Per-frame fraction the roaming marker moves toward a hovered hit point.
pub const HOVER_FOLLOW_FACTOR: f32 = 0.1;

/// Per-frame fraction the camera moves toward its flight target.
pub const FLIGHT_LERP_FACTOR: f32 = 0.05;

/// A flight ends once the camera is closer than this to its target.
pub const FLIGHT_ARRIVAL_DISTANCE: f32 = 0.1;

/// Offset from a clicked marker to the fly-to camera position.
pub const FLIGHT_TARGET_OFFSET: [f32; 3] = [5.0, 5.0, 5.0];

/// Camera rest position, also the fly-back target.
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 5.8, 25.0];

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Orbit damping; residual rotation decays by `1 - ORBIT_DAMPING` per frame.
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

/// Zoom limits for the orbit camera, measured from its target.
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;

/// Per-notch zoom factor, raised to the orbit zoom speed.
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
