/// Control points on the closed star path (alternating outer and inner).
pub const STAR_POINT_COUNT: usize = 10;

/// Distance of the outer star points from the origin.
pub const STAR_OUTER_RADIUS: f32 = 10.0;

/// Distance of the inner star points from the origin.
pub const STAR_INNER_RADIUS: f32 = 5.0;

/// Rotation applied to every control point about Z so the first outer point sits on +Y.
pub const STAR_ROTATION: f32 = std::f32::consts::FRAC_PI_2;

/// Formation markers sit on every `FORMATION_STRIDE`-th control point.
pub const FORMATION_STRIDE: usize = 2;

pub const FORMATION_CAPSULE_RADIUS: f32 = 0.5;
pub const FORMATION_CAPSULE_LENGTH: f32 = 1.0;

pub const ROAMING_CAPSULE_RADIUS: f32 = 1.0;
pub const ROAMING_CAPSULE_LENGTH: f32 = 1.0;

/// Build the unrotated star control point for index `i`, then rotate it by
/// [`STAR_ROTATION`]. Even indices use the outer radius.
pub fn star_control_point(i: usize, count: usize, outer: f32, inner: f32, rotation: f32) -> [f32; 3] {
    let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
    let radius = if i % 2 == 0 { outer } else { inner };
    let x = radius * angle.cos();
    let y = radius * angle.sin();

    let (sin, cos) = rotation.sin_cos();
    [x * cos - y * sin, x * sin + y * cos, 0.0]
}
