use bevy::prelude::*;

/// Intersect a world-space ray with a Y-aligned capsule placed by `xf`.
/// The ray is moved into the capsule's local space, so the returned `t` is in
/// world units along `dir` even when the transform carries scale.
pub fn ray_hits_capsule(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    radius: f32,
    length: f32,
) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let half = Vec3::Y * (length * 0.5);
    ray_capsule_hit_t(o_local, d_local, -half, half, radius)
}

/// Nearest non-negative `t` where `origin + t * dir` enters the capsule swept
/// by a sphere of `radius` from `a` to `b`. `dir` need not be normalised.
pub fn ray_capsule_hit_t(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, radius: f32) -> Option<f32> {
    let mut best: Option<f32> = None;
    let mut keep = |t: f32| {
        if t >= 0.0 && best.is_none_or(|current| t < current) {
            best = Some(t);
        }
    };

    // Cylindrical body, only where the hit projects inside the segment.
    let ba = b - a;
    let oa = origin - a;
    let baba = ba.dot(ba);
    let bard = ba.dot(dir);
    let baoa = ba.dot(oa);
    let qa = baba * dir.dot(dir) - bard * bard;
    if qa.abs() > f32::EPSILON {
        let qb = baba * dir.dot(oa) - baoa * bard;
        let qc = baba * oa.dot(oa) - baoa * baoa - radius * radius * baba;
        let h = qb * qb - qa * qc;
        if h >= 0.0 {
            let t = (-qb - h.sqrt()) / qa;
            let y = baoa + t * bard;
            if y > 0.0 && y < baba {
                keep(t);
            }
        }
    }

    // End caps.
    for center in [a, b] {
        if let Some(t) = ray_sphere_hit_t(origin, dir, center, radius) {
            keep(t);
        }
    }

    best
}

fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.dot(dir);
    if a <= f32::EPSILON {
        return None;
    }
    let half_b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let h = half_b * half_b - a * c;
    if h < 0.0 {
        return None;
    }
    let sqrt_h = h.sqrt();
    let near = (-half_b - sqrt_h) / a;
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-half_b + sqrt_h) / a;
    (far >= 0.0).then_some(far)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(0.0, -0.5, 0.0);
    const B: Vec3 = Vec3::new(0.0, 0.5, 0.0);

    #[test]
    fn hits_body_side_on() {
        let t = ray_capsule_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, A, B, 0.5).unwrap();
        assert!((t - 9.5).abs() < 1e-5);
    }

    #[test]
    fn hits_top_cap_along_axis() {
        let t = ray_capsule_hit_t(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, A, B, 0.5).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn hits_bottom_cap_from_below() {
        let t = ray_capsule_hit_t(Vec3::new(0.0, -10.0, 0.0), Vec3::Y, A, B, 0.5).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn misses_beside_capsule() {
        assert!(ray_capsule_hit_t(Vec3::new(2.0, 0.0, 10.0), Vec3::NEG_Z, A, B, 0.5).is_none());
        // Just past the rounded tip.
        assert!(ray_capsule_hit_t(Vec3::new(0.0, 1.05, 10.0), Vec3::NEG_Z, A, B, 0.5).is_none());
    }

    #[test]
    fn ignores_capsule_behind_ray() {
        assert!(ray_capsule_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, A, B, 0.5).is_none());
    }

    #[test]
    fn unnormalised_direction_scales_t() {
        let t = ray_capsule_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z * 2.0, A, B, 0.5).unwrap();
        assert!((t - 4.75).abs() < 1e-5);
    }

    #[test]
    fn world_transform_is_respected() {
        let xf = GlobalTransform::from(Transform::from_xyz(0.0, 10.0, 0.0));
        let t = ray_hits_capsule(Vec3::new(0.0, 10.0, 20.0), Vec3::NEG_Z, &xf, 0.5, 1.0).unwrap();
        assert!((t - 19.5).abs() < 1e-4);
        assert!(ray_hits_capsule(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z, &xf, 0.5, 1.0).is_none());
    }
}
