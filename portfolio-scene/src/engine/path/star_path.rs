use bevy::prelude::*;
use constants::layout::star_control_point;

/// Chord lengths below this are treated as degenerate when computing knot spacing.
const MIN_KNOT_SPACING: f32 = 1e-4;

/// Parameter step used for finite-difference tangents.
const TANGENT_DELTA: f32 = 1e-4;

/// Closed centripetal Catmull-Rom curve through the star control points.
///
/// `point(t)` evaluates the raw curve parameter. `point_at(u)` and
/// `tangent_at(u)` take a normalised arc-length position, so equal steps in
/// `u` cover equal distances along the path.
#[derive(Resource, Debug, Clone)]
pub struct StarPath {
    points: Vec<Vec3>,
    arc_lengths: Vec<f32>,
}

/// Result of [`StarPath::closest_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// Arc-length position in `[0, 1)`.
    pub t: f32,
    pub point: Vec3,
    pub distance: f32,
}

impl StarPath {
    pub fn new(points: Vec<Vec3>, arc_length_divisions: usize) -> Self {
        let mut path = Self {
            points,
            arc_lengths: Vec::new(),
        };
        path.arc_lengths = path.build_arc_lengths(arc_length_divisions.max(1));
        path
    }

    /// Build the alternating outer/inner star, rotated about Z.
    pub fn from_layout(
        count: usize,
        outer_radius: f32,
        inner_radius: f32,
        rotation: f32,
        arc_length_divisions: usize,
    ) -> Self {
        let points = (0..count)
            .map(|i| Vec3::from_array(star_control_point(i, count, outer_radius, inner_radius, rotation)))
            .collect();
        Self::new(points, arc_length_divisions)
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Approximate total length of the closed path.
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Evaluate the curve at raw parameter `t`; `t` wraps around the closed loop.
    pub fn point(&self, t: f32) -> Option<Vec3> {
        let count = self.points.len();
        if count < 2 || !t.is_finite() {
            return None;
        }

        let p = count as f32 * t;
        let segment = p.floor();
        let weight = p - segment;
        let i = (segment as i64).rem_euclid(count as i64) as usize;

        let p0 = self.points[(i + count - 1) % count];
        let p1 = self.points[i];
        let p2 = self.points[(i + 1) % count];
        let p3 = self.points[(i + 2) % count];

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_SPACING {
            dt2 = dt1;
        }

        // Non-uniform tangents at p1 and p2, rescaled to the [0, 1] segment.
        let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        let point = cubic_hermite(p1, p2, m1, m2, weight);
        point.is_finite().then_some(point)
    }

    /// Map an arc-length position `u` to the raw curve parameter.
    pub fn u_to_t(&self, u: f32) -> f32 {
        let lengths = &self.arc_lengths;
        let n = lengths.len();
        let total = self.length();
        if n < 2 || total <= 0.0 {
            return u;
        }

        let target = u * total;
        let upper = lengths.partition_point(|&len| len <= target);
        if upper == 0 {
            return 0.0;
        }
        let i = upper - 1;
        if i >= n - 1 {
            return 1.0;
        }

        let before = lengths[i];
        let span = lengths[i + 1] - before;
        let fraction = if span > f32::EPSILON {
            (target - before) / span
        } else {
            0.0
        };

        (i as f32 + fraction) / (n - 1) as f32
    }

    pub fn point_at(&self, u: f32) -> Option<Vec3> {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at arc-length position `u`, or `None` where the curve is degenerate.
    pub fn tangent_at(&self, u: f32) -> Option<Vec3> {
        let t = self.u_to_t(u);
        let before = self.point((t - TANGENT_DELTA).max(0.0))?;
        let after = self.point((t + TANGENT_DELTA).min(1.0))?;
        (after - before).try_normalize()
    }

    /// Sample the path at `divisions + 1` evenly spaced arc-length positions and
    /// return the one nearest to `query`. Ties keep the earlier sample.
    pub fn closest_point(&self, query: Vec3, divisions: usize) -> Option<ClosestPoint> {
        let divisions = divisions.max(1);
        let mut best: Option<ClosestPoint> = None;

        for i in 0..=divisions {
            let t = i as f32 / divisions as f32;
            let Some(point) = self.point_at(t) else {
                continue;
            };
            let distance = point.distance(query);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(ClosestPoint { t, point, distance });
            }
        }

        // The loop is closed, so the final sample is the first one again.
        best.map(|mut closest| {
            if closest.t >= 1.0 {
                closest.t = 0.0;
            }
            closest
        })
    }

    fn build_arc_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        lengths.push(0.0);

        let Some(mut last) = self.point(0.0) else {
            return lengths;
        };
        let mut sum = 0.0;
        for step in 1..=divisions {
            let Some(current) = self.point(step as f32 / divisions as f32) else {
                return vec![0.0];
            };
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        lengths
    }
}

#[inline]
fn cubic_hermite(p1: Vec3, p2: Vec3, m1: Vec3, m2: Vec3, w: f32) -> Vec3 {
    let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2;
    let c3 = 2.0 * p1 - 2.0 * p2 + m1 + m2;
    p1 + m1 * w + c2 * (w * w) + c3 * (w * w * w)
}
