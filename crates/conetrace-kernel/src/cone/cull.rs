//! Exact cone-vs-box test for pruning traversal.
//!
//! A point `P` (relative to the apex) lies inside the cone when
//! `q(P) = (axis·P)² - cos²(spread) |P|² > 0` and `axis·P > 0`. The box is
//! accepted as soon as any probed point satisfies this. Probes are, in
//! order: the axis ray, the silhouette corners, and the interior maximum of
//! the angular ratio along the two silhouette edges adjacent to the best
//! corner.

use conetrace_math::{Aabb3, Vec3};

use super::silhouette::{self, INSIDE, SILHOUETTES};
use crate::intersect::slab_test;
use crate::Cone;

/// A silhouette corner in front of the apex.
struct CornerProbe {
    /// Corner relative to the apex.
    p: Vec3,
    /// `axis · p`, positive.
    axis_dot: f32,
    sqr_axis_dot: f32,
    sqr_len: f32,
}

impl CornerProbe {
    /// True if this corner subtends a smaller angle to the axis than `other`.
    fn beats(&self, other: &CornerProbe) -> bool {
        self.sqr_axis_dot * other.sqr_len > other.sqr_axis_dot * self.sqr_len
    }
}

/// Whether a cone may overlap `bbox`.
///
/// Never rejects a box that the cone's axis ray hits. `slack` widens the
/// axis-ray slab test as in [`slab_test`].
pub fn cone_intersect_bbox(cone: &Cone, bbox: &Aabb3, slack: f32) -> bool {
    let axis = cone.direction;
    let center = bbox.center();
    let extent = (bbox.max - bbox.min) * 0.5;

    // Box entirely behind the plane through the apex
    let to_center = center - cone.origin;
    let axis_dot_center = axis.dot(&to_center);
    let projected_radius = extent.dot(&axis.abs());
    if axis_dot_center + projected_radius <= 0.0 {
        return false;
    }

    let axis_ray = cone.axis_ray();
    if slab_test(&axis_ray, &axis_ray.inv_direction(), bbox, slack) {
        return true;
    }

    let region = silhouette::classify(&to_center, &extent);
    if region == INSIDE {
        return true;
    }
    let polygon = SILHOUETTES[region];

    let cos_spread = cone.spread.cos();
    let cos2 = cos_spread * cos_spread;

    let mut best: Option<(usize, CornerProbe)> = None;
    for (i, &corner) in polygon.iter().enumerate() {
        let offset = silhouette::corner_offset(corner, &extent);
        let axis_dot = axis.dot(&offset) + axis_dot_center;
        if axis_dot <= 0.0 {
            continue;
        }

        let p = offset + to_center;
        let probe = CornerProbe {
            p,
            axis_dot,
            sqr_axis_dot: axis_dot * axis_dot,
            sqr_len: p.norm_squared(),
        };
        if probe.sqr_axis_dot - cos2 * probe.sqr_len > 0.0 {
            return true;
        }
        let better = match &best {
            Some((_, current)) => probe.beats(current),
            None => true,
        };
        if better {
            best = Some((i, probe));
        }
    }

    let Some((i_max, best)) = best else {
        return false;
    };

    let n = polygon.len();
    let j_max = i32::from(polygon[i_max]);

    // Counterclockwise edge
    let j_next = i32::from(polygon[(i_max + 1) % n]);
    if let Some(hit) = edge_maximum(&axis, &best, j_next - j_max, 1.0, cos2) {
        return hit;
    }

    // Clockwise edge
    let j_prev = i32::from(polygon[(i_max + n - 1) % n]);
    if let Some(hit) = edge_maximum(&axis, &best, j_max - j_prev, -1.0, cos2) {
        return hit;
    }

    false
}

/// Probe the edge leaving `best` along the axis given by the corner index
/// difference `j_diff`.
///
/// Returns `None` when the ratio decreases away from the corner, so the edge
/// has no interior maximum. Otherwise evaluates the cone at the stationary
/// point and, failing that, reports which side of the edge's great arc the
/// axis lies on.
fn edge_maximum(
    axis: &Vec3,
    best: &CornerProbe,
    j_diff: i32,
    orientation: f32,
    cos2: f32,
) -> Option<bool> {
    let s = if j_diff > 0 { 1.0 } else { -1.0 };
    let k0 = (j_diff.unsigned_abs() >> 1) as usize;
    let p = &best.p;

    let fder = orientation * s * (axis[k0] * best.sqr_len - best.axis_dot * p[k0]);
    if fder <= 0.0 || fder.is_nan() {
        return None;
    }

    let k1 = (k0 + 1) % 3;
    let k2 = (k1 + 1) % 3;
    let numer = p[k1] * p[k1] + p[k2] * p[k2];
    let denom = axis[k1] * p[k1] + axis[k2] * p[k2];

    let mut m = Vec3::zeros();
    m[k0] = numer * axis[k0];
    m[k1] = denom * p[k1];
    m[k2] = denom * p[k2];

    let axis_dot_m = axis.dot(&m);
    if axis_dot_m * axis_dot_m - cos2 * m.norm_squared() > 0.0 {
        return Some(true);
    }

    let det = s * (axis[k1] * p[k2] - axis[k2] * p[k1]);
    Some(det <= 0.0)
}
