//! Point-primitive proximity tests.
//!
//! These answer "is any part of this primitive within `dist_max` of `pos`",
//! with the primitive's radius interpolated at its closest point added to the
//! allowance. Hits report the closest-point uv and the euclidean distance.

use conetrace_math::geometry::flip_uv;
use conetrace_math::{Aabb3, Point2, Point3};

use crate::PrimitiveHit;

/// Check whether a point of radius `r` lies within `dist_max` of `pos`.
pub fn overlap_point(pos: &Point3, dist_max: f32, p: &Point3, r: f32) -> Option<PrimitiveHit> {
    let d2 = (pos - p).norm_squared();
    let reach = dist_max + r;
    if d2 > reach * reach {
        return None;
    }
    Some(PrimitiveHit::new(Point2::origin(), d2.sqrt()))
}

/// Segment parameter of the point on `p0..p1` closest to `pos`, in `[0, 1]`.
pub fn closestuv_line(pos: &Point3, p0: &Point3, p1: &Point3) -> f32 {
    let ab = p1 - p0;
    ((pos - p0).dot(&ab) / ab.dot(&ab)).clamp(0.0, 1.0)
}

/// Check whether a thick segment lies within `dist_max` of `pos`.
pub fn overlap_line(
    pos: &Point3,
    dist_max: f32,
    p0: &Point3,
    p1: &Point3,
    r0: f32,
    r1: f32,
) -> Option<PrimitiveHit> {
    let u = closestuv_line(pos, p0, p1);
    let p = p0 + (p1 - p0) * u;
    let r = r0 + (r1 - r0) * u;
    let d2 = (pos - p).norm_squared();
    let reach = dist_max + r;
    if d2 > reach * reach {
        return None;
    }
    Some(PrimitiveHit::new(Point2::new(u, 0.0), d2.sqrt()))
}

/// Barycentric uv of the point on triangle `(p0, p1, p2)` closest to `pos`.
///
/// Classifies `pos` against the seven Voronoi regions of the triangle: the
/// three vertices, the three edges and the face.
pub fn closestuv_triangle(pos: &Point3, p0: &Point3, p1: &Point3, p2: &Point3) -> Point2 {
    let ab = p1 - p0;
    let ac = p2 - p0;

    let ap = pos - p0;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return Point2::new(0.0, 0.0);
    }

    let bp = pos - p1;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return Point2::new(1.0, 0.0);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return Point2::new(d1 / (d1 - d3), 0.0);
    }

    let cp = pos - p2;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return Point2::new(0.0, 1.0);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return Point2::new(0.0, d2 / (d2 - d6));
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Point2::new(1.0 - w, w);
    }

    // Face
    let denom = 1.0 / (va + vb + vc);
    Point2::new(vb * denom, vc * denom)
}

/// Check whether a triangle with per-vertex radii lies within `dist_max` of `pos`.
#[allow(clippy::too_many_arguments)]
pub fn overlap_triangle(
    pos: &Point3,
    dist_max: f32,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    r0: f32,
    r1: f32,
    r2: f32,
) -> Option<PrimitiveHit> {
    let uv = closestuv_triangle(pos, p0, p1, p2);
    let w = 1.0 - uv.x - uv.y;
    let p = Point3::from(p0.coords * w + p1.coords * uv.x + p2.coords * uv.y);
    let r = r0 * w + r1 * uv.x + r2 * uv.y;
    let d2 = (p - pos).norm_squared();
    let reach = dist_max + r;
    if d2 > reach * reach {
        return None;
    }
    Some(PrimitiveHit::new(uv, d2.sqrt()))
}

/// Check whether a quad with per-vertex radii lies within `dist_max` of `pos`.
///
/// Tests `(p0, p1, p3)` first and narrows `dist_max` to its distance. A hit
/// on `(p2, p3, p1)` replaces it only when strictly nearer, with uv reported
/// as `1 - uv`.
#[allow(clippy::too_many_arguments)]
pub fn overlap_quad(
    pos: &Point3,
    dist_max: f32,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
    r0: f32,
    r1: f32,
    r2: f32,
    r3: f32,
) -> Option<PrimitiveHit> {
    if p2 == p3 {
        return overlap_triangle(pos, dist_max, p0, p1, p3, r0, r1, r3);
    }

    let first = overlap_triangle(pos, dist_max, p0, p1, p3, r0, r1, r3);
    let dist_max = first.map_or(dist_max, |hit| hit.distance);
    match overlap_triangle(pos, dist_max, p2, p3, p1, r2, r3, r1) {
        Some(hit) if first.map_or(true, |first| hit.distance < first.distance) => {
            Some(PrimitiveHit::new(flip_uv(&hit.uv), hit.distance))
        }
        _ => first,
    }
}

/// Check whether a box lies strictly within `dist_max` of `pos`.
pub fn overlap_bbox(pos: &Point3, dist_max: f32, bbox: &Aabb3) -> bool {
    let mut dd = 0.0;
    for axis in 0..3 {
        if pos[axis] < bbox.min[axis] {
            dd += (bbox.min[axis] - pos[axis]).powi(2);
        }
        if pos[axis] > bbox.max[axis] {
            dd += (pos[axis] - bbox.max[axis]).powi(2);
        }
    }
    dd < dist_max * dist_max
}

/// Check whether two boxes overlap; touching faces count.
pub fn overlap_bboxes(a: &Aabb3, b: &Aabb3) -> bool {
    (0..3).all(|axis| a.max[axis] >= b.min[axis] && a.min[axis] <= b.max[axis])
}
