//! Ray-segment intersection with a linearly varying radius.

use conetrace_math::{Point2, Point3};

use crate::{PrimitiveHit, Ray};

/// Intersect a ray with a thick segment from `p0` (radius `r0`) to `p1` (radius `r1`).
///
/// Solves the 2x2 normal equations for the mutually closest points of the
/// ray line and the segment line. The ray parameter comes from the infinite
/// lines; the segment parameter `s` is clamped to `[0, 1]` before the radius
/// test and is reported as `uv = (s, 0)`.
pub fn intersect_line(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    r0: f32,
    r1: f32,
) -> Option<PrimitiveHit> {
    let u = ray.direction;
    let v = p1 - p0;
    let w = ray.origin - p0;

    let a = u.dot(&u);
    let b = u.dot(&v);
    let c = v.dot(&v);
    let d = u.dot(&w);
    let e = v.dot(&w);
    let det = a * c - b * b;

    // Parallel lines
    if det == 0.0 {
        return None;
    }

    let t = (b * e - c * d) / det;
    let s = (a * e - b * d) / det;
    if !ray.contains(t) {
        return None;
    }

    let s = s.clamp(0.0, 1.0);
    let pr = ray.point_at(t);
    let pl = p0 + v * s;
    let prl = pr - pl;

    let r = r0 * (1.0 - s) + r1 * s;
    if prl.dot(&prl) > r * r {
        return None;
    }

    Some(PrimitiveHit::new(Point2::new(s, 0.0), t))
}
