//! Ray-triangle (Möller–Trumbore) and ray-quad intersection.

use conetrace_math::geometry::flip_uv;
use conetrace_math::{Point2, Point3};

use crate::{PrimitiveHit, Ray};

/// Intersect a ray with the triangle `(p0, p1, p2)`.
///
/// The reported uv are the barycentric weights of `p1` and `p2`.
pub fn intersect_triangle(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
) -> Option<PrimitiveHit> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let pvec = ray.direction.cross(&edge2);
    let det = edge1.dot(&pvec);
    // Ray parallel to the triangle plane
    if det == 0.0 {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - p0;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = ray.direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if !ray.contains(t) {
        return None;
    }

    Some(PrimitiveHit::new(Point2::new(u, v), t))
}

/// Intersect a ray with the quad `(p0, p1, p2, p3)`.
///
/// The quad is split into `(p0, p1, p3)` and `(p2, p3, p1)`; hits on the
/// second half report `1 - uv` so the parameterization covers the unit
/// square. When `p2 == p3` the quad is the triangle `(p0, p1, p3)`.
pub fn intersect_quad(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
) -> Option<PrimitiveHit> {
    if p2 == p3 {
        return intersect_triangle(ray, p0, p1, p3);
    }

    let mut nearest = intersect_triangle(ray, p0, p1, p3);
    let tmax = nearest.map_or(ray.tmax, |hit| hit.distance);
    let narrowed = ray.with_bounds(ray.tmin, tmax);
    if let Some(hit) = intersect_triangle(&narrowed, p2, p3, p1) {
        nearest = Some(PrimitiveHit::new(flip_uv(&hit.uv), hit.distance));
    }
    nearest
}
