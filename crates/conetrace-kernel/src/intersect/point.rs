//! Ray-point intersection (disc approximation).

use conetrace_math::{Point2, Point3};

use crate::{PrimitiveHit, Ray};

/// Intersect a ray with a point of radius `r`.
///
/// The point behaves like a camera-facing disc: the ray hits when its
/// closest approach to `p` lies in bounds and within `r` of it.
pub fn intersect_point(ray: &Ray, p: &Point3, r: f32) -> Option<PrimitiveHit> {
    // Line parameter of minimum distance
    let w = p - ray.origin;
    let t = w.dot(&ray.direction) / ray.direction.dot(&ray.direction);
    if !ray.contains(t) {
        return None;
    }

    let prp = p - ray.point_at(t);
    if prp.dot(&prp) > r * r {
        return None;
    }

    Some(PrimitiveHit::new(Point2::origin(), t))
}
