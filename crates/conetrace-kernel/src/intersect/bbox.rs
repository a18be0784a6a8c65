//! Ray-box slab tests.

use conetrace_math::{Aabb3, Vec3};

use crate::Ray;

/// Relative widening applied to the exit parameter before comparison, so
/// rays grazing a face or running along an edge are kept.
pub const DEFAULT_SLAB_SLACK: f32 = 1.000_000_24;

/// Slab test with a precomputed inverse direction and explicit slack.
///
/// The entry parameter is the largest per-axis entry and `ray.tmin`; the
/// exit parameter is the smallest per-axis exit and `ray.tmax`, scaled by
/// `slack`. Per-axis bounds are swapped where the inverse direction is
/// negative. A NaN bound (ray lying in a slab plane) constrains nothing.
pub fn slab_test(ray: &Ray, inv_dir: &Vec3, bbox: &Aabb3, slack: f32) -> bool {
    let mut t0 = ray.tmin;
    let mut t1 = ray.tmax;
    for axis in 0..3 {
        let mut near = (bbox.min[axis] - ray.origin[axis]) * inv_dir[axis];
        let mut far = (bbox.max[axis] - ray.origin[axis]) * inv_dir[axis];
        if inv_dir[axis] < 0.0 {
            std::mem::swap(&mut near, &mut far);
        }
        t0 = t0.max(near);
        t1 = t1.min(far);
    }
    t0 <= t1 * slack
}

/// Intersect a ray with an axis-aligned box, computing the inverse
/// direction on the fly.
pub fn intersect_bbox(ray: &Ray, bbox: &Aabb3) -> bool {
    slab_test(ray, &ray.inv_direction(), bbox, DEFAULT_SLAB_SLACK)
}

/// Intersect a ray with an axis-aligned box using a precomputed
/// [`Ray::inv_direction`].
pub fn intersect_bbox_inv(ray: &Ray, inv_dir: &Vec3, bbox: &Aabb3) -> bool {
    slab_test(ray, inv_dir, bbox, DEFAULT_SLAB_SLACK)
}
