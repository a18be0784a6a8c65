//! Ray-sphere intersection (quadratic equation).

use std::f32::consts::PI;

use conetrace_math::{Point2, Point3};

use crate::{PrimitiveHit, Ray};

/// Intersect a ray with the sphere of radius `r` centered at `p`.
///
/// Both roots of the quadratic must lie inside the ray interval, so a ray
/// starting inside the sphere misses. The near root is reported, with uv the
/// spherical coordinates of the hit: `u` is the longitude wrapped to
/// `[0, 1)` and `v` the colatitude in `[0, 1]`.
pub fn intersect_sphere(ray: &Ray, p: &Point3, r: f32) -> Option<PrimitiveHit> {
    let oc = ray.origin - p;

    // Quadratic: |oc + t*d|^2 = r^2
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * oc.dot(&ray.direction);
    let c = oc.dot(&oc) - r * r;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = (-b - sqrt_disc) / (2.0 * a);
    let t_far = (-b + sqrt_disc) / (2.0 * a);
    if !ray.contains(t_near) || !ray.contains(t_far) {
        return None;
    }

    let local = (ray.point_at(t_near) - p) / r;
    let mut u = local.y.atan2(local.x) / (2.0 * PI);
    if u < 0.0 {
        u += 1.0;
    }
    // Tiny negative angles round up to exactly 1
    if u >= 1.0 {
        u = 0.0;
    }
    let v = local.z.clamp(-1.0, 1.0).acos() / PI;

    Some(PrimitiveHit::new(Point2::new(u, v), t_near))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use conetrace_math::geometry::sphere_point;
    use conetrace_math::Vec3;

    #[test]
    fn test_ray_sphere_front_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::z());
        let hit = intersect_sphere(&ray, &Point3::origin(), 1.0).unwrap();
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
        assert!((0.0..1.0).contains(&hit.uv.x));
        assert!((0.0..=1.0).contains(&hit.uv.y));
    }

    #[test]
    fn test_ray_sphere_uv_round_trips_to_point() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(Point3::new(-4.0, 2.3, 3.4), Vec3::x());
        let hit = intersect_sphere(&ray, &center, 2.0).unwrap();
        assert_relative_eq!(
            sphere_point(&center, 2.0, &hit.uv),
            ray.point_at(hit.distance),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_ray_sphere_longitude_seam_wraps_to_zero() {
        // Hit just below the +x seam, where atan2 is a tiny negative angle
        let ray = Ray::new(Point3::new(5.0, -1e-8, 0.0), -Vec3::x());
        let hit = intersect_sphere(&ray, &Point3::origin(), 1.0).unwrap();
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
        assert!((0.0..1.0).contains(&hit.uv.x));
        assert_relative_eq!(hit.uv.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let ray = Ray::new(Point3::new(0.0, 2.0, -5.0), Vec3::z());
        assert!(intersect_sphere(&ray, &Point3::origin(), 1.0).is_none());
    }

    #[test]
    fn test_ray_sphere_inside_misses() {
        let ray = Ray::new(Point3::origin(), Vec3::z());
        assert!(intersect_sphere(&ray, &Point3::origin(), 1.0).is_none());
    }

    #[test]
    fn test_ray_sphere_far_root_beyond_tmax() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::z()).with_bounds(0.0, 5.0);
        assert!(intersect_sphere(&ray, &Point3::origin(), 1.0).is_none());
    }

    #[test]
    fn test_ray_sphere_behind() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::z());
        assert!(intersect_sphere(&ray, &Point3::origin(), 1.0).is_none());
    }
}
