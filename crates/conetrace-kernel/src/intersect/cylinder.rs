//! Ray-cylinder intersection with end caps.

use conetrace_math::{Point2, Point3, Vec3};

use crate::{CylinderHit, CylinderPart, PrimitiveHit, Ray};

/// Intersect a ray with the infinite cylinder of `radius` around the line
/// through `p0` with unit direction `axis`.
///
/// Returns the entry and exit parameters. A ray parallel to the axis has
/// no finite roots: it returns an unbounded interval when it runs inside
/// the cylinder and `None` otherwise.
pub fn intersect_infinite_cylinder(
    ray: &Ray,
    p0: &Point3,
    axis: &Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let rc = ray.origin - p0;
    let n = ray.direction.cross(axis);
    let ln = n.norm();

    if ln == 0.0 {
        let off_axis = (rc - axis * rc.dot(axis)).norm();
        return (off_axis <= radius).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let n = n / ln;

    // Distance between the ray line and the axis
    let d = rc.dot(&n).abs();
    if d > radius {
        return None;
    }

    let t = -rc.cross(axis).dot(&n) / ln;
    let o = n.cross(axis).normalize();
    let s = ((radius * radius - d * d).sqrt() / ray.direction.dot(&o)).abs();
    Some((t - s, t + s))
}

/// Parameter interval along the ray with the part bounding each end.
struct Span {
    t_in: f32,
    t_out: f32,
    part_in: CylinderPart,
    part_out: CylinderPart,
}

impl Span {
    /// Clip against the half-space `normal · (x - plane_point) <= 0`.
    ///
    /// Returns false when the interval becomes empty. A cap only replaces a
    /// bound when it lies strictly inside the current interval.
    fn clip_cap(
        &mut self,
        ray: &Ray,
        normal: &Vec3,
        plane_point: &Point3,
        part: CylinderPart,
    ) -> bool {
        let dc = normal.dot(&ray.direction);
        let dw = normal.dot(&(ray.origin - plane_point));

        if dc == 0.0 {
            // Parallel to the cap: keep only if on the inner side
            return dw < 0.0;
        }

        let t = -dw / dc;
        if dc > 0.0 {
            // Leaving through this cap
            if t > self.t_in && t < self.t_out {
                self.t_out = t;
                self.part_out = part;
            }
            t >= self.t_in
        } else {
            // Entering through this cap
            if t > self.t_in && t < self.t_out {
                self.t_in = t;
                self.part_in = part;
            }
            t <= self.t_out
        }
    }
}

/// Intersect a ray with the capped cylinder from `p0` to `p1`.
///
/// The lateral surface uses `r0` only; `_r1` is accepted so cylinders share
/// the segment signature, but tapering is not modeled. The nearest positive
/// end of the clipped interval is reported, with `uv = (s, 0)` where `s` is
/// the axial parameter of the hit point clamped to `[0, 1]`.
pub fn intersect_cylinder(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    r0: f32,
    _r1: f32,
) -> Option<CylinderHit> {
    let v = p1 - p0;
    let axis = v.normalize();

    let (t_in, t_out) = intersect_infinite_cylinder(ray, p0, &axis, r0)?;
    let mut span = Span {
        t_in,
        t_out,
        part_in: CylinderPart::Side,
        part_out: CylinderPart::Side,
    };

    if !span.clip_cap(ray, &-axis, p0, CylinderPart::Base) {
        return None;
    }
    if !span.clip_cap(ray, &axis, p1, CylinderPart::Top) {
        return None;
    }

    if span.t_in < 0.0 && span.t_out < 0.0 {
        return None;
    }

    // Entry first, then exit; each must be positive and within the ray bounds
    let (t, part, entering) =
        if span.t_in < span.t_out && span.t_in > 0.0 && ray.contains(span.t_in) {
            (span.t_in, span.part_in, true)
        } else if span.t_out > 0.0 && ray.contains(span.t_out) {
            (span.t_out, span.part_out, false)
        } else {
            return None;
        };

    let s = ((ray.point_at(t) - p0).dot(&v) / v.dot(&v)).clamp(0.0, 1.0);
    Some(CylinderHit {
        hit: PrimitiveHit::new(Point2::new(s, 0.0), t),
        part,
        entering,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cylinder() -> (Point3, Point3) {
        (Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0))
    }

    #[test]
    fn test_ray_cylinder_side() {
        let (p0, p1) = cylinder();
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1.0), Vec3::x());
        let hit = intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).unwrap();
        assert!((hit.hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.hit.uv.x - 0.5).abs() < 1e-5);
        assert_eq!(hit.part, CylinderPart::Side);
        assert!(hit.entering);
    }

    #[test]
    fn test_ray_cylinder_along_axis_hits_base() {
        let (p0, p1) = cylinder();
        let ray = Ray::new(Point3::new(0.2, 0.0, -5.0), Vec3::z());
        let hit = intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).unwrap();
        assert!((hit.hit.distance - 5.0).abs() < 1e-5);
        assert_eq!(hit.part, CylinderPart::Base);
        assert!(hit.entering);
        assert_eq!(hit.hit.uv.x, 0.0);
    }

    #[test]
    fn test_ray_cylinder_from_above_hits_top() {
        let (p0, p1) = cylinder();
        let ray = Ray::new(Point3::new(0.0, 0.3, 6.0), -Vec3::z());
        let hit = intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).unwrap();
        assert!((hit.hit.distance - 4.0).abs() < 1e-5);
        assert_eq!(hit.part, CylinderPart::Top);
    }

    #[test]
    fn test_ray_cylinder_from_inside_exits() {
        let (p0, p1) = cylinder();
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::x());
        let hit = intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).unwrap();
        assert!((hit.hit.distance - 1.0).abs() < 1e-5);
        assert_eq!(hit.part, CylinderPart::Side);
        assert!(!hit.entering);
    }

    #[test]
    fn test_ray_cylinder_misses() {
        let (p0, p1) = cylinder();
        // Off to the side
        let side = Ray::new(Point3::new(-5.0, 2.0, 1.0), Vec3::x());
        assert!(intersect_cylinder(&side, &p0, &p1, 1.0, 1.0).is_none());
        // Above the top cap, parallel to it
        let above = Ray::new(Point3::new(-5.0, 0.0, 3.0), Vec3::x());
        assert!(intersect_cylinder(&above, &p0, &p1, 1.0, 1.0).is_none());
        // Parallel to the axis, outside
        let outside = Ray::new(Point3::new(3.0, 0.0, -5.0), Vec3::z());
        assert!(intersect_cylinder(&outside, &p0, &p1, 1.0, 1.0).is_none());
        // Pointing away
        let away = Ray::new(Point3::new(-5.0, 0.0, 1.0), -Vec3::x());
        assert!(intersect_cylinder(&away, &p0, &p1, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_ray_cylinder_respects_tmax() {
        let (p0, p1) = cylinder();
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1.0), Vec3::x()).with_bounds(0.0, 3.0);
        assert!(intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_ray_cylinder_tmin_past_entry_reports_exit() {
        let (p0, p1) = cylinder();
        // Enters at t = 4, exits at t = 6
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1.0), Vec3::x()).with_bounds(5.0, f32::MAX);
        let hit = intersect_cylinder(&ray, &p0, &p1, 1.0, 1.0).unwrap();
        assert!((hit.hit.distance - 6.0).abs() < 1e-5);
        assert_eq!(hit.part, CylinderPart::Side);
        assert!(!hit.entering);

        let beyond = ray.with_bounds(6.5, f32::MAX);
        assert!(intersect_cylinder(&beyond, &p0, &p1, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_infinite_cylinder_interval() {
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::x());
        let (t_in, t_out) = intersect_infinite_cylinder(&ray, &Point3::origin(), &Vec3::z(), 2.0).unwrap();
        assert!((t_in - 3.0).abs() < 1e-5);
        assert!((t_out - 7.0).abs() < 1e-5);

        let parallel = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::z());
        let (a, b) = intersect_infinite_cylinder(&parallel, &Point3::origin(), &Vec3::z(), 2.0).unwrap();
        assert!(a.is_infinite() && b.is_infinite());
    }
}
