//! Rays, cones, and the hit records returned by the solvers.

use conetrace_math::{Point2, Point3, Transform, Vec3};

/// Default lower bound of the valid ray interval.
pub const RAY_EPS: f32 = 1e-4;

/// A finite ray: `origin + t * direction` for `t` in `[tmin, tmax]`.
///
/// The direction is not normalized; hit distances are expressed in units of
/// its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
    /// Smallest accepted parameter.
    pub tmin: f32,
    /// Largest accepted parameter.
    pub tmax: f32,
}

impl Ray {
    /// Create a ray with the default `[RAY_EPS, f32::MAX]` interval.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            tmin: RAY_EPS,
            tmax: f32::MAX,
        }
    }

    /// Same ray with a different parameter interval.
    pub fn with_bounds(self, tmin: f32, tmax: f32) -> Self {
        Self { tmin, tmax, ..self }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// Component-wise reciprocal of the direction, for repeated box tests.
    ///
    /// Zero components map to signed infinities.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        self.direction.map(|d| 1.0 / d)
    }

    /// True if `t` lies inside the ray's parameter interval.
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.tmin && t <= self.tmax
    }

    /// This ray expressed through an affine transform; bounds are kept.
    pub fn transformed(&self, xform: &Transform) -> Self {
        Self {
            origin: xform.apply_point(&self.origin),
            direction: xform.apply_vec(&self.direction),
            ..*self
        }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3::origin(), Vec3::z())
    }
}

/// All rays leaving `origin` within `spread` radians of `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Apex of the cone.
    pub origin: Point3,
    /// Unit axis direction.
    pub direction: Vec3,
    /// Half-angle in radians.
    pub spread: f32,
    /// Smallest accepted parameter for sample rays.
    pub tmin: f32,
    /// Largest accepted parameter for sample rays.
    pub tmax: f32,
}

impl Cone {
    /// Create a cone with the default `[RAY_EPS, f32::MAX]` interval.
    pub fn new(origin: Point3, direction: Vec3, spread: f32) -> Self {
        Self {
            origin,
            direction,
            spread,
            tmin: RAY_EPS,
            tmax: f32::MAX,
        }
    }

    /// Same cone with a different parameter interval.
    pub fn with_bounds(self, tmin: f32, tmax: f32) -> Self {
        Self { tmin, tmax, ..self }
    }

    /// The plain ray along the cone axis, sharing the cone's bounds.
    pub fn axis_ray(&self) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.direction,
            tmin: self.tmin,
            tmax: self.tmax,
        }
    }

    /// Ray from the apex toward `target`, with the cone's bounds.
    pub fn ray_toward(&self, target: &Point3) -> Ray {
        Ray {
            origin: self.origin,
            direction: (target - self.origin).normalize(),
            tmin: self.tmin,
            tmax: self.tmax,
        }
    }
}

/// Local parameters and distance of a ray or overlap hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveHit {
    /// Surface parameters at the hit.
    pub uv: Point2,
    /// Ray parameter, or euclidean distance for overlap tests.
    pub distance: f32,
}

impl PrimitiveHit {
    /// Create a new hit record.
    pub fn new(uv: Point2, distance: f32) -> Self {
        Self { uv, distance }
    }
}

/// Which part of a capped cylinder a ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderPart {
    /// The cap at `p1`.
    Top,
    /// The lateral surface.
    Side,
    /// The cap at `p0`.
    Base,
}

/// Ray–cylinder hit with the struck part and crossing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderHit {
    /// Axial parameter and ray distance.
    pub hit: PrimitiveHit,
    /// Surface that bounds the interval at the reported end.
    pub part: CylinderPart,
    /// True when the ray enters the solid at the hit.
    pub entering: bool,
}

/// Aggregated result of a sampled cone query.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeHit {
    /// Surface parameters of every sample ray that hit, in sample order.
    pub uvs: Vec<Point2>,
    /// Nearest distance among the successful samples.
    pub distance: f32,
    /// Fraction of sample rays that hit.
    pub coverage: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_point_at() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(ray.point_at(1.5), Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn test_default_bounds() {
        let ray = Ray::default();
        assert_eq!(ray.tmin, RAY_EPS);
        assert_eq!(ray.tmax, f32::MAX);
        assert!(!ray.contains(0.0));
        assert!(ray.contains(1.0));
        let narrowed = ray.with_bounds(0.0, 2.0);
        assert!(narrowed.contains(0.0));
        assert!(!narrowed.contains(2.5));
    }

    #[test]
    fn test_inv_direction_zero_component() {
        let ray = Ray::new(Point3::origin(), Vec3::new(2.0, 0.0, -4.0));
        let inv = ray.inv_direction();
        assert_eq!(inv.x, 0.5);
        assert!(inv.y.is_infinite());
        assert_eq!(inv.z, -0.25);
    }

    #[test]
    fn test_transformed_ray() {
        let ray = Ray::new(Point3::origin(), Vec3::x()).with_bounds(0.0, 10.0);
        let moved = ray.transformed(&Transform::translation(0.0, 0.0, 5.0));
        assert_relative_eq!(moved.origin, Point3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(moved.direction, Vec3::x());
        assert_eq!(moved.tmax, 10.0);
    }

    #[test]
    fn test_cone_axis_ray_shares_bounds() {
        let cone = Cone::new(Point3::origin(), Vec3::z(), 0.1).with_bounds(0.5, 8.0);
        let ray = cone.axis_ray();
        assert_eq!(ray.direction, Vec3::z());
        assert_eq!((ray.tmin, ray.tmax), (0.5, 8.0));
        let toward = cone.ray_toward(&Point3::new(0.0, 3.0, 0.0));
        assert_relative_eq!(toward.direction, Vec3::y());
    }
}
