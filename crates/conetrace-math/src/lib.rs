#![warn(missing_docs)]

//! Math types for the conetrace kernel.
//!
//! Thin wrappers around nalgebra providing single-precision types for
//! ray and cone queries: points, vectors, affine transforms, bounding
//! boxes, and the small interpolation helpers used next to the solvers.

use nalgebra::{Matrix4, Rotation3, Unit, Vector2, Vector3};

pub mod bbox;
pub mod geometry;

pub use bbox::Aabb3;

/// Position in world or object space.
pub type Point3 = nalgebra::Point3<f32>;

/// Displacement or direction in 3D.
pub type Vec3 = Vector3<f32>;

/// Surface parameters, or a position on the unit disc.
pub type Point2 = nalgebra::Point2<f32>;

/// Planar extent, such as a film size.
pub type Vec2 = Vector2<f32>;

/// Affine map stored as a homogeneous 4x4 matrix, used for camera frames
/// and for moving rays and boxes between spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Homogeneous matrix; the bottom row is `(0, 0, 0, 1)`.
    pub matrix: Matrix4<f32>,
}

impl Transform {
    /// The map that leaves every point in place.
    pub fn identity() -> Self {
        Self::from_matrix(Matrix4::identity())
    }

    fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }

    /// Shift by `(dx, dy, dz)`.
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        Self::from_matrix(Matrix4::new_translation(&Vec3::new(dx, dy, dz)))
    }

    /// Per-axis scaling about the origin.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_matrix(Matrix4::new_nonuniform_scaling(&Vec3::new(sx, sy, sz)))
    }

    /// Counterclockwise turn of `angle` radians about `+z`.
    pub fn rotation_z(angle: f32) -> Self {
        Self::rotation_about_axis(&Vec3::z(), angle)
    }

    /// Turn of `angle` radians about `axis` through the origin.
    ///
    /// A zero axis yields the identity.
    pub fn rotation_about_axis(axis: &Vec3, angle: f32) -> Self {
        match Unit::try_new(*axis, f32::EPSILON) {
            Some(axis) => Self::from_matrix(Rotation3::from_axis_angle(&axis, angle).to_homogeneous()),
            None => Self::identity(),
        }
    }

    /// Rigid frame with the given unit axes and origin.
    ///
    /// Maps local `x`, `y`, `z` onto the three axes and the local origin onto
    /// `origin`.
    pub fn from_frame(x: Vec3, y: Vec3, z: Vec3, origin: Point3) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 1>(0, 0).copy_from(&x);
        matrix.fixed_view_mut::<3, 1>(0, 1).copy_from(&y);
        matrix.fixed_view_mut::<3, 1>(0, 2).copy_from(&z);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&origin.coords);
        Self::from_matrix(matrix)
    }

    /// Composition `self * other`: `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Map a position; translation applies.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        self.matrix.transform_point(p)
    }

    /// Map a displacement; translation is ignored and length is not kept.
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.matrix.transform_vector(v)
    }

    /// Map a direction and renormalize it.
    pub fn apply_direction(&self, v: &Vec3) -> Vec3 {
        self.apply_vec(v).normalize()
    }

    /// Map a surface normal through the inverse transpose of the linear part.
    ///
    /// A singular linear part leaves `n` unchanged.
    pub fn apply_normal(&self, n: &Vec3) -> Vec3 {
        self.matrix
            .fixed_view::<3, 3>(0, 0)
            .into_owned()
            .try_inverse()
            .map_or(*n, |inv| inv.transpose() * n)
    }

    /// The undoing map, or `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(t.apply_point(&p), p);
    }

    #[test]
    fn test_translation_leaves_vectors() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Point3::new(11.0, 22.0, 33.0));
        let v = t.apply_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_about_axis_matches_rotation_z() {
        let a = Transform::rotation_about_axis(&Vec3::z(), 0.7);
        let b = Transform::rotation_z(0.7);
        assert_relative_eq!(a.matrix, b.matrix, epsilon = 1e-6);
    }

    #[test]
    fn test_compose_applies_right_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let scale = Transform::scale(2.0, 2.0, 2.0);
        // (scale * translate) * p = scale(translate(p))
        let p = scale.then(&translate).apply_point(&Point3::origin());
        assert_relative_eq!(p, Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_z(0.3));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        assert_relative_eq!(t.then(&inv).apply_point(&p), p, epsilon = 1e-5);
    }

    #[test]
    fn test_normal_under_nonuniform_scale() {
        let t = Transform::scale(2.0, 1.0, 1.0);
        let n = t.apply_normal(&Vec3::new(1.0, 1.0, 0.0));
        // Inverse transpose halves the x component
        assert_relative_eq!(n, Vec3::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn test_from_frame() {
        let t = Transform::from_frame(
            Vec3::y(),
            -Vec3::x(),
            Vec3::z(),
            Point3::new(0.0, 0.0, 5.0),
        );
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 5.0));
    }
}
