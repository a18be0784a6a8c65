//! Primitive geometry helpers: evaluation, interpolation, tangent frames.
//!
//! Parameterizations match the solvers in the kernel: lines by `u` from
//! `p0` to `p1`, triangles by `(u, v)` along `p1 - p0` and `p2 - p0`, quads
//! split on the `p1`–`p3` diagonal, spheres by longitude/latitude in `[0, 1]`.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

use crate::{Point2, Point3, Vec3};

/// Point on a segment at parameter `u`.
pub fn line_point(p0: &Point3, p1: &Point3, u: f32) -> Point3 {
    p0 + (p1 - p0) * u
}

/// Unit tangent of a segment.
pub fn line_tangent(p0: &Point3, p1: &Point3) -> Vec3 {
    (p1 - p0).normalize()
}

/// Length of a segment.
pub fn line_length(p0: &Point3, p1: &Point3) -> f32 {
    (p1 - p0).norm()
}

/// Interpolated tangent along a segment with per-endpoint tangents.
pub fn line_tangent_at(t0: &Vec3, t1: &Vec3, u: f32) -> Vec3 {
    (t0 * (1.0 - u) + t1 * u).normalize()
}

/// Point on a triangle at barycentric `uv`.
pub fn triangle_point(p0: &Point3, p1: &Point3, p2: &Point3, uv: &Point2) -> Point3 {
    p0 + (p1 - p0) * uv.x + (p2 - p0) * uv.y
}

/// Geometric normal of a triangle.
pub fn triangle_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Vec3 {
    (p1 - p0).cross(&(p2 - p0)).normalize()
}

/// Interpolated normal over a triangle.
pub fn triangle_normal_at(n0: &Vec3, n1: &Vec3, n2: &Vec3, uv: &Point2) -> Vec3 {
    interpolate_triangle(*n0, *n1, *n2, uv).normalize()
}

/// Area of a triangle.
pub fn triangle_area(p0: &Point3, p1: &Point3, p2: &Point3) -> f32 {
    (p1 - p0).cross(&(p2 - p0)).norm() / 2.0
}

/// Point on a quad; `uv` above the diagonal maps to the `(p2, p3, p1)` half.
pub fn quad_point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, uv: &Point2) -> Point3 {
    if uv.x + uv.y <= 1.0 {
        triangle_point(p0, p1, p3, uv)
    } else {
        triangle_point(p2, p3, p1, &flip_uv(uv))
    }
}

/// Geometric normal of a quad, averaged over its two triangles.
pub fn quad_normal(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> Vec3 {
    (triangle_normal(p0, p1, p3) + triangle_normal(p2, p3, p1)).normalize()
}

/// Interpolated normal over a quad.
pub fn quad_normal_at(n0: &Vec3, n1: &Vec3, n2: &Vec3, n3: &Vec3, uv: &Point2) -> Vec3 {
    if uv.x + uv.y <= 1.0 {
        triangle_normal_at(n0, n1, n3, uv)
    } else {
        triangle_normal_at(n2, n3, n1, &flip_uv(uv))
    }
}

/// Area of a quad.
pub fn quad_area(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> f32 {
    triangle_area(p0, p1, p3) + triangle_area(p2, p3, p1)
}

/// Point on a sphere at longitude `uv.x` and colatitude `uv.y`, both in `[0, 1]`.
pub fn sphere_point(p: &Point3, r: f32, uv: &Point2) -> Point3 {
    p + sphere_normal(uv) * r
}

/// Outward normal on a sphere at `uv`.
pub fn sphere_normal(uv: &Point2) -> Vec3 {
    let (sin_u, cos_u) = (uv.x * 2.0 * PI).sin_cos();
    let (sin_v, cos_v) = (uv.y * PI).sin_cos();
    Vec3::new(cos_u * sin_v, sin_u * sin_v, cos_v)
}

/// `1 - uv`, the parameter reflection used by the second quad triangle.
pub fn flip_uv(uv: &Point2) -> Point2 {
    Point2::new(1.0 - uv.x, 1.0 - uv.y)
}

/// Linear interpolation from `p0` to `p1` by `u`.
pub fn interpolate_line<T>(p0: T, p1: T, u: f32) -> T
where
    T: Add<Output = T> + Mul<f32, Output = T>,
{
    p0 * (1.0 - u) + p1 * u
}

/// Barycentric interpolation over a triangle.
pub fn interpolate_triangle<T>(p0: T, p1: T, p2: T, uv: &Point2) -> T
where
    T: Add<Output = T> + Mul<f32, Output = T>,
{
    p0 * (1.0 - uv.x - uv.y) + p1 * uv.x + p2 * uv.y
}

/// Interpolation over a quad split on the `p1`–`p3` diagonal.
pub fn interpolate_quad<T>(p0: T, p1: T, p2: T, p3: T, uv: &Point2) -> T
where
    T: Add<Output = T> + Mul<f32, Output = T>,
{
    if uv.x + uv.y <= 1.0 {
        interpolate_triangle(p0, p1, p3, uv)
    } else {
        interpolate_triangle(p2, p3, p1, &flip_uv(uv))
    }
}

/// Cubic Bezier evaluation.
pub fn interpolate_bezier<T>(p0: T, p1: T, p2: T, p3: T, u: f32) -> T
where
    T: Add<Output = T> + Mul<f32, Output = T>,
{
    let w = 1.0 - u;
    p0 * (w * w * w) + p1 * (3.0 * u * w * w) + p2 * (3.0 * u * u * w) + p3 * (u * u * u)
}

/// Derivative of a cubic Bezier segment.
pub fn interpolate_bezier_derivative<T>(p0: T, p1: T, p2: T, p3: T, u: f32) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> + Copy,
{
    let w = 1.0 - u;
    (p1 - p0) * (3.0 * w * w) + (p2 - p1) * (6.0 * u * w) + (p3 - p2) * (3.0 * u * u)
}

/// Tangent and bitangent of a triangle from its texture coordinates.
///
/// Falls back to the world x/y axes when the uv mapping is degenerate.
pub fn triangle_tangents_fromuv(
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    uv0: &Point2,
    uv1: &Point2,
    uv2: &Point2,
) -> (Vec3, Vec3) {
    let p = p1 - p0;
    let q = p2 - p0;
    let s = (uv1.x - uv0.x, uv2.x - uv0.x);
    let t = (uv1.y - uv0.y, uv2.y - uv0.y);
    let div = s.0 * t.1 - s.1 * t.0;
    if div != 0.0 {
        let tu = (p * t.1 - q * t.0) / div;
        let tv = (q * s.0 - p * s.1) / div;
        (tu, tv)
    } else {
        (Vec3::x(), Vec3::y())
    }
}

/// Tangent and bitangent of a quad at `current_uv`, picking the triangle it lies in.
#[allow(clippy::too_many_arguments)]
pub fn quad_tangents_fromuv(
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
    uv0: &Point2,
    uv1: &Point2,
    uv2: &Point2,
    uv3: &Point2,
    current_uv: &Point2,
) -> (Vec3, Vec3) {
    if current_uv.x + current_uv.y <= 1.0 {
        triangle_tangents_fromuv(p0, p1, p3, uv0, uv1, uv3)
    } else {
        triangle_tangents_fromuv(p2, p3, p1, uv2, uv3, uv1)
    }
}

/// Two unit vectors completing `axis` (assumed unit length) to a right-handed
/// orthonormal frame.
///
/// The helper axis is the world axis with the smallest component in `axis`,
/// so it is never parallel to it.
pub fn orthonormal_basis(axis: &Vec3) -> (Vec3, Vec3) {
    let a = axis.abs();
    let helper = if a.x <= a.y && a.x <= a.z {
        Vec3::x()
    } else if a.y <= a.z {
        Vec3::y()
    } else {
        Vec3::z()
    };
    let x = helper.cross(axis).normalize();
    let y = axis.cross(&x);
    (x, y)
}
