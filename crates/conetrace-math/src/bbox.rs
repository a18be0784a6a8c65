//! Axis-aligned bounding boxes and primitive bounds.
//!
//! Boxes are built by scene code through merges and consumed read-only by
//! the slab and cone-culling tests.

use serde::{Deserialize, Serialize};

use crate::{Point3, Transform, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for merging.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Degenerate box containing a single point.
    pub fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// True if `min > max` on any axis.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Corner `i` in `0..8`; bit 0 selects max x, bit 1 max y, bit 2 max z.
    pub fn corner(&self, i: usize) -> Point3 {
        Point3::new(
            if i & 1 != 0 { self.max.x } else { self.min.x },
            if i & 2 != 0 { self.max.y } else { self.min.y },
            if i & 4 != 0 { self.max.z } else { self.min.z },
        )
    }

    /// Smallest box containing this box and `p`.
    pub fn merge_point(&self, p: &Point3) -> Self {
        Self {
            min: self.min.inf(p),
            max: self.max.sup(p),
        }
    }

    /// Smallest box containing both boxes.
    ///
    /// Merging with [`Aabb3::empty`] returns the other operand.
    pub fn merge(&self, other: &Aabb3) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Expand this AABB in place to include a point.
    pub fn expand_point(&mut self, p: &Point3) {
        *self = self.merge_point(p);
    }

    /// Expand this AABB in place to include another box.
    pub fn expand(&mut self, other: &Aabb3) {
        *self = self.merge(other);
    }

    /// Bounds of this box after an affine transform, from its eight corners.
    pub fn transform(&self, xform: &Transform) -> Self {
        (0..8).fold(Aabb3::empty(), |acc, i| {
            acc.merge_point(&xform.apply_point(&self.corner(i)))
        })
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bounds of a point.
pub fn point_bounds(p: &Point3) -> Aabb3 {
    Aabb3::from_point(*p)
}

/// Bounds of a point with radius.
pub fn point_bounds_radius(p: &Point3, r: f32) -> Aabb3 {
    let r = Vec3::repeat(r);
    let (a, b) = (p - r, p + r);
    Aabb3::new(a.inf(&b), a.sup(&b))
}

/// Bounds of a segment.
pub fn line_bounds(p0: &Point3, p1: &Point3) -> Aabb3 {
    Aabb3::new(p0.inf(p1), p0.sup(p1))
}

/// Bounds of a segment with per-endpoint radius.
pub fn line_bounds_radius(p0: &Point3, p1: &Point3, r0: f32, r1: f32) -> Aabb3 {
    let (r0, r1) = (Vec3::repeat(r0), Vec3::repeat(r1));
    Aabb3::new((p0 - r0).inf(&(p1 - r1)), (p0 + r0).sup(&(p1 + r1)))
}

/// Bounds of a triangle.
pub fn triangle_bounds(p0: &Point3, p1: &Point3, p2: &Point3) -> Aabb3 {
    Aabb3::new(p0.inf(&p1.inf(p2)), p0.sup(&p1.sup(p2)))
}

/// Bounds of a quad.
pub fn quad_bounds(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> Aabb3 {
    triangle_bounds(p0, p1, p2).merge_point(p3)
}

/// Bounds of a sphere.
pub fn sphere_bounds(p: &Point3, r: f32) -> Aabb3 {
    let r = Vec3::repeat(r);
    Aabb3::new(p - r, p + r)
}

/// Bounds of a capsule; same as [`line_bounds_radius`].
pub fn capsule_bounds(p0: &Point3, p1: &Point3, r0: f32, r1: f32) -> Aabb3 {
    line_bounds_radius(p0, p1, r0, r1)
}
