//! Approximate cone-vs-primitive tests by ray sampling.
//!
//! The cone's cross-section at the primitive's depth is covered with a
//! sunflower spiral of sample points. One ray is cast from the apex through
//! each point, and the cone hits when the fraction of rays that hit exceeds
//! the coverage threshold.

use std::f32::consts::PI;

use conetrace_math::geometry::orthonormal_basis;
use conetrace_math::{Point2, Point3};
use log::trace;

use crate::config::KernelConfig;
use crate::intersect;
use crate::{Cone, ConeHit, PrimitiveHit, Ray};

/// Precomputed disc samples and the hit decision rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeSampler {
    /// Sample positions on the unit disc.
    offsets: Vec<Point2>,
    coverage_threshold: f32,
}

impl ConeSampler {
    /// Build a sampler with `samples` spiral points.
    ///
    /// Point `i` in `1..=samples` sits at radius `sqrt((i - 0.5) / (samples - 0.5))`
    /// and angle `2π i / golden_ratio²`.
    pub fn new(samples: usize, golden_ratio: f32, coverage_threshold: f32) -> Self {
        let phi2 = golden_ratio * golden_ratio;
        let n = samples as f32;
        let offsets = (1..=samples)
            .map(|i| {
                let i = i as f32;
                let radius = ((i - 0.5) / (n - 0.5)).sqrt();
                let theta = 2.0 * PI * i / phi2;
                Point2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self {
            offsets,
            coverage_threshold,
        }
    }

    /// Build a sampler from the sampling fields of a configuration.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(
            config.cone_samples,
            config.golden_ratio,
            config.coverage_threshold,
        )
    }

    /// Number of sample rays per query.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the sampler has no samples.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Sample positions on the unit disc, in casting order.
    pub fn offsets(&self) -> &[Point2] {
        &self.offsets
    }

    /// Fraction of hits a query must exceed to count as a hit.
    pub fn coverage_threshold(&self) -> f32 {
        self.coverage_threshold
    }

    /// The sample rays of `cone` for a primitive anchored at `anchor`.
    ///
    /// The disc is centered on the axis at the anchor's distance from the
    /// apex, with radius `depth * tan(spread)`. Rays are unit length and
    /// carry the cone's bounds.
    pub fn sample_rays<'a>(&'a self, cone: &Cone, anchor: &Point3) -> impl Iterator<Item = Ray> + 'a {
        let depth = (anchor - cone.origin).norm();
        let depth = if depth > 0.0 && depth.is_finite() { depth } else { 1.0 };
        let center = cone.origin + cone.direction * depth;
        let radius = depth * cone.spread.tan();
        let (x_axis, y_axis) = orthonormal_basis(&cone.direction);
        let cone = *cone;

        self.offsets.iter().map(move |offset| {
            let target = center + (x_axis * offset.x + y_axis * offset.y) * radius;
            cone.ray_toward(&target)
        })
    }

    /// Cast every sample ray through `test` and aggregate the hits.
    ///
    /// Returns `None` when nothing is hit or the hit fraction does not
    /// exceed the coverage threshold.
    pub fn sample<F>(&self, cone: &Cone, anchor: &Point3, mut test: F) -> Option<ConeHit>
    where
        F: FnMut(&Ray) -> Option<PrimitiveHit>,
    {
        let mut uvs = Vec::new();
        let mut distance = f32::MAX;
        for ray in self.sample_rays(cone, anchor) {
            if let Some(hit) = test(&ray) {
                uvs.push(hit.uv);
                distance = distance.min(hit.distance);
            }
        }

        if uvs.is_empty() {
            return None;
        }

        let coverage = uvs.len() as f32 / self.len() as f32;
        if coverage <= self.coverage_threshold {
            trace!(
                "cone coverage {:.3} at or below threshold {:.3} ({} of {} samples)",
                coverage,
                self.coverage_threshold,
                uvs.len(),
                self.len()
            );
            return None;
        }

        Some(ConeHit {
            uvs,
            distance,
            coverage,
        })
    }

    /// Intersect a cone with a point of radius `r`.
    pub fn intersect_point(&self, cone: &Cone, p: &Point3, r: f32) -> Option<ConeHit> {
        self.sample(cone, p, |ray| intersect::intersect_point(ray, p, r))
    }

    /// Intersect a cone with a thick segment.
    pub fn intersect_line(
        &self,
        cone: &Cone,
        p0: &Point3,
        p1: &Point3,
        r0: f32,
        r1: f32,
    ) -> Option<ConeHit> {
        let anchor = centroid(&[p0, p1]);
        self.sample(cone, &anchor, |ray| intersect::intersect_line(ray, p0, p1, r0, r1))
    }

    /// Intersect a cone with a capped cylinder.
    pub fn intersect_cylinder(
        &self,
        cone: &Cone,
        p0: &Point3,
        p1: &Point3,
        r0: f32,
        r1: f32,
    ) -> Option<ConeHit> {
        let anchor = centroid(&[p0, p1]);
        self.sample(cone, &anchor, |ray| {
            intersect::intersect_cylinder(ray, p0, p1, r0, r1).map(|hit| hit.hit)
        })
    }

    /// Intersect a cone with a triangle.
    pub fn intersect_triangle(
        &self,
        cone: &Cone,
        p0: &Point3,
        p1: &Point3,
        p2: &Point3,
    ) -> Option<ConeHit> {
        let anchor = centroid(&[p0, p1, p2]);
        self.sample(cone, &anchor, |ray| intersect::intersect_triangle(ray, p0, p1, p2))
    }

    /// Intersect a cone with a quad.
    pub fn intersect_quad(
        &self,
        cone: &Cone,
        p0: &Point3,
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
    ) -> Option<ConeHit> {
        let anchor = if p2 == p3 {
            centroid(&[p0, p1, p3])
        } else {
            centroid(&[p0, p1, p2, p3])
        };
        self.sample(cone, &anchor, |ray| intersect::intersect_quad(ray, p0, p1, p2, p3))
    }

    /// Intersect a cone with a sphere.
    pub fn intersect_sphere(&self, cone: &Cone, p: &Point3, r: f32) -> Option<ConeHit> {
        self.sample(cone, p, |ray| intersect::intersect_sphere(ray, p, r))
    }
}

fn centroid(points: &[&Point3]) -> Point3 {
    let sum = points.iter().fold(Point3::origin().coords, |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f32)
}
