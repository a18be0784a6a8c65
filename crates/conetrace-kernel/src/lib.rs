#![warn(missing_docs)]

//! Ray and cone intersection kernel for path tracing.
//!
//! This crate answers whether a query primitive (a ray, or a cone standing
//! for a bundle of rays with angular spread) touches a shape, and where.
//! It underlies visibility, shadow and antialiasing queries and BVH
//! traversal culling. All queries are pure functions over borrowed inputs.
//!
//! # Architecture
//!
//! - [`Ray`], [`Cone`] - Query primitives with a `[tmin, tmax]` interval
//! - [`intersect`] - Closed-form ray solvers for points, thick segments,
//!   cylinders, triangles, quads, spheres and boxes
//! - [`overlap`] - Proximity tests between a position and a primitive
//! - [`cone`] - Sampled cone-vs-primitive tests and exact cone-vs-box culling
//! - [`camera`] - Pinhole camera rays
//! - [`Kernel`] - Validated [`KernelConfig`] plus the precomputed cone sampler
//!
//! # Example
//!
//! ```
//! use conetrace_kernel::{Cone, Kernel, Ray};
//! use conetrace_kernel::intersect::intersect_sphere;
//! use conetrace_math::{Aabb3, Point3, Vec3};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::z());
//! let hit = intersect_sphere(&ray, &Point3::origin(), 1.0).unwrap();
//! assert!((hit.distance - 4.0).abs() < 1e-5);
//!
//! let kernel = Kernel::default();
//! let bbox = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
//! let cone = Cone::new(Point3::new(0.0, 0.0, -5.0), Vec3::z(), 0.05);
//! assert!(kernel.cone_intersect_bbox(&cone, &bbox));
//!
//! let cone_hit = kernel.sampler().intersect_sphere(&cone, &Point3::origin(), 1.0).unwrap();
//! assert_eq!(cone_hit.coverage, 1.0);
//! ```

mod ray;
pub mod camera;
pub mod cone;
pub mod config;
pub mod error;
pub mod intersect;
mod kernel;
pub mod overlap;

pub use cone::{cone_intersect_bbox, ConeSampler};
pub use config::KernelConfig;
pub use error::{ConfigError, Result};
pub use kernel::Kernel;
pub use ray::{Cone, ConeHit, CylinderHit, CylinderPart, PrimitiveHit, Ray, RAY_EPS};
