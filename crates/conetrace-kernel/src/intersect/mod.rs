//! Ray-primitive intersection algorithms.
//!
//! Each primitive has a closed-form intersector returning `Some(hit)` only
//! when the hit parameter lies inside the ray's `[tmin, tmax]` interval.

mod bbox;
mod cylinder;
mod line;
mod point;
mod sphere;
mod triangle;

pub use bbox::{intersect_bbox, intersect_bbox_inv, slab_test, DEFAULT_SLAB_SLACK};
pub use cylinder::{intersect_cylinder, intersect_infinite_cylinder};
pub use line::intersect_line;
pub use point::intersect_point;
pub use sphere::intersect_sphere;
pub use triangle::{intersect_quad, intersect_triangle};
