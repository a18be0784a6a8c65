//! Box silhouettes as seen from an exterior point.
//!
//! The viewpoint is classified per axis into one of three slabs relative to
//! the box: `0` below `min`, `1` between `min` and `max`, `2` above `max`.
//! The region index is `dx + 3 * dy + 9 * dz`.
//!
//! Corners are numbered by their bits: bit 0 selects `max.x`, bit 1 `max.y`
//! and bit 2 `max.z`. Consecutive entries of every silhouette (including the
//! wrap-around pair) differ in exactly one bit, so each step walks one box
//! edge.

use conetrace_math::Vec3;

/// Region index of a viewpoint inside the box.
pub const INSIDE: usize = 13;

/// Silhouette polygon for each of the 27 viewpoint regions.
///
/// Regions where the viewpoint is outside on one axis see a single face (4
/// corners). Outside on two axes they see two faces meeting at an edge,
/// outside on three axes three faces meeting at the nearest corner; both
/// outline 6 corners.
pub static SILHOUETTES: [&[u8]; 27] = [
    // z below
    &[1, 5, 4, 6, 2, 3], //  0: x below,  y below
    &[0, 2, 3, 1, 5, 4], //  1: x inside, y below
    &[0, 2, 3, 7, 5, 4], //  2: x above,  y below
    &[0, 4, 6, 2, 3, 1], //  3: x below,  y inside
    &[0, 2, 3, 1],       //  4: x inside, y inside (bottom face)
    &[0, 2, 3, 7, 5, 1], //  5: x above,  y inside
    &[0, 4, 6, 7, 3, 1], //  6: x below,  y above
    &[0, 2, 6, 7, 3, 1], //  7: x inside, y above
    &[0, 2, 6, 7, 5, 1], //  8: x above,  y above
    // z inside
    &[0, 1, 5, 4, 6, 2], //  9: x below,  y below
    &[0, 1, 5, 4],       // 10: x inside, y below (front face)
    &[0, 1, 3, 7, 5, 4], // 11: x above,  y below
    &[0, 4, 6, 2],       // 12: x below,  y inside (left face)
    &[],                 // 13: inside the box
    &[1, 3, 7, 5],       // 14: x above,  y inside (right face)
    &[0, 4, 6, 7, 3, 2], // 15: x below,  y above
    &[2, 6, 7, 3],       // 16: x inside, y above (back face)
    &[1, 3, 2, 6, 7, 5], // 17: x above,  y above
    // z above
    &[0, 1, 5, 7, 6, 2], // 18: x below,  y below
    &[0, 1, 5, 7, 6, 4], // 19: x inside, y below
    &[0, 1, 3, 7, 6, 4], // 20: x above,  y below
    &[0, 4, 5, 7, 6, 2], // 21: x below,  y inside
    &[4, 5, 7, 6],       // 22: x inside, y inside (top face)
    &[1, 3, 7, 6, 4, 5], // 23: x above,  y inside
    &[0, 4, 5, 7, 3, 2], // 24: x below,  y above
    &[2, 6, 4, 5, 7, 3], // 25: x inside, y above
    &[1, 3, 2, 6, 4, 5], // 26: x above,  y above
];

/// Region index of the viewpoint, given the vector from the viewpoint to the
/// box center and the box half-extents.
pub fn classify(to_center: &Vec3, extent: &Vec3) -> usize {
    let digit = |axis: usize| {
        if to_center[axis] < -extent[axis] {
            2
        } else if to_center[axis] > extent[axis] {
            0
        } else {
            1
        }
    };
    digit(0) + 3 * digit(1) + 9 * digit(2)
}

/// Offset of corner `index` from the box center.
pub fn corner_offset(index: u8, extent: &Vec3) -> Vec3 {
    Vec3::new(
        if index & 1 != 0 { extent.x } else { -extent.x },
        if index & 2 != 0 { extent.y } else { -extent.y },
        if index & 4 != 0 { extent.z } else { -extent.z },
    )
}
