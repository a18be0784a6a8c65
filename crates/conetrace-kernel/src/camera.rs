//! Pinhole camera rays.
//!
//! The camera sits at the origin of `frame` looking down its local `-z`,
//! with the film plane at distance `lens`. Image coordinates run from the
//! top-left `(0, 0)` to the bottom-right `(1, 1)`.

use conetrace_math::{Point2, Point3, Transform, Vec2, Vec3};

use crate::Ray;

/// Ray through `image_uv` for a film of size `film` (width, height).
pub fn camera_ray(frame: &Transform, lens: f32, film: &Vec2, image_uv: &Point2) -> Ray {
    let direction = Vec3::new(
        film.x * (image_uv.x - 0.5),
        film.y * (0.5 - image_uv.y),
        -lens,
    )
    .normalize();
    Ray::new(
        frame.apply_point(&Point3::origin()),
        frame.apply_direction(&direction),
    )
}

/// Ray through `image_uv` for a film whose larger side is `film` and whose
/// width-to-height ratio is `aspect`.
pub fn camera_ray_aspect(
    frame: &Transform,
    lens: f32,
    aspect: f32,
    film: f32,
    image_uv: &Point2,
) -> Ray {
    let film = if aspect >= 1.0 {
        Vec2::new(film, film / aspect)
    } else {
        Vec2::new(film * aspect, film)
    };
    camera_ray(frame, lens, &film, image_uv)
}
