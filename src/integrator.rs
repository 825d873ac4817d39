//! Recursive radiance estimate along a bounce path.

use crate::color::Color;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::prelude::INFINITY;
use crate::ray::Ray;
use rand::Rng;

/// Smallest accepted hit distance; keeps bounced rays off their own surface.
pub const T_MIN: f64 = 0.001;

/// What a primary ray measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Full material scattering.
    #[default]
    Path,
    /// Surface normal mapped to RGB; no bounces.
    Normals,
}

/// Sky gradient: white at the horizon blending to blue overhead.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.dir.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

pub fn ray_color<W, R>(r: &Ray, depth: u32, world: &W, rng: &mut R) -> Color
where
    W: Hittable + ?Sized,
    R: Rng,
{
    if depth == 0 {
        return Color::zero();
    }

    if let Some(rec) = world.hit(r, Interval::new(T_MIN, INFINITY)) {
        if let Some((scattered, attenuation)) = rec.mat.scatter(r, &rec, rng) {
            return attenuation * ray_color(&scattered, depth - 1, world, rng);
        }
        return Color::zero();
    }

    background(r)
}

/// `0.5 * (n + 1)` of the front-facing normal, or the background on a miss.
pub fn normal_color<W: Hittable + ?Sized>(r: &Ray, world: &W) -> Color {
    match world.hit(r, Interval::new(T_MIN, INFINITY)) {
        Some(rec) => 0.5 * (rec.normal + Color::new(1.0, 1.0, 1.0)),
        None => background(r),
    }
}

impl Shading {
    pub fn trace<W, R>(self, r: &Ray, max_depth: u32, world: &W, rng: &mut R) -> Color
    where
        W: Hittable + ?Sized,
        R: Rng,
    {
        match self {
            Shading::Path => ray_color(r, max_depth, world, rng),
            Shading::Normals => normal_color(r, world),
        }
    }
}
