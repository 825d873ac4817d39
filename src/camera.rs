//! Fixed pinhole camera and the pixel scan that drives the integrator.

use crate::color::{Color, write_color};
use crate::config::RenderConfig;
use crate::hittable::Hittable;
use crate::integrator::Shading;
use crate::prelude::degrees_to_radians;
use crate::random::random_f64;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};
use log::{debug, info};
use rand::Rng;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct Camera {
    pub aspect_ratio: f64,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub shading: Shading,

    pixel_sample_scale: f64,
    image_height: u32,
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Camera at the origin looking down -z. `vfov` is the vertical field of
    /// view in degrees.
    pub fn new(
        aspect_ratio: f64,
        image_width: u32,
        samples_per_pixel: u32,
        max_depth: u32,
        vfov: f64,
        focal_length: f64,
    ) -> Self {
        let image_height = (image_width as f64 / aspect_ratio).round().max(1.0) as u32;

        let h = (degrees_to_radians(vfov) / 2.0).tan();
        let viewport_height = 2.0 * h * focal_length;
        let viewport_width = aspect_ratio * viewport_height;

        let origin = Point3::zero();
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            aspect_ratio,
            image_width,
            samples_per_pixel,
            max_depth,
            shading: Shading::default(),
            pixel_sample_scale: 1.0 / samples_per_pixel.max(1) as f64,
            image_height,
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        let mut cam = Self::new(
            config.aspect_ratio,
            config.image_width,
            config.samples_per_pixel,
            config.max_depth,
            config.vfov,
            config.focal_length,
        );
        cam.shading = config.shading;
        cam
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Primary ray through viewport coordinates `u` (left to right) and `v`
    /// (bottom to top), both in [0, 1].
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    /// Average color of pixel (`i`, `j`), with `j` counted from the bottom row.
    pub fn pixel_color<W, R>(&self, i: u32, j: u32, world: &W, rng: &mut R) -> Color
    where
        W: Hittable + ?Sized,
        R: Rng,
    {
        let u_span = self.image_width.saturating_sub(1).max(1) as f64;
        let v_span = self.image_height.saturating_sub(1).max(1) as f64;

        let mut pixel_color = Color::zero();
        for _sample in 0..self.samples_per_pixel {
            let (du, dv) = self.sample_offset(rng);
            let r = self.get_ray((i as f64 + du) / u_span, (j as f64 + dv) / v_span);
            pixel_color += self.shading.trace(&r, self.max_depth, world, rng);
        }
        pixel_color * self.pixel_sample_scale
    }

    /// Write the whole image as plain PPM, top row first.
    pub fn render<W, O, R>(&self, world: &W, out: &mut O, rng: &mut R) -> io::Result<()>
    where
        W: Hittable + ?Sized,
        O: Write,
        R: Rng,
    {
        info!(
            "Rendering {}x{} at {} samples/pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );

        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.image_width, self.image_height)?;
        writeln!(out, "255")?;

        for j in (0..self.image_height).rev() {
            if j % 20 == 0 || j == self.image_height - 1 {
                debug!("Scanlines remaining: {}", j);
            }
            for i in 0..self.image_width {
                write_color(out, self.pixel_color(i, j, world, rng))?;
            }
        }

        out.flush()?;
        info!("Done.");
        Ok(())
    }

    fn sample_offset<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        if self.samples_per_pixel == 1 {
            return (0.0, 0.0);
        }
        (random_f64(rng), random_f64(rng))
    }
}
