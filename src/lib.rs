//! Single-threaded path tracer over analytic spheres, seen through a fixed
//! pinhole camera and written out as plain PPM.

pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod integrator;
pub mod interval;
pub mod logger;
pub mod material;
pub mod prelude;
pub mod random;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vec3;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::scene::SceneKind;
use std::io::Write;

/// Validate `config`, build `scene` and write the rendered image to `out`.
///
/// The scene and every sample draw from one generator, so a seeded config
/// always produces the same bytes.
pub fn render_scene<O: Write>(
    config: &RenderConfig,
    scene: SceneKind,
    out: &mut O,
) -> Result<(), RenderError> {
    config.validate()?;

    let mut rng = random::make_rng(config.seed);
    let world = scene::build(scene, &mut rng);
    let cam = Camera::from_config(config);

    cam.render(&world, out, &mut rng)?;
    Ok(())
}
