//! Built-in scenes. Each one is assembled once and then only read.

use crate::color::Color;
use crate::hittable_list::HittableList;
use crate::material::Material;
use crate::random::{random_f64, random_f64_range};
use crate::sphere::Sphere;
use crate::vec3::Point3;
use log::info;
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// One diffuse sphere straight ahead.
    Single,
    /// Diffuse, glass and metal side by side.
    #[default]
    Materials,
    /// Three feature spheres over a random field of small ones.
    Field,
}

pub fn build<R: Rng>(kind: SceneKind, rng: &mut R) -> HittableList {
    let world = match kind {
        SceneKind::Single => single(),
        SceneKind::Materials => materials(),
        SceneKind::Field => field(rng),
    };
    info!("Scene {:?}: {} spheres", kind, world.len());
    world
}

fn ground(world: &mut HittableList, albedo: Color, top: f64) {
    let radius = 100.0;
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, top - radius, -1.0),
        radius,
        Arc::new(Material::lambertian(albedo)),
    )));
}

fn single() -> HittableList {
    let mut world = HittableList::new();
    ground(&mut world, Color::new(0.5, 0.5, 0.5), -0.5);
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5))),
    )));
    world
}

fn materials() -> HittableList {
    let material_center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let material_glass = Arc::new(Material::dielectric(1.5));
    let material_gold = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

    let mut world = HittableList::new();
    ground(&mut world, Color::new(0.8, 0.8, 0.0), -0.5);
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material_center)));
    world.add(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        material_glass.clone(),
    )));
    // Small bead sharing the glass.
    world.add(Arc::new(Sphere::new(Point3::new(-0.35, -0.38, -0.6), 0.12, material_glass)));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_gold)));
    world
}

fn field<R: Rng>(rng: &mut R) -> HittableList {
    let mut world = HittableList::new();
    ground(&mut world, Color::new(0.5, 0.5, 0.5), -1.0);

    let features = [
        (Point3::new(-2.2, 0.0, -4.0), Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0))),
        (Point3::new(0.0, 0.0, -4.0), Arc::new(Material::dielectric(1.5))),
        (Point3::new(2.2, 0.0, -4.0), Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1)))),
    ];

    let small_radius = 0.2;
    let material_bubbles = Arc::new(Material::dielectric(1.3));
    for a in -5..5 {
        for b in -9..-1 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                -1.0 + small_radius,
                b as f64 + 0.9 * random_f64(rng),
            );

            let clear = features
                .iter()
                .all(|(c, _)| (center - *c).length() > 1.0 + small_radius);
            if !clear {
                continue;
            }

            let sphere_material = if choose_mat < 0.6 {
                let albedo = Color::random(rng) * Color::random(rng);
                Arc::new(Material::lambertian(albedo))
            } else if choose_mat < 0.85 {
                let albedo = Color::random_interval(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                material_bubbles.clone()
            };
            world.add(Arc::new(Sphere::new(center, small_radius, sphere_material)));
        }
    }

    for (center, mat) in features {
        world.add(Arc::new(Sphere::new(center, 1.0, mat)));
    }
    world
}
