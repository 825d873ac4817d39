//! Analytic sphere primitive.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Point3;
use std::sync::Arc;

/// Smallest root of |R(t) - C|^2 = r^2 strictly inside `ray_t`, if any.
///
/// Uses the half-b form of the quadratic: the near root is tried first and
/// the far root only when the near one is out of range.
pub fn hit_sphere(center: Point3, radius: f64, r: &Ray, ray_t: Interval) -> Option<f64> {
    let oc = r.orig - center;
    let a = r.dir.length_squared();
    let half_b = oc.dot(r.dir);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    let mut root = (-half_b - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (-half_b + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }
    Some(root)
}

#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
    pub mat: Arc<Material>,
}

impl Sphere {
    /// `radius` must be positive.
    pub fn new(center: Point3, radius: f64, mat: Arc<Material>) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            mat,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = hit_sphere(self.center, self.radius, r, ray_t)?;
        let outward_normal = (r.at(t) - self.center) / self.radius;
        Some(HitRecord::new(r, t, outward_normal, &self.mat))
    }
}
