use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Nearest intersection of a ray with a surface.
///
/// `normal` always points against the incoming ray; `front_face` records
/// whether that is the outward side.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub mat: &'a Material,
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal (unit length).
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: &'a Material) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            t,
            mat,
            front_face: true,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.dir.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

pub trait Hittable: Send + Sync {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
