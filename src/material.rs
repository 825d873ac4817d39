//! Surface scattering models.

use crate::color::Color;
use crate::hittable::HitRecord;
use crate::random::random_f64;
use crate::ray::Ray;
use crate::vec3::Vec3;
use rand::Rng;

/// How a surface scatters light. Shared between spheres through `Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },
    /// Specular reflector; `fuzz` in [0, 1] roughens the reflection.
    Metal { albedo: Color, fuzz: f64 },
    /// Clear refractive medium with index of refraction `ir`.
    Dielectric { ir: f64 },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Self::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// `ir` must be positive.
    pub fn dielectric(ir: f64) -> Self {
        debug_assert!(ir > 0.0, "index of refraction must be positive");
        Self::Dielectric { ir }
    }

    /// Scatter `r_in` at `rec`, returning the outgoing ray and its
    /// attenuation, or `None` when the ray is absorbed.
    pub fn scatter<R: Rng>(
        &self,
        r_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut R,
    ) -> Option<(Ray, Color)> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
                if scatter_direction.near_zero() {
                    scatter_direction = rec.normal;
                }
                Some((Ray::new(rec.p, scatter_direction), albedo))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = Vec3::reflect(&r_in.dir.normalized(), &rec.normal);
                let scattered =
                    Ray::new(rec.p, reflected + fuzz * Vec3::random_in_unit_sphere(rng));
                if scattered.dir.dot(rec.normal) > 0.0 {
                    Some((scattered, albedo))
                } else {
                    None
                }
            }
            Material::Dielectric { ir } => {
                let refraction_ratio = if rec.front_face { 1.0 / ir } else { ir };

                let unit_direction = r_in.dir.normalized();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract
                    || reflectance(cos_theta, refraction_ratio) > random_f64(rng)
                {
                    Vec3::reflect(&unit_direction, &rec.normal)
                } else {
                    Vec3::refract(&unit_direction, &rec.normal, refraction_ratio)
                };

                Some((Ray::new(rec.p, direction), Color::new(1.0, 1.0, 1.0)))
            }
        }
    }
}

/// Schlick's approximation of Fresnel reflectance.
pub fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
    let r0 = (1.0 - refraction_ratio) / (1.0 + refraction_ratio);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
