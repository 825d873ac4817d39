use crate::random::{random_f64, random_f64_range};
use rand::Rng;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// True when every component is within 1e-8 of zero.
    pub fn near_zero(&self) -> bool {
        let s = 1e-8;
        self.x.abs() < s && self.y.abs() < s && self.z.abs() < s
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction. The vector must have non-zero
    /// length; this is not checked.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: random_f64(rng),
            y: random_f64(rng),
            z: random_f64(rng),
        }
    }

    pub fn random_interval<R: Rng>(rng: &mut R, min: f64, max: f64) -> Self {
        Self {
            x: random_f64_range(rng, min, max),
            y: random_f64_range(rng, min, max),
            z: random_f64_range(rng, min, max),
        }
    }

    /// Uniform point inside the unit ball, by rejection from the [-1, 1] cube.
    pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_interval(rng, -1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    pub fn random_unit_vector<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_in_unit_sphere(rng);
            // Points this close to the origin lose precision when normalized.
            if p.length_squared() > 1e-160 {
                return p.normalized();
            }
        }
    }

    pub fn random_on_hemisphere<R: Rng>(rng: &mut R, normal: &Self) -> Self {
        let on_unit_sphere = Self::random_unit_vector(rng);
        if on_unit_sphere.dot(*normal) > 0.0 {
            on_unit_sphere
        } else {
            -on_unit_sphere
        }
    }

    pub fn random_in_unit_disk<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Vec3::new(
                random_f64_range(rng, -1.0, 1.0),
                random_f64_range(rng, -1.0, 1.0),
                0.0,
            );
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Mirror `v` about the plane with normal `n`.
    pub fn reflect(v: &Self, n: &Self) -> Self {
        *v - 2.0 * v.dot(*n) * *n
    }

    /// Bend the unit vector `uv` through a surface with normal `n` (pointing
    /// against `uv`). Caller must rule out total internal reflection first.
    pub fn refract(uv: &Self, n: &Self, etai_over_etat: f64) -> Self {
        let cos_theta = (-*uv).dot(*n).min(1.0);
        let r_out_perp = etai_over_etat * (*uv + cos_theta * *n);
        let r_out_parallel = -((1.0 - r_out_perp.length_squared()).max(0.0).sqrt()) * *n;
        r_out_perp + r_out_parallel
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Self::Output {
        vec * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

pub type Point3 = Vec3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::make_rng;

    const EPS: f64 = 1e-12;

    #[test]
    fn dot_and_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert!((v.length() - 13.0).abs() < EPS);
        assert!((v.normalized().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn near_zero_threshold() {
        assert!(Vec3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vec3::new(1e-9, 1e-7, 0.0).near_zero());
    }

    #[test]
    fn reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(Vec3::reflect(&v, &n), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_with_unit_ratio_passes_straight_through() {
        let uv = Vec3::new(1.0, -1.0, 0.0).normalized();
        let n = Vec3::new(0.0, 1.0, 0.0);
        let out = Vec3::refract(&uv, &n, 1.0);
        assert!((out - uv).length() < 1e-9);
    }

    #[test]
    fn refract_obeys_snell() {
        let uv = Vec3::new(0.6, -0.8, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let ratio = 1.0 / 1.5;
        let out = Vec3::refract(&uv, &n, ratio);
        let sin_in = uv.x;
        let sin_out = out.x / out.length();
        assert!((sin_out - ratio * sin_in).abs() < 1e-9);
        assert!(out.y < 0.0);
    }

    #[test]
    fn refract_past_critical_angle_drops_parallel_part() {
        // ratio * sin_theta = 1.5 * 0.8 > 1: no real parallel component exists.
        let uv = Vec3::new(0.8, -0.6, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let out = Vec3::refract(&uv, &n, 1.5);
        assert!((out.x - 1.2).abs() < 1e-12);
        assert_eq!(out.y, 0.0);
        assert!(!out.x.is_nan() && !out.y.is_nan());
    }

    #[test]
    fn random_samples_stay_in_their_domains() {
        let mut rng = make_rng(Some(42));
        let normal = Vec3::new(0.0, 0.0, 1.0);
        for _ in 0..500 {
            assert!(Vec3::random_in_unit_sphere(&mut rng).length_squared() < 1.0);

            let disk = Vec3::random_in_unit_disk(&mut rng);
            assert!(disk.length_squared() < 1.0);
            assert_eq!(disk.z, 0.0);

            let unit = Vec3::random_unit_vector(&mut rng);
            assert!((unit.length() - 1.0).abs() < 1e-9);

            assert!(Vec3::random_on_hemisphere(&mut rng, &normal).dot(normal) >= 0.0);
        }
    }
}
