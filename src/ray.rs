use crate::vec3::{Point3, Vec3};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            orig: origin,
            dir: direction,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.orig
    }

    pub fn direction(&self) -> Vec3 {
        self.dir
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_unnormalized_direction() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(0.0), ray.origin());
        assert_eq!(ray.at(1.5), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3::new(1.0, 2.0, 5.0));
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -2.0));
    }
}
