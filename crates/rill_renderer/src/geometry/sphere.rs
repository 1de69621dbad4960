//! Sphere primitive.

use super::{nearest_root, Geometry, SurfaceFunction};
use crate::Hit;
use rill_math::{Aabb, DVec3, Ray};

#[derive(Debug, Clone)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. A non-positive radius is clamped to a tiny one.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(f64::EPSILON),
        }
    }
}

impl Geometry for Sphere {
    fn intersection(&self, ray: &Ray, _part: Option<usize>) -> Hit {
        // |w + t d|² = r², w = o - c
        let w = ray.endpoint - self.center;
        let d = ray.direction;

        match nearest_root(d.dot(d), d.dot(w), w.dot(w) - self.radius * self.radius) {
            Some(t) => Hit::at(t),
            None => Hit::NONE,
        }
    }

    fn normal(&self, ray: &Ray, hit: &Hit) -> DVec3 {
        (ray.point(hit.dist) - self.center) / self.radius
    }

    fn bounding_box(&self, _part: Option<usize>) -> (Aabb, bool) {
        let r = DVec3::splat(self.radius);
        (Aabb::from_points(self.center - r, self.center + r), false)
    }
}

impl SurfaceFunction for Sphere {
    fn value(&self, location: DVec3) -> f64 {
        (location - self.center).length_squared() - self.radius * self.radius
    }
}
