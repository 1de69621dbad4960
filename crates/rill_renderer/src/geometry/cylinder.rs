//! Infinite circular cylinder.

use super::{nearest_root, Geometry, SurfaceFunction};
use crate::Hit;
use rill_math::{Aabb, DVec3, Ray};

#[derive(Debug, Clone)]
pub struct Cylinder {
    /// Any point on the axis
    point: DVec3,
    axis: DVec3,
    radius: f64,
}

impl Cylinder {
    pub fn new(point: DVec3, axis: DVec3, radius: f64) -> Self {
        Self {
            point,
            axis: axis.normalize(),
            radius: radius.max(f64::EPSILON),
        }
    }

    /// Component of `v` perpendicular to the axis.
    fn radial(&self, v: DVec3) -> DVec3 {
        v - v.dot(self.axis) * self.axis
    }
}

impl Geometry for Cylinder {
    fn intersection(&self, ray: &Ray, _part: Option<usize>) -> Hit {
        let w = self.radial(ray.endpoint - self.point);
        let d = self.radial(ray.direction);

        match nearest_root(d.dot(d), d.dot(w), w.dot(w) - self.radius * self.radius) {
            Some(t) => Hit::at(t),
            None => Hit::NONE,
        }
    }

    fn normal(&self, ray: &Ray, hit: &Hit) -> DVec3 {
        self.radial(ray.point(hit.dist) - self.point).normalize()
    }

    fn bounding_box(&self, _part: Option<usize>) -> (Aabb, bool) {
        (Aabb::UNIVERSE, true)
    }
}

impl SurfaceFunction for Cylinder {
    fn value(&self, location: DVec3) -> f64 {
        self.radial(location - self.point).length_squared() - self.radius * self.radius
    }
}
