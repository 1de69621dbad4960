//! Elliptic paraboloid `a x² + b y² − c z = 0`, opening along +z.

use super::{nearest_root, Geometry, SurfaceFunction};
use crate::Hit;
use rill_math::{Aabb, DVec3, Ray};

#[derive(Debug, Clone)]
pub struct Paraboloid {
    a: f64,
    b: f64,
    c: f64,
}

impl Paraboloid {
    /// Coefficients are expected to be positive.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Geometry for Paraboloid {
    fn intersection(&self, ray: &Ray, _part: Option<usize>) -> Hit {
        let (o, d) = (ray.endpoint, ray.direction);
        let quadratic = self.a * d.x * d.x + self.b * d.y * d.y;
        let half_linear = self.a * o.x * d.x + self.b * o.y * d.y - 0.5 * self.c * d.z;

        match nearest_root(quadratic, half_linear, self.value(o)) {
            Some(t) => Hit::at(t),
            None => Hit::NONE,
        }
    }

    fn normal(&self, ray: &Ray, hit: &Hit) -> DVec3 {
        let p = ray.point(hit.dist);
        DVec3::new(2.0 * self.a * p.x, 2.0 * self.b * p.y, -self.c).normalize()
    }

    fn bounding_box(&self, _part: Option<usize>) -> (Aabb, bool) {
        (Aabb::UNIVERSE, true)
    }
}

impl SurfaceFunction for Paraboloid {
    fn value(&self, p: DVec3) -> f64 {
        self.a * p.x * p.x + self.b * p.y * p.y - self.c * p.z
    }
}
