//! Infinite plane primitive.

use super::{Geometry, SurfaceFunction};
use crate::Hit;
use rill_math::{Aabb, DVec3, Ray, SMALL_T};

/// A plane through `point` whose `normal` points outside.
#[derive(Debug, Clone)]
pub struct Plane {
    point: DVec3,
    normal: DVec3,
}

impl Plane {
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray, _part: Option<usize>) -> Hit {
        let denominator = ray.direction.dot(self.normal);
        // Parallel rays never meet the plane
        if denominator == 0.0 {
            return Hit::NONE;
        }

        let t = -(ray.endpoint - self.point).dot(self.normal) / denominator;
        if t.is_finite() && t > SMALL_T {
            Hit::at(t)
        } else {
            Hit::NONE
        }
    }

    fn normal(&self, _ray: &Ray, _hit: &Hit) -> DVec3 {
        self.normal
    }

    fn bounding_box(&self, _part: Option<usize>) -> (Aabb, bool) {
        (Aabb::UNIVERSE, true)
    }
}

impl SurfaceFunction for Plane {
    fn value(&self, location: DVec3) -> f64 {
        (location - self.point).dot(self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{check_shape, rand_dir, rand_vec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(DVec3::ZERO, DVec3::Y);
        let ray = Ray::new(DVec3::Y, -DVec3::Y);

        let hit = plane.intersection(&ray, None);
        assert_eq!(hit.dist, 1.0);
        assert_eq!(plane.normal(&ray, &hit), DVec3::Y);
    }

    #[test]
    fn test_plane_hit_from_behind() {
        let plane = Plane::new(DVec3::ZERO, DVec3::Y);
        let ray = Ray::new(DVec3::new(0.0, -2.0, 0.0), DVec3::Y);

        assert_eq!(plane.intersection(&ray, None).dist, 2.0);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = Plane::new(DVec3::ZERO, DVec3::Y);

        // Above the plane
        let hit = plane.intersection(&Ray::new(DVec3::Y, DVec3::X), None);
        assert!(!hit.is_valid());
        assert!(!hit.dist.is_nan());

        // In the plane: 0 / 0
        let hit = plane.intersection(&Ray::new(DVec3::ZERO, DVec3::Z), None);
        assert!(!hit.is_valid());
        assert!(!hit.dist.is_nan());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = Plane::new(DVec3::ZERO, DVec3::Y);
        assert!(!plane.intersection(&Ray::new(DVec3::Y, DVec3::Y), None).is_valid());
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = Plane::new(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0));
        let normal = plane.normal(&Ray::default(), &Hit::at(1.0));
        assert!((normal.length() - 1.0).abs() < 1e-12);
        assert!(plane.bounding_box(None).1);
    }

    #[test]
    fn test_random_planes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hits = 0;
        for _ in 0..10 {
            let plane = Plane::new(rand_vec(&mut rng, -2.0, 2.0), rand_dir(&mut rng));
            hits += check_shape(&plane, &mut rng);
        }
        assert!(hits > 100);
    }
}
