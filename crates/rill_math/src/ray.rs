use crate::DVec3;

/// A ray in 3D space with an endpoint and a direction.
///
/// The direction is expected to be unit length, but this is a convention
/// of the callers and not enforced here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub endpoint: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(endpoint: DVec3, direction: DVec3) -> Self {
        Self {
            endpoint,
            direction,
        }
    }

    /// Create a ray from `endpoint` heading towards `target`, with a unit direction.
    pub fn towards(endpoint: DVec3, target: DVec3) -> Self {
        Self::new(endpoint, (target - endpoint).normalize())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: endpoint + t * direction
    #[inline]
    pub fn point(&self, t: f64) -> DVec3 {
        self.endpoint + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            endpoint: DVec3::ZERO,
            direction: DVec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let endpoint = DVec3::new(1.0, 2.0, 3.0);
        let direction = DVec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(endpoint, direction);

        assert_eq!(ray.endpoint, endpoint);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_point() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        assert_eq!(ray.point(0.0), DVec3::ZERO);
        assert_eq!(ray.point(1.0), DVec3::X);
        assert_eq!(ray.point(2.0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.point(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_towards_is_normalized() {
        let ray = Ray::towards(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0));

        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!((ray.point(5.0) - DVec3::new(0.0, 3.0, 4.0)).length() < 1e-12);
    }
}
