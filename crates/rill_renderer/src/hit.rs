//! Intersection records.

use std::fmt;

use rill_math::{DVec2, DVec3};

/// Result of intersecting a ray with a geometry.
///
/// Carries just enough to recompute the normal and texture coordinate later
/// without solving the intersection again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray; negative when there was no intersection
    pub dist: f64,
    /// Mesh triangle that was hit (meshes only)
    pub triangle: Option<usize>,
    /// Interpolated texture coordinate, when the mesh is textured
    pub uv: Option<DVec2>,
}

impl Hit {
    /// The record for "no intersection".
    pub const NONE: Hit = Hit {
        dist: -1.0,
        triangle: None,
        uv: None,
    };

    /// A hit at distance `dist` on a non-mesh geometry.
    pub fn at(dist: f64) -> Self {
        Self {
            dist,
            ..Self::NONE
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.dist >= 0.0
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(dist: {}", self.dist)?;
        if let Some(triangle) = self.triangle {
            write!(f, "; triangle: {}", triangle)?;
        }
        if let Some(uv) = self.uv {
            write!(f, "; uv: ({} {})", uv.x, uv.y)?;
        }
        write!(f, ")")
    }
}

/// A shaded point: the hit plus the location and unit normal derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub hit: Hit,
    pub point: DVec3,
    pub normal: DVec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_validity() {
        assert!(!Hit::NONE.is_valid());
        assert!(!Hit::default().is_valid());
        assert!(Hit::at(0.0).is_valid());
        assert!(Hit::at(4.0).is_valid());
    }

    #[test]
    fn test_hit_display() {
        let hit = Hit {
            dist: 2.5,
            triangle: Some(3),
            uv: Some(DVec2::new(0.25, 0.5)),
        };
        assert_eq!(hit.to_string(), "(dist: 2.5; triangle: 3; uv: (0.25 0.5))");
        assert_eq!(Hit::at(1.0).to_string(), "(dist: 1)");
    }
}
