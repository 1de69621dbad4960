//! Geometry trait and the shapes that implement it.
//!
//! Every shape reports the first intersection strictly beyond
//! [`SMALL_T`](rill_math::SMALL_T), so a ray leaving a surface does not hit
//! that same surface at its own origin.

mod cylinder;
mod mesh;
mod paraboloid;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use mesh::{TriangleMesh, WEIGHT_TOLERANCE};
pub use paraboloid::Paraboloid;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::Hit;
use rill_math::{Aabb, DVec3, Ray, SMALL_T};

/// Trait for shapes that rays can hit.
pub trait Geometry: Send + Sync {
    /// First intersection of `ray` beyond `SMALL_T`, or `Hit::NONE`.
    ///
    /// `part` selects a sub-primitive of a compound shape (a mesh triangle);
    /// `None` means the whole shape. Analytic shapes ignore it.
    fn intersection(&self, ray: &Ray, part: Option<usize>) -> Hit;

    /// Unit surface normal at the point described by `hit`.
    fn normal(&self, ray: &Ray, hit: &Hit) -> DVec3;

    /// Bounding box of the shape (or of one part), and whether the shape is
    /// unbounded, in which case the box is meaningless.
    fn bounding_box(&self, part: Option<usize>) -> (Aabb, bool);

    /// Number of parts; one for everything but meshes.
    fn part_count(&self) -> usize {
        1
    }
}

/// Implicit description of a surface: zero on it, negative inside,
/// positive outside.
pub trait SurfaceFunction {
    fn value(&self, location: DVec3) -> f64;
}

/// Smallest root of `a t² + 2 half_b t + c = 0` that exceeds `SMALL_T`.
///
/// Uses the cancellation-free form of the quadratic formula, which also
/// covers the linear case `a == 0`. Non-finite roots are discarded.
pub(crate) fn nearest_root(a: f64, half_b: f64, c: f64) -> Option<f64> {
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let q = -(half_b + half_b.signum() * discriminant.sqrt());
    [q / a, c / q]
        .into_iter()
        .filter(|t| t.is_finite() && *t > SMALL_T)
        .min_by(|x, y| x.total_cmp(y))
}
