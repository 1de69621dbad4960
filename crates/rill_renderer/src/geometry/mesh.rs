//! Triangle mesh geometry.
//!
//! Each triangle is one part. Intersecting part `i` tests only that triangle;
//! intersecting the whole mesh tests every triangle and keeps the closest.

use std::sync::Arc;

use super::Geometry;
use crate::Hit;
use rill_core::Mesh;
use rill_math::{Aabb, DVec2, DVec3, Ray, SMALL_T};

/// How far outside a triangle (in barycentric weight) a hit may land.
/// Keeps rays from slipping through the seam between two triangles.
pub const WEIGHT_TOLERANCE: f64 = 1e-4;

pub struct TriangleMesh {
    mesh: Arc<Mesh>,
    /// Unit face normals; `None` for zero-area triangles
    face_normals: Vec<Option<DVec3>>,
}

impl TriangleMesh {
    pub fn new(mesh: impl Into<Arc<Mesh>>) -> Self {
        let mesh = mesh.into();
        let face_normals = (0..mesh.triangle_count())
            .map(|i| {
                let [a, b, c] = mesh.triangle_vertices(i);
                (b - a).cross(c - a).try_normalize()
            })
            .collect();

        Self { mesh, face_normals }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Barycentric weights of `point` with respect to `triangle`.
    ///
    /// The point is projected onto the triangle's plane. Weights sum to one
    /// and are all in `[0, 1]` exactly when the projection lies inside.
    /// Returns `None` for a degenerate triangle or an out-of-range index.
    pub fn barycentric_weights(&self, triangle: usize, point: DVec3) -> Option<DVec3> {
        let normal = (*self.face_normals.get(triangle)?)?;
        let [a, b, c] = self.mesh.triangle_vertices(triangle);

        let area = |p: DVec3, q: DVec3, r: DVec3| (q - p).cross(r - p).dot(normal);
        let total = area(a, b, c);
        if total == 0.0 {
            return None;
        }

        Some(DVec3::new(
            area(point, b, c) / total,
            area(a, point, c) / total,
            area(a, b, point) / total,
        ))
    }

    fn intersect_triangle(&self, ray: &Ray, triangle: usize) -> Hit {
        let Some(Some(normal)) = self.face_normals.get(triangle).copied() else {
            return Hit::NONE;
        };
        let [a, ..] = self.mesh.triangle_vertices(triangle);

        let denominator = ray.direction.dot(normal);
        if denominator == 0.0 {
            return Hit::NONE;
        }
        let t = (a - ray.endpoint).dot(normal) / denominator;
        if !t.is_finite() || t <= SMALL_T {
            return Hit::NONE;
        }

        let Some(weights) = self.barycentric_weights(triangle, ray.point(t)) else {
            return Hit::NONE;
        };
        let inside = weights
            .to_array()
            .iter()
            .all(|&w| (-WEIGHT_TOLERANCE..1.0).contains(&w));
        if !inside {
            return Hit::NONE;
        }

        let uv = self
            .mesh
            .triangle_uvs(triangle)
            .map(|[ua, ub, uc]| interpolate_uv(ua, ub, uc, weights));

        Hit {
            dist: t,
            triangle: Some(triangle),
            uv,
        }
    }
}

/// Grow `bounds` to cover hits that land up to `WEIGHT_TOLERANCE` outside
/// the triangles they enclose.
fn pad_for_tolerance(bounds: Aabb) -> Aabb {
    if bounds.is_empty() {
        return bounds;
    }
    let diagonal = DVec3::new(bounds.x.size(), bounds.y.size(), bounds.z.size()).length();
    let margin = (WEIGHT_TOLERANCE * diagonal).max(SMALL_T);
    Aabb {
        x: bounds.x.expand(2.0 * margin),
        y: bounds.y.expand(2.0 * margin),
        z: bounds.z.expand(2.0 * margin),
    }
}

fn interpolate_uv(ua: DVec2, ub: DVec2, uc: DVec2, weights: DVec3) -> DVec2 {
    ua + weights.y * (ub - ua) + weights.z * (uc - ua)
}

impl Geometry for TriangleMesh {
    fn intersection(&self, ray: &Ray, part: Option<usize>) -> Hit {
        if let Some(triangle) = part {
            return self.intersect_triangle(ray, triangle);
        }

        let mut closest = Hit::NONE;
        for triangle in 0..self.mesh.triangle_count() {
            let hit = self.intersect_triangle(ray, triangle);
            // Strict comparison keeps the first triangle on ties
            if hit.is_valid() && (!closest.is_valid() || hit.dist < closest.dist) {
                closest = hit;
            }
        }
        closest
    }

    fn normal(&self, _ray: &Ray, hit: &Hit) -> DVec3 {
        hit.triangle
            .and_then(|i| self.face_normals.get(i).copied().flatten())
            .unwrap_or_default()
    }

    fn bounding_box(&self, part: Option<usize>) -> (Aabb, bool) {
        match part {
            Some(i) if i < self.mesh.triangle_count() => {
                (pad_for_tolerance(self.mesh.triangle_bounds(i)), false)
            }
            Some(_) => (Aabb::EMPTY, false),
            None => (pad_for_tolerance(self.mesh.bounds()), false),
        }
    }

    fn part_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}
