//! Shader trait and the shading models built on it.
//!
//! A shader turns a surface point into a color. Shaders that need more light
//! information cast rays back into the [`World`], one recursion level deeper,
//! and may wrap another shader for their base color.

mod flat;
mod phong;
mod reflective;
mod transparent;

pub use flat::FlatShader;
pub use phong::PhongShader;
pub use reflective::ReflectiveShader;
pub use transparent::TransparentShader;

use crate::{Color, Surface, Trace, World};
use rill_math::Ray;

/// Trait for everything that can color a surface point.
pub trait Shader: Send + Sync {
    /// Color seen along `ray` at `surface`.
    ///
    /// `depth` is the recursion depth of `ray`; secondary rays are cast at
    /// `depth + 1`. For the background shader `surface.hit` is invalid and
    /// both `point` and `normal` hold the ray direction.
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        surface: &Surface,
        depth: u32,
        trace: Trace,
    ) -> Color;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::{Camera, Hit};
    use rill_math::DVec3;
    use std::sync::Arc;

    /// A world with nothing in it but a flat background.
    pub fn empty_world(background: Color) -> World {
        World::new(Camera::default()).with_background(Arc::new(FlatShader::new(background)))
    }

    /// An upward-facing surface point at the origin.
    pub fn floor_surface() -> Surface {
        Surface {
            hit: Hit::at(1.0),
            point: DVec3::ZERO,
            normal: DVec3::Y,
        }
    }
}
