use std::sync::Arc;

use super::Shader;
use crate::{pixel_print, Color, Surface, Trace, World};
use rill_math::Ray;

/// Mirror reflection blended over another shader.
pub struct ReflectiveShader {
    shader: Arc<dyn Shader>,
    /// Fraction of the color taken from the mirror direction, in [0, 1]
    reflectivity: f64,
}

impl ReflectiveShader {
    pub fn new(shader: Arc<dyn Shader>, reflectivity: f64) -> Self {
        Self {
            shader,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }
}

impl Shader for ReflectiveShader {
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        surface: &Surface,
        depth: u32,
        trace: Trace,
    ) -> Color {
        let color = self.shader.shade_surface(world, ray, surface, depth, trace.nested());

        let n = surface.normal;
        let v = -ray.direction.normalize();
        let r = (2.0 * v.dot(n) * n - v).normalize();
        let reflected_ray = Ray::new(surface.point, r);
        pixel_print!(trace, "reflected ray: {:?}", reflected_ray);

        let reflected = world.cast_ray(&reflected_ray, depth + 1, trace.nested());
        let k = self.reflectivity;
        let blended = color * (1.0 - k) + reflected * k;
        pixel_print!(
            trace,
            "reflected color: {}; object color: {}; final color: {}",
            reflected,
            color,
            blended
        );
        blended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::test_support::{empty_world, floor_surface};
    use crate::FlatShader;
    use rill_math::DVec3;

    const INNER: Color = Color::new(0.9, 0.1, 0.3);
    const SKY: Color = Color::new(0.2, 0.4, 0.8);

    fn mirror(k: f64) -> ReflectiveShader {
        ReflectiveShader::new(Arc::new(FlatShader::new(INNER)), k)
    }

    fn incoming() -> Ray {
        Ray::towards(DVec3::new(-1.0, 1.0, 0.0), DVec3::ZERO)
    }

    #[test]
    fn test_zero_reflectivity_is_inner_color() {
        let world = empty_world(SKY);
        let color = mirror(0.0).shade_surface(&world, &incoming(), &floor_surface(), 1, Trace::off());
        assert_eq!(color, INNER);
    }

    #[test]
    fn test_full_reflectivity_is_reflected_color() {
        let world = empty_world(SKY);
        let color = mirror(1.0).shade_surface(&world, &incoming(), &floor_surface(), 1, Trace::off());
        assert_eq!(color, SKY);
    }

    #[test]
    fn test_partial_reflectivity_blends() {
        let world = empty_world(SKY);
        let color = mirror(0.25).shade_surface(&world, &incoming(), &floor_surface(), 1, Trace::off());
        assert!((color - (INNER * 0.75 + SKY * 0.25)).length() < 1e-12);
    }

    #[test]
    fn test_reflectivity_is_clamped() {
        let world = empty_world(SKY);
        let color = mirror(3.0).shade_surface(&world, &incoming(), &floor_surface(), 1, Trace::off());
        assert_eq!(color, SKY);
    }

    #[test]
    fn test_reflection_past_depth_limit_is_black() {
        let world = empty_world(SKY);
        let depth = world.config.recursion_depth_limit;
        let color = mirror(1.0).shade_surface(&world, &incoming(), &floor_surface(), depth, Trace::off());
        assert_eq!(color, Color::ZERO);
    }
}
