use std::sync::Arc;

use super::Shader;
use crate::{pixel_print, Color, Surface, Trace, World};
use rill_math::{DVec3, Ray};

/// Refraction and Fresnel reflection for dielectric surfaces.
///
/// The surface normal is assumed to point from the object into the
/// surrounding medium (index 1). Rays arriving against the normal are
/// entering the object.
pub struct TransparentShader {
    shader: Arc<dyn Shader>,
    index_of_refraction: f64,
    /// Weight of the inner shader's color, in [0, 1]
    opacity: f64,
}

impl TransparentShader {
    pub fn new(shader: Arc<dyn Shader>, index_of_refraction: f64, opacity: f64) -> Self {
        Self {
            shader,
            index_of_refraction: index_of_refraction.max(1.0),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Schlick's approximation of the fraction of light reflected when a ray
    /// travelling along `direction` meets a surface with `normal`.
    pub fn reflectivity(&self, direction: DVec3, normal: DVec3) -> f64 {
        let ior = self.index_of_refraction;
        let r0 = ((ior - 1.0) / (ior + 1.0)).powi(2);
        let cos_theta = direction.normalize().dot(normal).abs().min(1.0);
        r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
    }

    /// Direction of the transmitted ray for unit `direction`, or `None` on
    /// total internal reflection.
    fn refracted_direction(&self, direction: DVec3, normal: DVec3) -> Option<DVec3> {
        let (facing, eta) = if direction.dot(normal) < 0.0 {
            (normal, 1.0 / self.index_of_refraction)
        } else {
            (-normal, self.index_of_refraction)
        };

        let cos_incoming = direction.dot(facing);
        let discriminant = 1.0 - eta * eta * (1.0 - cos_incoming * cos_incoming);
        if discriminant <= 0.0 {
            return None;
        }
        Some(-discriminant.sqrt() * facing + eta * (direction - cos_incoming * facing))
    }
}

impl Shader for TransparentShader {
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        surface: &Surface,
        depth: u32,
        trace: Trace,
    ) -> Color {
        let d = ray.direction.normalize();
        let n = surface.normal;

        pixel_print!(
            trace,
            "{} object",
            if d.dot(n) < 0.0 { "entering" } else { "exiting" }
        );

        let reflectivity = self.reflectivity(d, n);
        let reflected_ray = Ray::new(surface.point, d - 2.0 * d.dot(n) * n);
        pixel_print!(trace, "reflected ray: {:?}", reflected_ray);
        let reflected = world.cast_ray(&reflected_ray, depth + 1, trace.nested());

        let Some(direction) = self.refracted_direction(d, n) else {
            pixel_print!(trace, "total internal reflection; color: {}", reflected);
            return reflected;
        };

        let inner = self.shader.shade_surface(world, ray, surface, depth, trace.nested());

        let transmitted_ray = Ray::new(surface.point, direction);
        pixel_print!(trace, "transmitted ray: {:?}", transmitted_ray);
        let transmitted = world.cast_ray(&transmitted_ray, depth + 1, trace.nested());

        let alpha = self.opacity;
        let color = alpha * inner
            + (1.0 - alpha) * (reflectivity * reflected + (1.0 - reflectivity) * transmitted);
        pixel_print!(
            trace,
            "reflectivity: {}; reflected: {}; transmitted: {}; final color: {}",
            reflectivity,
            reflected,
            transmitted,
            color
        );
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::test_support::{empty_world, floor_surface};
    use crate::{Camera, FlatShader, RenderConfig, Sphere};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const INNER: Color = Color::new(1.0, 0.0, 0.0);
    const SKY: Color = Color::new(0.0, 0.0, 1.0);

    fn glass(ior: f64, opacity: f64) -> TransparentShader {
        TransparentShader::new(Arc::new(FlatShader::new(INNER)), ior, opacity)
    }

    #[test]
    fn test_reflectivity_at_normal_incidence() {
        let shader = glass(1.5, 0.0);
        let r = shader.reflectivity(-DVec3::Y, DVec3::Y);
        assert!((r - 0.04).abs() < 1e-12);

        // Matched media reflect nothing head-on
        assert_eq!(glass(1.0, 0.0).reflectivity(-DVec3::Y, DVec3::Y), 0.0);
    }

    #[test]
    fn test_reflectivity_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let shader = glass(rng.gen_range(1.0..3.0), 0.0);
            let direction = DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if direction.length_squared() < 1e-6 {
                continue;
            }
            let r = shader.reflectivity(direction, DVec3::Y);
            assert!((0.0..=1.0).contains(&r), "reflectivity {} out of range", r);
        }
        // Grazing incidence reflects everything
        assert!((glass(1.5, 0.0).reflectivity(DVec3::X, DVec3::Y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_internal_reflection_returns_reflected_color() {
        let world = empty_world(SKY);
        // Leaving the object at a shallow angle
        let ray = Ray::new(DVec3::new(-1.0, -0.2, 0.0), DVec3::new(1.0, 0.2, 0.0).normalize());

        let color = glass(1.5, 0.5).shade_surface(&world, &ray, &floor_surface(), 1, Trace::off());
        assert_eq!(color, SKY);
    }

    #[test]
    fn test_opaque_is_inner_color() {
        let world = empty_world(SKY);
        let ray = Ray::new(DVec3::Y, -DVec3::Y);

        let color = glass(1.5, 1.0).shade_surface(&world, &ray, &floor_surface(), 1, Trace::off());
        assert_eq!(color, INNER);
    }

    #[test]
    fn test_head_on_blend() {
        let world = empty_world(SKY);
        let ray = Ray::new(DVec3::Y, -DVec3::Y);

        // Both secondary rays escape to the sky, so only the inner color
        // and the sky contribute
        let color = glass(1.5, 0.25).shade_surface(&world, &ray, &floor_surface(), 1, Trace::off());
        let expected = 0.25 * INNER + 0.75 * SKY;
        assert!((color - expected).length() < 1e-12, "{}", color);
    }

    #[test]
    fn test_matched_index_sphere_is_invisible() {
        let mut world = World::new(Camera::default())
            .with_config(RenderConfig {
                recursion_depth_limit: 5,
                ..RenderConfig::default()
            })
            .with_background(Arc::new(FlatShader::new(SKY)));
        world.add_object("ball", Sphere::new(DVec3::ZERO, 1.0), Arc::new(glass(1.0, 0.0)));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), -DVec3::Z);
        let color = world.cast_ray(&ray, 1, Trace::off());
        assert!((color - SKY).length() < 1e-12, "{}", color);
    }

    #[test]
    fn test_refraction_follows_snell() {
        let shader = glass(1.5, 0.0);
        let d = DVec3::new(1.0, -1.0, 0.0).normalize();

        // Entering: bends toward the normal, sin θt = sin θi / ior
        let t = shader.refracted_direction(d, DVec3::Y).unwrap();
        assert!((t.length() - 1.0).abs() < 1e-12);
        assert!(t.y < 0.0);
        assert!((t.x - d.x / 1.5).abs() < 1e-12);

        // Leaving along the same path reverses it
        let back = shader.refracted_direction(-t, DVec3::Y).unwrap();
        assert!((back + d).length() < 1e-12);

        // Shallow exit is trapped
        let shallow = DVec3::new(1.0, 0.2, 0.0).normalize();
        assert_eq!(shader.refracted_direction(shallow, DVec3::Y), None);
    }
}
