use super::Shader;
use crate::{pixel_print, Color, ColorSource, Surface, Trace, World};
use rill_math::{Ray, SMALL_T};

/// Phong illumination: ambient, plus diffuse and specular for every light
/// the surface point can see.
#[derive(Debug, Clone)]
pub struct PhongShader {
    ambient: ColorSource,
    diffuse: ColorSource,
    specular: ColorSource,
    specular_power: f64,
}

impl PhongShader {
    pub fn new(
        ambient: impl Into<ColorSource>,
        diffuse: impl Into<ColorSource>,
        specular: impl Into<ColorSource>,
        specular_power: f64,
    ) -> Self {
        Self {
            ambient: ambient.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            specular_power,
        }
    }
}

impl Shader for PhongShader {
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        surface: &Surface,
        _depth: u32,
        trace: Trace,
    ) -> Color {
        let uv = surface.hit.uv;
        let n = surface.normal;

        let ambient = match &world.ambient_color {
            Some(world_ambient) => world_ambient.get_color(None) * self.ambient.get_color(uv),
            None => self.ambient.get_color(uv),
        };
        let mut color = ambient * world.ambient_intensity;
        pixel_print!(trace, "ambient: {}", color);

        let Some(e) = (ray.endpoint - surface.point).try_normalize() else {
            return color;
        };

        for light in &world.lights {
            let to_light = light.position() - surface.point;
            let distance = to_light.length();
            let Some(l) = to_light.try_normalize() else {
                continue;
            };

            if world.config.enable_shadows {
                let shadow_ray = Ray::new(surface.point, l);
                if let Some((blocker, hit)) = world.closest_intersection(&shadow_ray, trace.nested()) {
                    if hit.dist > SMALL_T && hit.dist < distance {
                        pixel_print!(
                            trace,
                            "light {} not visible; obscured by object {} at location: {}",
                            light.name(),
                            blocker.name,
                            hit
                        );
                        continue;
                    }
                }
                pixel_print!(trace, "light {} visible; light dist: {}", light.name(), distance);
            }

            let intensity = light.emitted_light(to_light);
            let r = -l + 2.0 * n.dot(l) * n;
            let diffuse = intensity * self.diffuse.get_color(uv) * n.dot(l).max(0.0);
            let specular = intensity
                * self.specular.get_color(uv)
                * e.dot(r).max(0.0).powf(self.specular_power);

            pixel_print!(
                trace,
                "shading for light {}: diffuse: {}; specular: {}",
                light.name(),
                diffuse,
                specular
            );
            color += diffuse + specular;
        }

        pixel_print!(trace, "final color {}", color);
        color
    }
}
