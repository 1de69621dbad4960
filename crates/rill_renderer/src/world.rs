//! The scene being rendered and the two queries shaders make against it.

use std::sync::Arc;

use crate::geometry::Geometry;
use crate::shader::Shader;
use crate::{pixel_print, Camera, Color, ColorSource, Hit, Light, RenderConfig, Surface, Trace};
use rill_math::{Aabb, Interval, Ray};

/// One geometry paired with the shader that colors it.
pub struct ShadedObject {
    pub name: String,
    pub geometry: Box<dyn Geometry>,
    pub shader: Arc<dyn Shader>,
    /// `None` for unbounded geometry
    bounds: Option<Aabb>,
}

impl ShadedObject {
    pub fn new(
        name: impl Into<String>,
        geometry: impl Geometry + 'static,
        shader: Arc<dyn Shader>,
    ) -> Self {
        let (aabb, infinite) = geometry.bounding_box(None);
        Self {
            name: name.into(),
            geometry: Box::new(geometry),
            shader,
            bounds: (!infinite).then_some(aabb),
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }
}

/// Everything needed to render an image.
///
/// Immutable while rendering, so it can be shared across threads.
pub struct World {
    pub camera: Camera,
    pub lights: Vec<Box<dyn Light>>,
    /// Shades rays that hit nothing; black when absent
    pub background_shader: Option<Arc<dyn Shader>>,
    pub ambient_color: Option<ColorSource>,
    pub ambient_intensity: f64,
    pub config: RenderConfig,
    objects: Vec<ShadedObject>,
}

impl World {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            background_shader: None,
            ambient_color: None,
            ambient_intensity: 0.0,
            config: RenderConfig::default(),
            objects: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_background(mut self, shader: Arc<dyn Shader>) -> Self {
        self.background_shader = Some(shader);
        self
    }

    pub fn with_ambient(mut self, color: impl Into<ColorSource>, intensity: f64) -> Self {
        self.ambient_color = Some(color.into());
        self.ambient_intensity = intensity;
        self
    }

    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        geometry: impl Geometry + 'static,
        shader: Arc<dyn Shader>,
    ) {
        self.objects.push(ShadedObject::new(name, geometry, shader));
    }

    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
    }

    pub fn objects(&self) -> &[ShadedObject] {
        &self.objects
    }

    /// Closest object hit by `ray` and where.
    ///
    /// Objects are tested in insertion order; on equal distances the first
    /// one wins.
    pub fn closest_intersection(&self, ray: &Ray, trace: Trace) -> Option<(&ShadedObject, Hit)> {
        let mut closest: Option<(&ShadedObject, Hit)> = None;

        for object in &self.objects {
            if self.config.enable_acceleration {
                if let Some(bounds) = object.bounds {
                    if !bounds.hit(ray, Interval::new(0.0, f64::INFINITY)) {
                        continue;
                    }
                }
            }

            let hit = object.geometry.intersection(ray, None);
            if !hit.is_valid() {
                continue;
            }
            if closest.map_or(true, |(_, best)| hit.dist < best.dist) {
                closest = Some((object, hit));
            }
        }

        match &closest {
            Some((object, hit)) => {
                pixel_print!(trace, "closest intersection; obj: {}; hit: {}", object.name, hit)
            }
            None => pixel_print!(trace, "closest intersection; none"),
        }
        closest
    }

    /// Color seen along `ray`, which is at recursion level `depth`.
    pub fn cast_ray(&self, ray: &Ray, depth: u32, trace: Trace) -> Color {
        pixel_print!(trace, "cast ray {:?}", ray);
        if depth > self.config.recursion_depth_limit {
            pixel_print!(trace, "ray too deep; return black");
            return Color::ZERO;
        }

        if let Some((object, hit)) = self.closest_intersection(ray, trace.nested()) {
            let surface = Surface {
                hit,
                point: ray.point(hit.dist),
                normal: object.geometry.normal(ray, &hit),
            };
            pixel_print!(
                trace,
                "call shade_surface with location: {}; normal: {}",
                surface.point,
                surface.normal
            );
            return object.shader.shade_surface(self, ray, &surface, depth, trace.nested());
        }

        match &self.background_shader {
            Some(background) => {
                let surface = Surface {
                    hit: Hit::NONE,
                    point: ray.direction,
                    normal: ray.direction,
                };
                background.shade_surface(self, ray, &surface, depth, trace.nested())
            }
            None => {
                pixel_print!(trace, "no background; return black");
                Color::ZERO
            }
        }
    }
}
