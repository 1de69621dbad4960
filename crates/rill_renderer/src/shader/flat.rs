use super::Shader;
use crate::{pixel_print, Color, ColorSource, Surface, Trace, World};
use rill_math::Ray;

/// Unlit color, constant or textured. Also the usual background shader.
#[derive(Debug, Clone)]
pub struct FlatShader {
    color: ColorSource,
}

impl FlatShader {
    pub fn new(color: impl Into<ColorSource>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Shader for FlatShader {
    fn shade_surface(
        &self,
        _world: &World,
        _ray: &Ray,
        surface: &Surface,
        _depth: u32,
        trace: Trace,
    ) -> Color {
        let color = self.color.get_color(surface.hit.uv);
        pixel_print!(trace, "flat shader; color: {}", color);
        color
    }
}
