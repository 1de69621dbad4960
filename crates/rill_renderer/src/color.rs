//! Colors and where shaders get them from.

use std::sync::Arc;

use rill_core::Texture;
use rill_math::{DVec2, DVec3};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = DVec3;

/// A color that is either constant or looked up from a texture by UV.
#[derive(Debug, Clone)]
pub enum ColorSource {
    Flat(Color),
    Texture(Arc<Texture>),
}

impl ColorSource {
    /// Color at texture coordinate `uv`. Untextured hits sample at (0, 0).
    pub fn get_color(&self, uv: Option<DVec2>) -> Color {
        match self {
            ColorSource::Flat(color) => *color,
            ColorSource::Texture(texture) => texture.sample(uv.unwrap_or(DVec2::ZERO)),
        }
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        ColorSource::Flat(color)
    }
}

impl From<Arc<Texture>> for ColorSource {
    fn from(texture: Arc<Texture>) -> Self {
        ColorSource::Texture(texture)
    }
}
