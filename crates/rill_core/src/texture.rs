//! Texture loading and caching for textured shading.
//!
//! Images are decoded once into linear floating-point RGB and looked up by
//! UV coordinate with bilinear filtering.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rill_math::{DVec2, DVec3};
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture has no pixels: {0}")]
    Empty(PathBuf),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A loaded texture with linear RGB pixel data, row-major from the top row.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pixels: Vec<DVec3>,
    /// Original file path (for debugging)
    pub path: String,
}

impl Texture {
    /// Create a new texture from pixel data.
    ///
    /// # Panics
    /// If `pixels.len() != width * height` or the texture is empty.
    pub fn new(width: u32, height: u32, pixels: Vec<DVec3>, path: impl Into<String>) -> Self {
        assert!(width > 0 && height > 0, "texture must not be empty");
        assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Sample the texture at UV coordinates (bilinear filtering).
    ///
    /// UV coordinates wrap outside [0, 1], with (0, 0) at the bottom-left.
    pub fn sample(&self, uv: DVec2) -> DVec3 {
        let u = uv.x.rem_euclid(1.0);
        let v = uv.y.rem_euclid(1.0);

        let x = u * (self.width - 1) as f64;
        let y = (1.0 - v) * (self.height - 1) as f64; // Flip V for image rows

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x.fract();
        let fy = y.fract();

        let top = self.pixel(x0, y0).lerp(self.pixel(x1, y0), fx);
        let bottom = self.pixel(x0, y1).lerp(self.pixel(x1, y1), fx);

        top.lerp(bottom, fy)
    }

    fn pixel(&self, x: u32, y: u32) -> DVec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<DVec3>()
    }
}

/// Cache for loaded textures.
///
/// Textures are loaded on-demand and shared between shaders.
pub struct TextureCache {
    textures: HashMap<PathBuf, Arc<Texture>>,
}

impl TextureCache {
    /// Create a new empty texture cache.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Load a texture from file, using cache if available.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TextureResult<Arc<Texture>> {
        let path = path.as_ref();
        if let Some(texture) = self.textures.get(path) {
            log::debug!("Texture cache hit: {}", path.display());
            return Ok(texture.clone());
        }

        let texture = Arc::new(load_texture_file(path)?);
        self.textures.insert(path.to_path_buf(), texture.clone());

        log::debug!(
            "Loaded texture: {} ({}x{}, {:.1} KB)",
            texture.path,
            texture.width,
            texture.height,
            texture.size_bytes() as f64 / 1024.0
        );

        Ok(texture)
    }

    /// Get the number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a texture from a file path.
fn load_texture_file(path: &Path) -> TextureResult<Texture> {
    let img = image::open(path).map_err(|source| match source {
        image::ImageError::IoError(err) => TextureError::Io(err),
        source => TextureError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::Empty(path.to_path_buf()));
    }

    let pixels = rgb
        .pixels()
        .map(|p| {
            DVec3::new(
                srgb_to_linear(p[0]),
                srgb_to_linear(p[1]),
                srgb_to_linear(p[2]),
            )
        })
        .collect();

    Ok(Texture::new(
        width,
        height,
        pixels,
        path.to_string_lossy().to_string(),
    ))
}

/// Convert sRGB byte value to linear float.
fn srgb_to_linear(value: u8) -> f64 {
    let v = value as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
