//! Film, render settings, and the per-pixel render loops.
//!
//! - Serial rendering visits every pixel in row-major order
//! - Parallel rendering splits the film into buckets rendered with rayon
//! - Colors are written to the film unclamped; clamping happens on output

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::{Color, Trace, World};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Deepest recursion level that still gets shaded; the primary ray is 1
    pub recursion_depth_limit: u32,
    /// Whether Phong shading casts shadow rays
    pub enable_shadows: bool,
    /// Skip objects whose bounding box the ray misses
    pub enable_acceleration: bool,
    /// Pixel `[x, y]` whose computation is logged in detail
    pub debug_pixel: Option<[u32; 2]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            recursion_depth_limit: 3,
            enable_shadows: true,
            enable_acceleration: false,
            debug_pixel: None,
        }
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA. No gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the bottom of the film.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to RGBA bytes, top row first.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgba(self.get(x, y)));
            }
        }
        bytes
    }

    /// Save as an 8-bit RGBA PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

impl World {
    /// A black film matching the camera resolution.
    pub fn new_film(&self) -> ImageBuffer {
        ImageBuffer::new(self.camera.width(), self.camera.height())
    }

    /// Color of pixel `(x, y)`. Traced in detail if it is the debug pixel.
    pub fn trace_pixel(&self, x: u32, y: u32) -> Color {
        let trace = match self.config.debug_pixel {
            Some([debug_x, debug_y]) if debug_x == x && debug_y == y => Trace::pixel(x, y),
            _ => Trace::off(),
        };
        let ray = self.camera.primary_ray(x, y);
        self.cast_ray(&ray, 1, trace)
    }

    pub fn render_pixel(&self, x: u32, y: u32, film: &mut ImageBuffer) {
        film.set(x, y, self.trace_pixel(x, y));
    }

    /// Render every pixel of `film` on the calling thread.
    pub fn render(&self, film: &mut ImageBuffer) {
        let start = Instant::now();
        for y in 0..film.height {
            for x in 0..film.width {
                self.render_pixel(x, y, film);
            }
        }
        log::info!(
            "Rendered {}x{} in {:.2?}",
            film.width,
            film.height,
            start.elapsed()
        );
    }

    /// Render `film` in buckets on the rayon thread pool.
    ///
    /// Produces exactly the same pixels as [`World::render`].
    pub fn render_parallel(&self, film: &mut ImageBuffer, bucket_size: u32) {
        let start = Instant::now();
        let buckets = generate_buckets(film.width, film.height, bucket_size.max(1));
        log::debug!("Rendering {} buckets of {} pixels", buckets.len(), bucket_size.max(1));

        let results: Vec<BucketResult> = buckets
            .into_par_iter()
            .map(|bucket| BucketResult::new(bucket, render_bucket(&bucket, self)))
            .collect();

        for result in &results {
            film.write_bucket(result);
        }
        log::info!(
            "Rendered {}x{} ({} buckets) in {:.2?}",
            film.width,
            film.height,
            results.len(),
            start.elapsed()
        );
    }
}
