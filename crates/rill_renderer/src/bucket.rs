//! Film tiles for `World::render_parallel`.
//!
//! Each tile is traced on its own and hands back an owned pixel block, so
//! workers never share the film.

use crate::{Color, World};

/// Tile edge used when the caller has no preference.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// A rectangle of film pixels. `y` counts up from the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from the bucket's middle to `(cx, cy)`.
    fn distance_sq(&self, cx: f64, cy: f64) -> f64 {
        let dx = self.x as f64 + 0.5 * self.width as f64 - cx;
        let dy = self.y as f64 + 0.5 * self.height as f64 - cy;
        dx * dx + dy * dy
    }
}

/// Cover a `width` x `height` film with tiles of at most `bucket_size`
/// pixels a side, nearest the film center first.
///
/// Edge tiles are clipped to the film. A size of zero is treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let (cx, cy) = (0.5 * width as f64, 0.5 * height as f64);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    // Stable, so equally distant tiles stay in grid order
    buckets.sort_by(|a, b| a.distance_sq(cx, cy).total_cmp(&b.distance_sq(cx, cy)));
    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Trace every pixel of `bucket`, row by row from its bottom-left corner.
pub fn render_bucket(bucket: &Bucket, world: &World) -> Vec<Color> {
    (bucket.y..bucket.y + bucket.height)
        .flat_map(|y| (bucket.x..bucket.x + bucket.width).map(move |x| (x, y)))
        .map(|(x, y)| world.trace_pixel(x, y))
        .collect()
}

/// A traced bucket waiting to be copied into the film.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Row-major within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, FlatShader};
    use std::sync::Arc;

    #[test]
    fn test_bucket_counts_and_clipping() {
        let even = generate_buckets(128, 128, 64);
        assert_eq!(even.len(), 4);
        assert!(even.iter().all(|b| b.pixel_count() == 64 * 64));

        let ragged = generate_buckets(100, 70, 64);
        assert_eq!(ragged.len(), 4);
        let pixels: u32 = ragged.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(pixels, 100 * 70);
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| b.pixel_count() == 1));
    }

    #[test]
    fn test_center_bucket_first() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);
        assert_eq!((buckets[0].x, buckets[0].y), (64, 64));
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_buckets_tile_the_film_once() {
        let buckets = generate_buckets(5, 3, 2);
        let mut covered = vec![0; 15];
        for b in &buckets {
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    covered[(y * 5 + x) as usize] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_render_bucket_row_major() {
        let world = World::new(Camera::new().with_resolution(4, 4))
            .with_background(Arc::new(FlatShader::new(Color::ONE)));
        let bucket = Bucket::new(1, 2, 3, 2, 0);

        let pixels = render_bucket(&bucket, &world);
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&c| c == Color::ONE));
    }
}
