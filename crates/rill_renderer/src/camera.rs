//! Pinhole camera and film geometry.
//!
//! The film is a rectangle `focal_distance` in front of the camera, spanned
//! by `horizontal_vector` and `vertical_vector` between the `min` and `max`
//! film coordinates. Pixel (0, 0) is the bottom-left corner of the film.

use rill_math::{DVec2, DVec3, Ray};

/// Camera for generating primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Location of the eye
    pub position: DVec3,
    /// Center of the film
    pub film_position: DVec3,
    pub look_vector: DVec3,
    /// Film "right", perpendicular to the look vector
    pub horizontal_vector: DVec3,
    /// Film "up", perpendicular to the look vector
    pub vertical_vector: DVec3,
    /// Bottom-left corner of the film, in film coordinates
    pub min: DVec2,
    /// Top-right corner of the film, in film coordinates
    pub max: DVec2,
    /// Resolution, `[width, height]`
    pub number_pixels: [u32; 2],
    pub focal_distance: f64,
}

impl Camera {
    /// A camera at the origin looking down -Z with a 90° field of view.
    pub fn new() -> Self {
        let camera = Self {
            position: DVec3::ZERO,
            film_position: DVec3::ZERO,
            look_vector: DVec3::NEG_Z,
            horizontal_vector: DVec3::X,
            vertical_vector: DVec3::Y,
            min: DVec2::splat(-1.0),
            max: DVec2::splat(1.0),
            number_pixels: [100, 100],
            focal_distance: 1.0,
        };
        camera
            .position_and_aim(DVec3::ZERO, DVec3::NEG_Z, DVec3::Y)
            .focus(1.0, 1.0, 90.0)
    }

    /// Place the camera and build its frame.
    ///
    /// `pseudo_up` only needs to be roughly "up"; it must not be parallel to
    /// the viewing direction.
    pub fn position_and_aim(mut self, position: DVec3, look_at: DVec3, pseudo_up: DVec3) -> Self {
        self.position = position;
        self.look_vector = (look_at - position).normalize();
        self.horizontal_vector = self.look_vector.cross(pseudo_up).normalize();
        self.vertical_vector = self.horizontal_vector.cross(self.look_vector).normalize();
        self.film_position = self.position + self.look_vector * self.focal_distance;
        self
    }

    /// Set the film distance and size.
    ///
    /// `aspect_ratio` is width over height; `field_of_view` is the
    /// horizontal angle in degrees.
    pub fn focus(mut self, focal_distance: f64, aspect_ratio: f64, field_of_view: f64) -> Self {
        self.focal_distance = focal_distance;
        let width = 2.0 * focal_distance * (0.5 * field_of_view.to_radians()).tan();
        let height = width / aspect_ratio;
        let half_size = 0.5 * DVec2::new(width, height);
        self.min = -half_size;
        self.max = half_size;
        self.film_position = self.position + self.look_vector * self.focal_distance;
        self
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.number_pixels = [width.max(1), height.max(1)];
        self
    }

    pub fn width(&self) -> u32 {
        self.number_pixels[0]
    }

    pub fn height(&self) -> u32 {
        self.number_pixels[1]
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    /// World-space location of the center of pixel `(x, y)` on the film.
    pub fn world_position(&self, x: u32, y: u32) -> DVec3 {
        let resolution = DVec2::new(self.width() as f64, self.height() as f64);
        let pixel_size = (self.max - self.min) / resolution;
        let film = pixel_size * (DVec2::new(x as f64, y as f64) + 0.5) + self.min;
        self.film_position + film.x * self.horizontal_vector + film.y * self.vertical_vector
    }

    /// The unit-direction ray from the eye through pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::towards(self.position, self.world_position(x, y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
