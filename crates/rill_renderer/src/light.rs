//! Light sources used by the Phong shader.

use std::f64::consts::PI;

use crate::Color;
use rill_math::DVec3;

pub trait Light: Send + Sync {
    fn name(&self) -> &str;

    fn position(&self) -> DVec3;

    /// Light arriving at a point, given the vector from that point to the light.
    fn emitted_light(&self, vector_to_light: DVec3) -> Color;
}

/// An isotropic point light with inverse-square falloff.
#[derive(Debug, Clone)]
pub struct PointLight {
    name: String,
    position: DVec3,
    color: Color,
    brightness: f64,
}

impl PointLight {
    pub fn new(name: impl Into<String>, position: DVec3, color: Color, brightness: f64) -> Self {
        Self {
            name: name.into(),
            position,
            color,
            brightness,
        }
    }
}

impl Light for PointLight {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn emitted_light(&self, vector_to_light: DVec3) -> Color {
        self.color * self.brightness / (4.0 * PI * vector_to_light.length_squared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_square_falloff() {
        let light = PointLight::new("L", DVec3::ZERO, Color::ONE, 4.0 * PI);

        assert!((light.emitted_light(DVec3::new(1.0, 0.0, 0.0)) - Color::ONE).length() < 1e-12);
        assert!((light.emitted_light(DVec3::new(0.0, 2.0, 0.0)) - Color::splat(0.25)).length() < 1e-12);
        assert_eq!(light.name(), "L");
    }
}
