//! Render settings shared by the camera and the command line.

use crate::error::ConfigError;
use crate::integrator::Shading;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub image_width: u32,
    pub aspect_ratio: f64,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Vertical field of view, degrees.
    pub vfov: f64,
    pub focal_length: f64,
    /// Fixed seed for reproducible renders.
    pub seed: Option<u64>,
    pub shading: Shading,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            vfov: 90.0,
            focal_length: 1.0,
            seed: None,
            shading: Shading::Path,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(ConfigError::BadAspectRatio(self.aspect_ratio));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(ConfigError::BadFieldOfView(self.vfov));
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(ConfigError::BadFocalLength(self.focal_length));
        }
        Ok(())
    }
}
