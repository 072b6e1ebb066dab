use crate::Vector2D;

/// Configuration for the seeker scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekerConfig {
    pub width: f32,
    pub height: f32,
    /// Distance covered per frame while seeking; also the arrival threshold
    pub speed: f32,
    pub capture_radius: f32,
    /// Opacity applied to the entity fill only
    pub fill_alpha: f32,
    pub line_width: f32,
    /// Draw a guide line from the entity to the pointer
    pub show_guide: bool,
}

impl Default for SeekerConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            speed: 50.0,
            capture_radius: 30.0,
            fill_alpha: 0.5,
            line_width: 3.0,
            show_guide: true,
        }
    }
}

impl SeekerConfig {
    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(self.capture_radius.is_finite() && self.capture_radius > 0.0) {
            return Err(ConfigError::InvalidCaptureRadius(self.capture_radius));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.width) && positive(self.height)) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ConfigError::InvalidFillAlpha(self.fill_alpha));
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),
    #[error("capture radius must be a positive finite number, got {0}")]
    InvalidCaptureRadius(f32),
    #[error("surface dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("fill alpha must be within [0, 1], got {0}")]
    InvalidFillAlpha(f32),
    #[error("line width must be a non-negative finite number, got {0}")]
    InvalidLineWidth(f32),
}
