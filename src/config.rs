use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image set is empty")]
    EmptyImageSet,
    #[error("opacity {0} is outside 0.0..=1.0")]
    OpacityOutOfRange(f32),
    #[error("display interval must be positive, got {0}")]
    NonPositiveInterval(f32),
    #[error("transition duration must be positive, got {0}")]
    NonPositiveTransition(f32),
    #[error("zoom levels must satisfy 1 <= min <= max, got {min}..={max}")]
    InvalidZoomRange { min: u32, max: u32 },
}

/// Construction parameters for the carousel. Immutable once the driver
/// and view are built.
///
/// Zoom levels are integer tenths of scale: level 7 means the image is
/// drawn at 0.7x its natural size. Keeping
/// `min_zoom_level / 10 * image width >= frame width` (same for height)
/// is up to the caller; a smaller image pans less than the frame needs
/// and shows its edges, but never faults.
#[derive(Debug, Clone, Copy)]
pub struct PanZoomConfig {
    pub frame_width: f32,
    pub frame_height: f32,
    pub opacity: f32,
    pub display_interval: f32,
    pub transition_duration: f32,
    pub min_zoom_level: u32,
    pub max_zoom_level: u32,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            frame_width: WINDOW_WIDTH as f32,
            frame_height: DEFAULT_FRAME_HEIGHT,
            opacity: DEFAULT_OPACITY,
            display_interval: DEFAULT_DISPLAY_INTERVAL,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            min_zoom_level: DEFAULT_MIN_ZOOM_LEVEL,
            max_zoom_level: DEFAULT_MAX_ZOOM_LEVEL,
        }
    }
}

impl PanZoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.opacity));
        }
        if self.display_interval <= 0.0 {
            return Err(ConfigError::NonPositiveInterval(self.display_interval));
        }
        if self.transition_duration <= 0.0 {
            return Err(ConfigError::NonPositiveTransition(self.transition_duration));
        }
        if self.min_zoom_level < 1 || self.min_zoom_level > self.max_zoom_level {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom_level,
                max: self.max_zoom_level,
            });
        }
        Ok(())
    }
}
