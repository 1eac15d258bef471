use rand::Rng;

use crate::config::ConfigError;

/// Natural pixel dimensions of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

impl ImageInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Ordered set of images available for rotation. Never empty.
///
/// Duplicate entries are allowed and simply bias the random pick
/// towards the repeated image.
#[derive(Debug, Clone)]
pub struct ImageSet {
    images: Vec<ImageInfo>,
}

impl ImageSet {
    pub fn new(images: Vec<ImageInfo>) -> Result<Self, ConfigError> {
        if images.is_empty() {
            return Err(ConfigError::EmptyImageSet);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn get(&self, index: usize) -> ImageInfo {
        self.images[index]
    }

    /// Pick an index uniformly at random, independent of previous picks.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.images.len())
    }
}
