use std::path::{Path, PathBuf};

pub const SCREEN_WIDTH: u32 = 960;
pub const SCREEN_HEIGHT: u32 = 640;
pub const PIXEL_SIZE: u32 = 2;
pub const MAX_IDENTIFIER_LENGTH: usize = 100;
pub const LOCATION_FILE: &str = "pixel_seed.location";

/// Everything a render depends on besides the identifier itself.
///
/// The logical pixel grid is `display / pixel_size` on each axis, floored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    display_width: u32,
    display_height: u32,
    pixel_size: u32,
    max_identifier_length: usize,
    location_path: PathBuf,
}

impl Config {
    pub fn new(display_width: u32, display_height: u32, pixel_size: u32) -> Self {
        assert!(pixel_size != 0, "pixel size must be non-zero");
        assert!(
            display_width >= pixel_size && display_height >= pixel_size,
            "display {}x{} is smaller than one {}px logical pixel",
            display_width,
            display_height,
            pixel_size
        );
        Self {
            display_width,
            display_height,
            pixel_size,
            max_identifier_length: MAX_IDENTIFIER_LENGTH,
            location_path: PathBuf::from(LOCATION_FILE),
        }
    }

    pub fn with_max_identifier_length(mut self, max_identifier_length: usize) -> Self {
        assert!(max_identifier_length != 0, "identifiers need at least one character");
        self.max_identifier_length = max_identifier_length;
        self
    }

    pub fn with_location_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.location_path = path.into();
        self
    }

    pub fn display_width(&self) -> u32 {
        self.display_width
    }

    pub fn display_height(&self) -> u32 {
        self.display_height
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn max_identifier_length(&self) -> usize {
        self.max_identifier_length
    }

    pub fn location_path(&self) -> &Path {
        &self.location_path
    }

    pub fn logical_width(&self) -> u32 {
        self.display_width / self.pixel_size
    }

    pub fn logical_height(&self) -> u32 {
        self.display_height / self.pixel_size
    }

    /// Number of logical pixels painted per render.
    pub fn logical_pixels(&self) -> usize {
        self.logical_width() as usize * self.logical_height() as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT, PIXEL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_downsampled() {
        let config = Config::default();
        assert_eq!(config.logical_width(), SCREEN_WIDTH / PIXEL_SIZE);
        assert_eq!(config.logical_height(), SCREEN_HEIGHT / PIXEL_SIZE);
        assert_eq!(config.logical_pixels(), 480 * 320);
        assert_eq!(config.max_identifier_length(), MAX_IDENTIFIER_LENGTH);
    }

    #[test]
    fn uneven_display_is_floored() {
        let config = Config::new(7, 5, 2);
        assert_eq!((config.logical_width(), config.logical_height()), (3, 2));
    }

    #[test]
    #[should_panic]
    fn zero_pixel_size_panics() {
        Config::new(10, 10, 0);
    }

    #[test]
    #[should_panic]
    fn pixel_larger_than_display_panics() {
        Config::new(4, 40, 8);
    }

    #[test]
    #[should_panic]
    fn zero_max_length_panics() {
        Config::default().with_max_identifier_length(0);
    }
}
