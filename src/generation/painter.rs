use crate::auxiliary::config::Config;
use crate::generation::hasher::hash;
use crate::generation::stream::StreamGenerator;
use crate::traits_and_structs::pixel_buffer::PixelBuffer;

const CHANNEL_LEVELS: u32 = 256;
const OPAQUE: u8 = 0xff;

/// Paints the logical pixel grid for an identifier.
#[derive(Clone, Copy, Debug)]
pub struct PixelPainter {
    width: u32,
    height: u32,
}

impl PixelPainter {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.logical_width(),
            height: config.logical_height(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Columns outer, rows inner, three draws per pixel for red, green and blue.
    /// The draw order decides which stream values land where, so it is fixed.
    pub fn paint(&self, identifier: &str) -> PixelBuffer {
        let mut stream = StreamGenerator::new(hash(identifier));
        let mut buffer = PixelBuffer::new(self.width, self.height);
        for x in 0..self.width {
            for y in 0..self.height {
                let r = stream.next_int(CHANNEL_LEVELS) as u8;
                let g = stream.next_int(CHANNEL_LEVELS) as u8;
                let b = stream.next_int(CHANNEL_LEVELS) as u8;
                buffer.set_pixel(x, y, [r, g, b, OPAQUE]);
            }
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter(width: u32, height: u32) -> PixelPainter {
        PixelPainter::new(&Config::new(width, height, 1))
    }

    #[test]
    fn pinned_pixels_for_abc() {
        let buffer = painter(4, 3).paint("abc");
        assert_eq!(buffer.pixel(0, 0), [215, 224, 122, 255]);
        assert_eq!(buffer.pixel(0, 1), [124, 82, 6, 255]);
        assert_eq!(buffer.pixel(0, 2), [67, 139, 192, 255]);
        assert_eq!(buffer.pixel(1, 0), [95, 161, 82, 255]);
        assert_eq!(buffer.pixel(2, 1), [220, 243, 94, 255]);
        assert_eq!(buffer.pixel(3, 2), [201, 209, 94, 255]);
    }

    #[test]
    fn first_pixel_is_top_bytes_of_first_draws() {
        let buffer = painter(1, 1).paint("abc");
        // 0xD7F1D200, 0xE001B345, 0x7A22E639
        assert_eq!(buffer.pixel(0, 0), [0xD7, 0xE0, 0x7A, 0xff]);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let buffer = painter(16, 9).paint("alpha");
        assert!(buffer.pixels().all(|p| p[3] == OPAQUE));
    }

    #[test]
    fn buffer_uses_logical_dimensions() {
        let painter = PixelPainter::new(&Config::new(100, 60, 4));
        let buffer = painter.paint("size");
        assert_eq!((buffer.width(), buffer.height()), (25, 15));
    }

    #[test]
    fn painting_twice_is_identical() {
        let painter = painter(32, 24);
        assert_eq!(painter.paint("twice"), painter.paint("twice"));
    }
}
