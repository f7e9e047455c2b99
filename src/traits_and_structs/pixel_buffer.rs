pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA pixels at the logical (downsampled) resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width != 0 && height != 0);
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .expect("too big");
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (x as usize + y as usize * self.width as usize) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.as_bytes().len(), 3 * 2 * BYTES_PER_PIXEL);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn layout_is_row_major() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(1, 1, [1, 2, 3, 4]);
        assert_eq!(buffer.pixel(1, 1), [1, 2, 3, 4]);
        // Second row starts after three pixels.
        assert_eq!(&buffer.as_bytes()[16..20], &[1, 2, 3, 4]);
        assert_eq!(buffer.pixels().nth(4), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    #[should_panic]
    fn zero_width_panics() {
        PixelBuffer::new(0, 5);
    }

    #[test]
    #[should_panic]
    fn out_of_range_pixel_panics() {
        PixelBuffer::new(2, 2).pixel(2, 0);
    }
}
