use pixels::Pixels;

use crate::auxiliary::location::LocationError;
use crate::traits_and_structs::pixel_buffer::PixelBuffer;

/// Something that can show a finished buffer.
///
/// Implementations upscale by whole pixels only; no smoothing.
pub trait RenderTarget {
    fn present(&mut self, buffer: &PixelBuffer);
}

/// The single string slot holding the current identifier.
pub trait LocationSlot {
    /// Read once at startup. `None` when nothing was saved.
    fn load(&mut self) -> Result<Option<String>, LocationError>;
    /// Written once per render.
    fn store(&mut self, identifier: &str) -> Result<(), LocationError>;
}

// pixels scales its texture to the surface with nearest-neighbor sampling.
impl RenderTarget for Pixels {
    fn present(&mut self, buffer: &PixelBuffer) {
        let frame = self.get_frame();
        assert_eq!(
            frame.len(),
            buffer.as_bytes().len(),
            "pixel buffer does not match the surface texture"
        );
        frame.copy_from_slice(buffer.as_bytes());
    }
}

/// Keeps every presented buffer.
impl RenderTarget for Vec<PixelBuffer> {
    fn present(&mut self, buffer: &PixelBuffer) {
        self.push(buffer.clone());
    }
}
