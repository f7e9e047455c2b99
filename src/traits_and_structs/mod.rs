pub mod collaborators;
pub mod pixel_buffer;

pub use collaborators::{LocationSlot, RenderTarget};
pub use pixel_buffer::PixelBuffer;
