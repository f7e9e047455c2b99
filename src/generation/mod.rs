pub mod hasher;
pub mod painter;
pub mod sampler;
pub mod session;
pub mod stream;

pub use hasher::{hash, SeedState};
pub use painter::PixelPainter;
pub use sampler::IdentifierSampler;
pub use session::Session;
pub use stream::StreamGenerator;
