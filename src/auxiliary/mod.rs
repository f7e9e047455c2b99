pub mod config;
pub mod diagnostics;
pub mod location;
pub mod randomizer;
pub mod window;

pub use config::Config;
pub use location::{FileLocation, LocationError, MemoryLocation};
