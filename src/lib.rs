//! Deterministic pixel art from short identifiers.
//!
//! An identifier is hashed to a 128-bit seed, the seed drives an sfc32 stream,
//! and the stream colors every logical pixel. The same identifier always paints
//! the same image.

pub mod auxiliary;
pub mod error;
pub mod generation;
pub mod projects;
pub mod traits_and_structs;
