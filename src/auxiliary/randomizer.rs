#![deny(clippy::all)]
#![forbid(unsafe_code)]

use randomize::PCG32;

/// Generate a seed for the unseeded PRNG from the operating system.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

/// A PCG32 that differs on every run. Only used to originate new identifiers.
pub fn unseeded_rng() -> PCG32 {
    generate_seed().into()
}
