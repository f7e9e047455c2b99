#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::debug;
use percent_encoding::utf8_percent_encode;
use randomize::PCG32;

use crate::auxiliary::config::Config;
use crate::auxiliary::location::COMPONENT;
use crate::auxiliary::randomizer::unseeded_rng;
use crate::generation::stream::scale_u32;

pub const FRAGMENT_DELIMITER: char = '#';

/// ASCII characters that survive percent-encoding unchanged, minus the fragment delimiter.
pub fn fragment_alphabet() -> Vec<char> {
    (0_u8..=127)
        .map(char::from)
        .filter(|&c| c != FRAGMENT_DELIMITER && encodes_to_itself(c))
        .collect()
}

fn encodes_to_itself(c: char) -> bool {
    let mut utf8 = [0_u8; 4];
    let text: &str = c.encode_utf8(&mut utf8);
    utf8_percent_encode(text, COMPONENT).to_string() == text
}

/// Originates new identifiers. This is the only non-reproducible randomness in the crate.
pub struct IdentifierSampler {
    alphabet: Vec<char>,
    max_length: usize,
    rng: PCG32,
}

impl IdentifierSampler {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, unseeded_rng())
    }

    /// Sample from a caller supplied generator, e.g. a fixed seed in tests.
    pub fn with_rng(config: &Config, rng: PCG32) -> Self {
        Self {
            alphabet: fragment_alphabet(),
            max_length: config.max_identifier_length(),
            rng,
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Draw an identifier of `target_length` characters, or of a uniform length in
    /// `1..=max_length` when none is given.
    pub fn sample(&mut self, target_length: Option<usize>) -> String {
        let length = match target_length {
            Some(length) => length,
            None => 1 + self.below(self.max_length),
        };
        assert!(length != 0, "identifiers need at least one character");

        let mut identifier = String::with_capacity(length);
        for _ in 0..length {
            let i = self.below(self.alphabet.len());
            identifier.push(self.alphabet[i]);
        }
        debug!("sampled identifier {:?}", identifier);
        identifier
    }

    fn below(&mut self, max: usize) -> usize {
        let max = u32::try_from(max).expect("range exceeds u32");
        scale_u32(self.rng.next_u32(), max) as usize
    }
}
