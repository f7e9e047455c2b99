use std::fmt;

use crate::auxiliary::config::Config;

const BITS_PER_PIXEL: u32 = 24;

/// A count that is usually far too large for any integer type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Magnitude {
    Exact(u128),
    /// Base-10 logarithm of the count.
    Approximate(f64),
}

impl Magnitude {
    pub fn log10(&self) -> f64 {
        match *self {
            Magnitude::Exact(n) => (n as f64).log10(),
            Magnitude::Approximate(log10) => log10,
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Magnitude::Exact(n) => write!(f, "{}", n),
            Magnitude::Approximate(log10) => {
                let exponent = log10.floor();
                let leading = 10f64.powf(log10 - exponent).floor().clamp(1.0, 9.0);
                write!(f, "~{}e{}", leading as u8, exponent as u64)
            }
        }
    }
}

/// Distinct images one configuration can show: `256^(3 * pixels)`.
pub fn possible_images(config: &Config) -> Magnitude {
    let pixels = config.logical_pixels() as u128;
    let bits = pixels * u128::from(BITS_PER_PIXEL);
    if bits < 128 {
        Magnitude::Exact(1 << bits)
    } else {
        Magnitude::Approximate(bits as f64 * std::f64::consts::LOG10_2)
    }
}

/// Distinct identifiers of exactly `length` characters.
pub fn identifiers_of_length(alphabet_size: usize, length: usize) -> Magnitude {
    assert!(alphabet_size != 0, "empty alphabet");
    u32::try_from(length)
        .ok()
        .and_then(|exp| (alphabet_size as u128).checked_pow(exp))
        .map(Magnitude::Exact)
        .unwrap_or_else(|| Magnitude::Approximate(length as f64 * (alphabet_size as f64).log10()))
}

/// Distinct identifiers of any length from 1 to `max_length`.
pub fn possible_identifiers(alphabet_size: usize, max_length: usize) -> Magnitude {
    assert!(alphabet_size != 0, "empty alphabet");
    let exact = (1..=max_length).try_fold(0u128, |total, length| {
        match identifiers_of_length(alphabet_size, length) {
            Magnitude::Exact(n) => total.checked_add(n),
            Magnitude::Approximate(_) => None,
        }
    });
    if let Some(total) = exact {
        return Magnitude::Exact(total);
    }
    // Geometric series a + a^2 + ... + a^n ~= a^n * a / (a - 1); a == 1 always fits above.
    let a = alphabet_size as f64;
    Magnitude::Approximate(max_length as f64 * a.log10() + (a / (a - 1.0)).log10())
}

/// The informational line printed at startup.
pub fn summary(config: &Config, alphabet_size: usize) -> String {
    format!(
        "Number of possible images: {}\nNumber of possible identifiers: {} ({} characters, up to {} long)",
        possible_images(config),
        possible_identifiers(alphabet_size, config.max_identifier_length()),
        alphabet_size,
        config.max_identifier_length(),
    )
}
