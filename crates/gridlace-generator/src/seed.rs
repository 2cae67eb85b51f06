//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::Rng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Number of seed bytes; matches the PCG-64 seed width.
pub const SEED_LEN: usize = 32;

/// Errors from parsing a seed's hexadecimal form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 hexadecimal digits long.
    #[display("seed must be {} hex digits, got {len}", SEED_LEN * 2)]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex digit {c:?}")]
    InvalidDigit {
        /// The rejected character.
        c: char,
    },
}

/// A 32-byte seed identifying one puzzle.
///
/// Every generated puzzle carries the seed that produced it, so a puzzle
/// can be shared or regenerated from its seed alone. Seeds round-trip
/// through a 64-digit lowercase hexadecimal string.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use gridlace_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy tuesday");
/// let restored = PuzzleSeed::from_str(&seed.to_string()).unwrap();
/// assert_eq!(seed, restored);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; SEED_LEN]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the operating system's entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; SEED_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a full-
    /// entropy seed and equal phrases always name the same puzzle.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Creates the random number generator this seed stands for.
    #[must_use]
    pub(crate) fn rng(&self) -> Pcg64 {
        use rand::SeedableRng as _;
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != SEED_LEN * 2 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; SEED_LEN];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let digit = |b: u8| {
                char::from(b)
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidDigit { c: char::from(b) })
            };
            #[expect(clippy::cast_possible_truncation)]
            {
                bytes[i] = (digit(chunk[0])? * 16 + digit(chunk[1])?) as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes([
            0x7f, 0x3a, 0x9c, 0x0d, 0xe2, 0x15, 0x4b, 0x86, 0xfa, 0x6d, 0x31, 0xc5, 0x8e, 0x07,
            0xb9, 0x24, 0x0c, 0xdd, 0x5a, 0x71, 0xe8, 0xf2, 0x69, 0x3b, 0x04, 0xc1, 0xd6, 0xa5,
            0xf3, 0x8e, 0x7b, 0x92,
        ]);
        let text = seed.to_string();
        assert_eq!(
            text,
            "7f3a9c0de2154b86fa6d31c58e07b9240cdd5a71e8f2693b04c1d6a5f38e7b92"
        );
        assert_eq!(PuzzleSeed::from_str(&text), Ok(seed));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            PuzzleSeed::from_str("abcd"),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
        let bad = "g".repeat(SEED_LEN * 2);
        assert_eq!(
            PuzzleSeed::from_str(&bad),
            Err(ParseSeedError::InvalidDigit { c: 'g' })
        );
    }

    #[test]
    fn test_phrase_is_deterministic() {
        let a = PuzzleSeed::from_phrase("rainy tuesday");
        let b = PuzzleSeed::from_phrase("rainy tuesday");
        let c = PuzzleSeed::from_phrase("sunny wednesday");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trips_any_bytes(bytes in proptest::array::uniform32(0u8..)) {
            let seed = PuzzleSeed::from_bytes(bytes);
            let parsed = PuzzleSeed::from_str(&seed.to_string()).unwrap();
            prop_assert_eq!(seed, parsed);
        }
    }
}
