use crate::codec::SYMBOL_MASK;

/// Maps 6-bit indices to output characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8; 64],
}

/// Alphabet of the published level sets.
///
/// Indices 26..=51 repeat the letters of 0..=25, so a decoder cannot tell
/// them apart.
pub const LEVEL_ALPHABET: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/");

/// Standard Base64 table, lossless in both directions.
pub const BASE64_ALPHABET: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

impl Alphabet {
    pub const fn new(symbols: &'static [u8; 64]) -> Self {
        Self { symbols }
    }

    /// Character for a 6-bit index; only the low six bits are used.
    #[inline]
    pub fn symbol(&self, index: u32) -> char {
        char::from(self.symbols[(index & SYMBOL_MASK) as usize])
    }

    /// First index mapped to `symbol`.
    pub fn index_of(&self, symbol: char) -> Option<u32> {
        let byte = u8::try_from(symbol).ok()?;
        self.symbols
            .iter()
            .position(|&s| s == byte)
            .map(|i| i as u32)
    }

    /// Whether every index has its own character.
    pub fn is_lossless(&self) -> bool {
        self.symbols
            .iter()
            .enumerate()
            .all(|(i, s)| !self.symbols[..i].contains(s))
    }
}
