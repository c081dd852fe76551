//! Packs 5-bit values into 6-bit symbols, six values to five symbols

mod alphabet;
mod decode;
mod encode;
mod errors;

pub use alphabet::{Alphabet, BASE64_ALPHABET, LEVEL_ALPHABET};
pub use decode::{decode, decode_tuples, decode_with};
pub use encode::{encode, encode_with};
pub use errors::CodecError;

/// Values consumed per word.
pub const HEXA_WORD: usize = 6;
/// Symbols produced per word.
pub const SYMBOLS_PER_WORD: usize = 5;
pub const VALUE_BITS: u32 = 5;
pub const SYMBOL_BITS: u32 = 6;

const VALUE_MASK: u32 = (1 << VALUE_BITS) - 1;
const SYMBOL_MASK: u32 = (1 << SYMBOL_BITS) - 1;
const WORD_BITS: u32 = VALUE_BITS * HEXA_WORD as u32;

#[cfg(test)]
mod tests;
