use log::debug;

use crate::codec::alphabet::{Alphabet, LEVEL_ALPHABET};
use crate::codec::errors::CodecError;
use crate::codec::{HEXA_WORD, SYMBOL_BITS, SYMBOLS_PER_WORD, VALUE_BITS, VALUE_MASK, WORD_BITS};

/// Encode with the level alphabet.
///
/// # Errors
///
/// Returns an error if any value is above 31.
pub fn encode(values: &[u8]) -> Result<String, CodecError> {
    encode_with(values, &LEVEL_ALPHABET)
}

/// Packs each group of six 5-bit values, most significant first, into one
/// 30-bit word and emits it as five 6-bit symbols. A short final group is
/// padded with zeros.
///
/// # Errors
///
/// Returns an error if any value is above 31.
pub fn encode_with(values: &[u8], alphabet: &Alphabet) -> Result<String, CodecError> {
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|&(_, &v)| u32::from(v) > VALUE_MASK)
    {
        return Err(CodecError::ValueOutOfRange { index, value });
    }

    let mut encoded = String::with_capacity(values.len().div_ceil(HEXA_WORD) * SYMBOLS_PER_WORD);
    for group in values.chunks(HEXA_WORD) {
        let word = pack_word(group);
        for k in 1..=SYMBOLS_PER_WORD as u32 {
            encoded.push(alphabet.symbol(word >> (WORD_BITS - k * SYMBOL_BITS)));
        }
    }

    debug!("Encoded {} values into {} symbols", values.len(), encoded.len());
    Ok(encoded)
}

fn pack_word(group: &[u8]) -> u32 {
    (0..HEXA_WORD).fold(0, |word, i| {
        let value = group.get(i).copied().map_or(0, u32::from);
        (word << VALUE_BITS) | value
    })
}
