use log::debug;

use crate::codec::alphabet::{Alphabet, LEVEL_ALPHABET};
use crate::codec::errors::CodecError;
use crate::codec::{HEXA_WORD, SYMBOL_BITS, SYMBOLS_PER_WORD, VALUE_BITS, VALUE_MASK, WORD_BITS};
use crate::utils::{ARITY, Tuple};

/// Decode with the level alphabet.
///
/// # Errors
///
/// Returns an error on an unknown symbol or a length not a multiple of 5.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    decode_with(encoded, &LEVEL_ALPHABET)
}

/// Inverse of `encode_with`. Yields six values per five symbols, padding
/// included; an aliased symbol resolves to its first index.
///
/// # Errors
///
/// Returns an error on an unknown symbol or a length not a multiple of 5.
pub fn decode_with(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, CodecError> {
    let symbols: Vec<char> = encoded.chars().collect();
    if symbols.len() % SYMBOLS_PER_WORD != 0 {
        return Err(CodecError::TruncatedWord(symbols.len()));
    }

    let mut values = Vec::with_capacity(symbols.len() / SYMBOLS_PER_WORD * HEXA_WORD);
    for (word_index, word_symbols) in symbols.chunks(SYMBOLS_PER_WORD).enumerate() {
        let mut word = 0u32;
        for (k, &symbol) in word_symbols.iter().enumerate() {
            let index = alphabet
                .index_of(symbol)
                .ok_or(CodecError::UnknownSymbol {
                    index: word_index * SYMBOLS_PER_WORD + k,
                    symbol,
                })?;
            word = (word << SYMBOL_BITS) | index;
        }
        for k in 1..=HEXA_WORD as u32 {
            values.push(((word >> (WORD_BITS - k * VALUE_BITS)) & VALUE_MASK) as u8);
        }
    }

    debug!("Decoded {} symbols into {} values", symbols.len(), values.len());
    Ok(values)
}

/// Decodes a level string back into its tuples, dropping the zero padding.
///
/// Padding only ever fills the last word, so at most one trailing all-zero
/// tuple is removed. Aliased symbols can zero a value anywhere else; those
/// tuples are kept.
///
/// # Errors
///
/// Returns an error on an unknown symbol or a length not a multiple of 5.
pub fn decode_tuples(encoded: &str, alphabet: &Alphabet) -> Result<Vec<Tuple>, CodecError> {
    let values = decode_with(encoded, alphabet)?;
    let mut tuples: Vec<Tuple> = values
        .chunks_exact(ARITY)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    if tuples.last() == Some(&[0; ARITY]) {
        tuples.pop();
    }
    Ok(tuples)
}
