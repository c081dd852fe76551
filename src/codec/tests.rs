use crate::codec::{
    BASE64_ALPHABET, CodecError, LEVEL_ALPHABET, decode, decode_tuples, decode_with, encode,
    encode_with,
};

/// Reference repacking through explicit bit windows over neighbouring values.
fn encode_by_windows(values: &[u8]) -> Vec<u32> {
    fn window(value: u32, position: i32) -> u32 {
        let left_shift = 1 - position;
        if left_shift >= 0 {
            (value << left_shift) & 63
        } else {
            (value >> -left_shift) & 63
        }
    }

    let mut outputs = Vec::new();
    for group in values.chunks(6) {
        let i: Vec<u32> = (0..6)
            .map(|k| group.get(k).copied().map_or(0, u32::from))
            .collect();
        outputs.push(window(i[0], 0) | window(i[1], 5));
        outputs.push(window(i[1], -1) | window(i[2], 4));
        outputs.push(window(i[2], -2) | window(i[3], 3));
        outputs.push(window(i[3], -3) | window(i[4], 2));
        outputs.push(window(i[4], -4) | window(i[5], 1));
    }
    outputs
}

/// Deterministic pseudo-random 5-bit values.
fn sample_values(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((state >> 16) & 31) as u8
        })
        .collect()
}

#[test]
fn test_known_word() {
    assert_eq!(encode(&[5, 16, 18, 27, 28, 13]), Ok("LCW+N".to_string()));
    assert_eq!(decode("LCW+N"), Ok(vec![5, 16, 18, 27, 28, 13]));
}

#[test]
fn test_alphabet_table() {
    assert_eq!(LEVEL_ALPHABET.symbol(0), 'A');
    assert_eq!(LEVEL_ALPHABET.symbol(25), 'Z');
    assert_eq!(LEVEL_ALPHABET.symbol(26), 'A');
    assert_eq!(LEVEL_ALPHABET.symbol(51), 'Z');
    assert_eq!(LEVEL_ALPHABET.symbol(52), '0');
    assert_eq!(LEVEL_ALPHABET.symbol(61), '9');
    assert_eq!(LEVEL_ALPHABET.symbol(62), '+');
    assert_eq!(LEVEL_ALPHABET.symbol(63), '/');
    assert!(!LEVEL_ALPHABET.is_lossless());

    assert_eq!(BASE64_ALPHABET.symbol(26), 'a');
    assert!(BASE64_ALPHABET.is_lossless());
}

#[test]
fn test_matches_bit_window_scheme() {
    for len in [0, 1, 5, 6, 7, 12, 40, 61] {
        let values = sample_values(len, len as u32 + 7);
        let expected: String = encode_by_windows(&values)
            .into_iter()
            .map(|o| LEVEL_ALPHABET.symbol(o))
            .collect();
        assert_eq!(encode(&values), Ok(expected), "len {}", len);
    }
}

#[test]
fn test_every_value_in_every_slot_round_trips() {
    for slot in 0..6 {
        for value in 0..32u8 {
            let mut word = [0u8; 6];
            word[slot] = value;
            let encoded = encode_with(&word, &BASE64_ALPHABET);
            assert!(encoded.is_ok());
            if let Ok(encoded) = encoded {
                assert_eq!(encoded.len(), 5);
                assert_eq!(decode_with(&encoded, &BASE64_ALPHABET), Ok(word.to_vec()));
            }
        }
    }
}

#[test]
fn test_round_trip_with_lossless_alphabet() {
    for len in 0..50 {
        let values = sample_values(len, 1000 + len as u32);
        let decoded = encode_with(&values, &BASE64_ALPHABET)
            .and_then(|encoded| decode_with(&encoded, &BASE64_ALPHABET))
            .unwrap_or_default();
        assert_eq!(decoded.len(), len.div_ceil(6) * 6);
        assert_eq!(&decoded[..len], values.as_slice());
        assert!(decoded[len..].iter().all(|&v| v == 0));
    }
}

#[test]
fn test_level_alphabet_aliases_high_letters() {
    // o0 = 26 needs i0 = 13 and a clear top bit in i1
    let values = [13, 0, 0, 0, 0, 0];
    assert_eq!(encode(&values), Ok("AAAAA".to_string()));
    assert_eq!(decode("AAAAA"), Ok(vec![0; 6]));
    assert_eq!(encode_with(&values, &BASE64_ALPHABET), Ok("aAAAA".to_string()));
}

#[test]
fn test_short_final_group_is_zero_padded() {
    let full = encode(&[7, 9, 11, 0, 0, 0]);
    assert!(full.is_ok());
    assert_eq!(encode(&[7, 9, 11]), full);
    assert_eq!(encode(&[]), Ok(String::new()));
    assert_eq!(encode(&[1; 7]).map(|s| s.len()), Ok(10));
}

#[test]
fn test_value_out_of_range() {
    assert_eq!(
        encode(&[1, 2, 32]),
        Err(CodecError::ValueOutOfRange {
            index: 2,
            value: 32
        })
    );
}

#[test]
fn test_decode_errors() {
    assert_eq!(decode("LCW+"), Err(CodecError::TruncatedWord(4)));
    assert_eq!(
        decode("LCw+N"),
        Err(CodecError::UnknownSymbol {
            index: 2,
            symbol: 'w'
        })
    );
}

#[test]
fn test_decode_tuples_drops_padding() {
    let tuples = [[1, 2, 3, 4], [2, 2, 8, 9], [3, 3, 3, 31], [4, 5, 6, 7], [9, 9, 9, 9]];
    for count in 0..=tuples.len() {
        let flat: Vec<u8> = tuples[..count].iter().flatten().copied().collect();
        let decoded = encode_with(&flat, &BASE64_ALPHABET)
            .and_then(|encoded| decode_tuples(&encoded, &BASE64_ALPHABET))
            .unwrap_or_default();
        assert_eq!(decoded, tuples[..count].to_vec());
    }
}

#[test]
fn test_decode_tuples_keeps_tuples_after_aliased_zero() {
    // 13 in the first slot packs to symbol 26, which the level alphabet reads back as 0
    let flat = [13, 1, 1, 1, 2, 3, 13, 1, 4, 5, 6, 7];
    let encoded = encode(&flat).unwrap_or_default();
    assert_eq!(encoded, "AEIRDAEHTH");
    assert_eq!(
        decode_tuples(&encoded, &LEVEL_ALPHABET),
        Ok(vec![[0, 1, 1, 1], [2, 3, 0, 1], [0, 29, 6, 7]])
    );

    let padded = encode(&flat[..8]).unwrap_or_default();
    assert_eq!(
        decode_tuples(&padded, &LEVEL_ALPHABET),
        Ok(vec![[0, 1, 1, 1], [2, 3, 0, 1]])
    );
}
