//! Tests for payload decoding.

use super::*;

// ============================================================================
// decode tests
// ============================================================================

#[test]
fn test_decode_pcm_payload() {
    // -32768 and 32767 as little-endian i16
    let bytes = decode("AID/fw==").unwrap();
    assert_eq!(bytes, vec![0x00, 0x80, 0xff, 0x7f]);
}

#[test]
fn test_decode_empty() {
    let bytes = decode("").unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn test_decode_preserves_byte_order() {
    let bytes = decode("AAAAQADA/38=").unwrap();
    assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x40, 0x00, 0xc0, 0xff, 0x7f]);
}

#[test]
fn test_decode_inverts_encode() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![],
        vec![0],
        vec![0xff, 0xfe],
        vec![1, 2, 3],
        (0..=255u8).collect(),
        (0..1001u32).map(|i| (i * 7 % 256) as u8).collect(),
    ];
    for input in inputs {
        let text = encode(&input);
        assert_eq!(decode(&text).unwrap(), input, "payload {text}");
    }
}

#[test]
fn test_decode_invalid_character() {
    let err = decode("AAA!").unwrap_err();
    assert_eq!(err, DecodeError::InvalidCharacter { offset: 3, byte: b'!' });
}

#[test]
fn test_decode_url_safe_alphabet_rejected() {
    let err = decode("AID_fw==").unwrap_err();
    assert_eq!(err, DecodeError::InvalidCharacter { offset: 3, byte: b'_' });
}

#[test]
fn test_decode_invalid_length() {
    let err = decode("AAAAA").unwrap_err();
    assert!(
        matches!(err, DecodeError::InvalidLength { .. } | DecodeError::InvalidPadding),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_decode_missing_padding() {
    assert!(decode("AID/fw").is_err());
}

#[test]
fn test_decode_padding_in_middle() {
    assert!(decode("AA==AAAA").is_err());
}

#[test]
fn test_decode_trailing_bits() {
    let err = decode("AB==").unwrap_err();
    assert_eq!(err, DecodeError::InvalidTrailingBits { offset: 1, byte: b'B' });
}

#[test]
fn test_decode_error_display() {
    let err = DecodeError::InvalidCharacter { offset: 3, byte: b'!' };
    assert_eq!(err.to_string(), "invalid character 0x21 at offset 3");

    let err = DecodeError::InvalidLength { length: 5 };
    assert_eq!(err.to_string(), "invalid payload length 5");
}

#[test]
fn test_encode_pads() {
    assert_eq!(encode([1u8, 2, 3]), "AQID");
    assert_eq!(encode([0x00u8, 0x80, 0xff, 0x7f]), "AID/fw==");
    assert_eq!(encode([0u8; 0]), "");
}
