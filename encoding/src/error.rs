//! Error type for payload decoding.

use thiserror::Error;

/// A payload that is not valid standard Base64.
///
/// Decoding is all-or-nothing: when any of these is returned no bytes are
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the Base64 alphabet, or a pad marker in the middle.
    #[error("invalid character {byte:#04x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    /// The number of symbols cannot form a whole number of blocks.
    #[error("invalid payload length {length}")]
    InvalidLength { length: usize },

    /// The final symbol carries bits that no encoder would have set.
    #[error("invalid trailing symbol {byte:#04x} at offset {offset}")]
    InvalidTrailingBits { offset: usize, byte: u8 },

    /// Padding is missing or does not match the block size.
    #[error("invalid padding")]
    InvalidPadding,
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        match err {
            base64::DecodeError::InvalidByte(offset, byte) => {
                DecodeError::InvalidCharacter { offset, byte }
            }
            base64::DecodeError::InvalidLength(length) => DecodeError::InvalidLength { length },
            base64::DecodeError::InvalidLastSymbol(offset, byte) => {
                DecodeError::InvalidTrailingBits { offset, byte }
            }
            base64::DecodeError::InvalidPadding => DecodeError::InvalidPadding,
        }
    }
}
