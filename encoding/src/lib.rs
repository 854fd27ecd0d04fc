//! Text decoding for audio payloads.
//!
//! Speech generation services deliver raw PCM as standard Base64 text, either
//! as a bare string or as a field of a JSON response. This crate turns that
//! text back into the exact bytes that were encoded upstream.
//!
//! - [`decode`]: Decodes a Base64 payload into bytes
//! - [`encode`]: Encodes bytes as a padded Base64 payload
//! - [`DecodeError`]: Why a payload could not be decoded
//!
//! # Example
//!
//! ```rust
//! use voxwav_encoding::{decode, encode};
//!
//! let bytes = decode("AACAAP9/").unwrap();
//! assert_eq!(bytes, vec![0x00, 0x00, 0x80, 0x00, 0xff, 0x7f]);
//! assert_eq!(encode(&bytes), "AACAAP9/");
//! ```

mod base64_data;
mod error;

pub use base64_data::{decode, encode};
pub use error::DecodeError;

#[cfg(test)]
mod tests;
