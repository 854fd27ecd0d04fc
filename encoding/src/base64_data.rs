//! Standard Base64 payload text.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::DecodeError;

/// Decodes a standard Base64 payload into the bytes it encodes.
///
/// The payload must use the standard alphabet with canonical `=` padding, so
/// its length is always a multiple of 4. An empty payload decodes to an empty
/// buffer.
pub fn decode(payload: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(payload)?)
}

/// Encodes bytes as a padded standard Base64 payload.
pub fn encode(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}
