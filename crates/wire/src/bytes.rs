//! Byte-string to base64 conversion
//!
//! The gateway has no binary channel: every key and value crosses the wire
//! as a base64 JSON string (standard alphabet, padded). Encoding is total;
//! decoding fails on invalid alphabet or padding.

use crate::error::DecodeError;
use base64::Engine;

/// Encode raw bytes as base64 text.
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 text back to raw bytes.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, DecodeError> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}
