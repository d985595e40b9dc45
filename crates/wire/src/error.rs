//! Decode error types

use thiserror::Error;

/// Decode failures that surface to the caller.
///
/// Scalar field extraction never errors (it degrades to defaults); these
/// variants cover the cases where a silent default would corrupt data or
/// hide a malformed body entirely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Invalid base64 in a key or value field
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Body is not parseable as a JSON object
    #[error("Body is not a JSON object")]
    NotAnObject,
}
