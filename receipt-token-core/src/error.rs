//! Error types for receipt token operations

use thiserror::Error;

/// Errors that can occur while turning a receipt into a token
///
/// These only arise from the serializer or the compressor, both of which are
/// fed caller-controlled data, so they are rare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The positional array could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The compressor reported an I/O failure
    #[error("Compression error: {0}")]
    Compression(String),
}

/// Reasons a token could not be turned back into a receipt
///
/// Tokens arrive from user-edited or truncated links, so every variant here
/// is an expected outcome rather than a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Token was empty after trimming
    #[error("Empty token")]
    Empty,

    /// Token is not valid base64 in either alphabet
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not a valid zlib stream
    #[error("Inflate failed: {0}")]
    Inflate(String),

    /// Inflated payload exceeds the accepted size
    #[error("Inflated payload exceeds {0} bytes")]
    TooLarge(usize),

    /// Inflated payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Inflated payload is JSON but not an array
    #[error("Payload is not a positional array")]
    NotAnArray,

    /// A position holds a value that cannot be coerced into its field
    #[error("Invalid value at position {index} ({field}): {reason}")]
    InvalidField {
        /// Position in the compact array
        index: usize,
        /// Field name at that position
        field: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// The link carries no `receipt` parameter
    #[error("No receipt token in link")]
    MissingToken,
}

/// Errors raised while building a shareable link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The base URL could not be parsed as an absolute URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The receipt could not be encoded
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Errors raised by the parking profile registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A required profile field was blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No profile exists under the given id
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The backing key-value store failed
    #[error("Store error: {0}")]
    Store(String),
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Compression(err.to_string())
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError::Serialization(err.to_string())
    }
}
