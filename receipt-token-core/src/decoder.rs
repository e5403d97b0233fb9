//! Token decoding
//!
//! Tokens come from links that may have been truncated, hand-edited or
//! produced by an older version of the encoder. Every failure is reported as
//! a [`DecodeError`] value; nothing in this module panics on bad input.

use crate::constants::MAX_INFLATED_LEN;
use crate::error::DecodeError;
use crate::schema::from_positional;
use crate::types::ReceiptData;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use flate2::read::ZlibDecoder;
use serde_json::Value;
use std::io::Read;

#[cfg(feature = "logging")]
use tracing::debug;

/// Standard alphabet, tolerant of non-zero trailing bits the way browser
/// `atob` is.
const TOKEN_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a token into a receipt
///
/// Reverses [`crate::encoder::encode`]:
/// - Restores the standard base64 alphabet and `=` padding
/// - Base64-decodes and inflates the zlib stream
/// - Parses the JSON positional array and assigns fields by position
///
/// Positions missing from shorter, older arrays take their defaults.
pub fn decode(token: &str) -> Result<ReceiptData, DecodeError> {
    let values = decode_values(token)?;
    from_positional(&values)
}

/// Decode a token, falling back to a blank receipt on any failure
pub fn decode_or_default(token: &str) -> ReceiptData {
    match decode(token) {
        Ok(receipt) => receipt,
        Err(_e) => {
            #[cfg(feature = "logging")]
            debug!("Discarding undecodable receipt token: {}", _e);
            ReceiptData::default()
        }
    }
}

/// Decode a token into its raw positional array
///
/// No field coercion is applied, so the array may have any length.
pub fn decode_values(token: &str) -> Result<Vec<Value>, DecodeError> {
    let compressed = token_bytes(token)?;
    let json = inflate(&compressed)?;

    let value: Value =
        serde_json::from_slice(&json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(values) => Ok(values),
        _ => Err(DecodeError::NotAnArray),
    }
}

/// Base64-decode a token into the compressed bytes it carries
///
/// Accepts the URL-safe alphabet produced by the encoder as well as the
/// standard one, with or without padding.
pub fn token_bytes(token: &str) -> Result<Vec<u8>, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut standard: String = token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    TOKEN_BASE64
        .decode(standard.as_bytes())
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Inflate a zlib stream, refusing output larger than [`MAX_INFLATED_LEN`]
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    ZlibDecoder::new(compressed)
        .take(MAX_INFLATED_LEN as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::Inflate(e.to_string()))?;

    if out.len() > MAX_INFLATED_LEN {
        return Err(DecodeError::TooLarge(MAX_INFLATED_LEN));
    }

    Ok(out)
}
