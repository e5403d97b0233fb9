//! Token encoding

use crate::error::EncodeError;
use crate::schema::to_positional;
use crate::types::ReceiptData;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bytes::{BufMut, Bytes, BytesMut};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde_json::Value;
use std::io::Write;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a receipt into a URL-safe token
///
/// The token is built in four steps:
/// 1. Project the receipt into its 9-position array
/// 2. Serialize the array as compact JSON
/// 3. Compress with zlib (deflate, default level)
/// 4. Base64 with `-`/`_` in place of `+`/`/` and no `=` padding
///
/// The output only contains `[A-Za-z0-9_-]` and is the same for the same
/// receipt. It is not encrypted.
pub fn encode(receipt: &ReceiptData) -> Result<String, EncodeError> {
    encode_values(&to_positional(receipt))
}

/// Encode an arbitrary positional array
///
/// [`encode`] is the usual entry point. This is exposed for tools that need
/// to produce tokens in older or newer layouts.
pub fn encode_values(values: &[Value]) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(values)?;
    let compressed = compress(&json)?;
    let token = URL_SAFE_NO_PAD.encode(&compressed);

    #[cfg(feature = "logging")]
    debug!(
        json_len = json.len(),
        compressed_len = compressed.len(),
        token_len = token.len(),
        "Encoded receipt token"
    );

    Ok(token)
}

/// Compress bytes into a zlib stream
pub fn compress(data: &[u8]) -> Result<Bytes, EncodeError> {
    let sink = BytesMut::with_capacity(data.len()).writer();
    let mut encoder = ZlibEncoder::new(sink, Compression::default());
    encoder.write_all(data)?;
    let writer = encoder.finish()?;
    Ok(writer.into_inner().freeze())
}
