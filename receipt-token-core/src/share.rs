//! Shareable links
//!
//! A link is the page address with the token in the `receipt` query
//! parameter: `https://example.com/receipt?receipt=<token>`.

use crate::constants::RECEIPT_QUERY_PARAM;
use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{DecodeError, ShareError};
use crate::types::ReceiptData;
use url::{form_urlencoded, Url};

/// Build a shareable link for a receipt
///
/// Other query parameters and the fragment of `base` are kept. An existing
/// `receipt` parameter is replaced.
pub fn share_url(base: &str, receipt: &ReceiptData) -> Result<Url, ShareError> {
    let mut url = Url::parse(base.trim())
        .map_err(|e| ShareError::InvalidBaseUrl(format!("{}: {}", base, e)))?;

    let token = encode(receipt)?;
    set_token(&mut url, &token);

    Ok(url)
}

/// Put `token` into the `receipt` parameter of `url`
pub fn set_token(url: &mut Url, token: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != RECEIPT_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(RECEIPT_QUERY_PARAM, token);
}

/// Extract the token from a link
///
/// Accepts an absolute URL, a relative path with a query (`/r?receipt=…`),
/// or a bare query string with or without the leading `?`. Returns `None`
/// when there is no non-empty `receipt` parameter.
pub fn token_from_url(input: &str) -> Option<String> {
    let input = input.trim();

    let token = match Url::parse(input) {
        Ok(url) => find_token(url.query_pairs()),
        Err(_) => {
            let without_fragment = input.split('#').next().unwrap_or_default();
            let query = match without_fragment.split_once('?') {
                Some((_, query)) => query,
                None => without_fragment,
            };
            find_token(form_urlencoded::parse(query.as_bytes()))
        }
    };

    token.filter(|t| !t.is_empty())
}

/// Extract and decode the receipt carried by a link
pub fn receipt_from_url(input: &str) -> Result<ReceiptData, DecodeError> {
    let token = token_from_url(input).ok_or(DecodeError::MissingToken)?;
    decode(&token)
}

fn find_token(mut pairs: form_urlencoded::Parse<'_>) -> Option<String> {
    pairs
        .find(|(key, _)| key == RECEIPT_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}
