//! Fuzzing entry points for receipt-token-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

/// Decode arbitrary bytes as a token
pub fn fuzz_decode(data: &[u8]) {
    use receipt_token_core::decode;

    let token = String::from_utf8_lossy(data);
    // Try to decode - should never panic
    let _ = decode(&token);
}

/// Inflate arbitrary bytes as if they were a token payload
pub fn fuzz_inflate(data: &[u8]) {
    use receipt_token_core::decoder::inflate;

    let _ = inflate(data);
}

/// Treat arbitrary bytes as a link and open it
pub fn fuzz_share_url(data: &[u8]) {
    use receipt_token_core::receipt_from_url;

    let link = String::from_utf8_lossy(data);
    let _ = receipt_from_url(&link);
}
