//! # Receipt Token Core
//!
//! Compact, URL-safe tokens that carry a parking receipt inside a shareable
//! link (`?receipt=<token>`), plus the parking profiles reused across
//! receipts.
//!
//! ## Modules
//!
//! - `constants`: Wire constants and limits
//! - `types`: The receipt record and its display values
//! - `schema`: Positional array layout of a receipt
//! - `encoder`: Receipt → token
//! - `decoder`: Token → receipt, tolerant of damaged links
//! - `share`: Building and reading shareable links
//! - `profile`: Parking profiles over a key-value store

#![warn(missing_docs)]

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod profile;
pub mod schema;
pub mod share;
pub mod types;

// Re-export commonly used types
pub use decoder::{decode, decode_or_default};
pub use encoder::encode;
pub use error::{DecodeError, EncodeError, ProfileError, ShareError};
pub use profile::{KvStore, MemoryStore, NewProfile, ParkingProfile, ProfileRegistry};
pub use share::{receipt_from_url, share_url, token_from_url};
pub use types::ReceiptData;
