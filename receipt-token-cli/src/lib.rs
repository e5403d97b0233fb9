//! Library entry for receipt-token-cli used by integration tests and embedding.

pub mod commands;
pub mod config;
pub mod store;

// Re-export commonly used items
pub use crate::commands::{decode, encode, inspect, profile};
pub use crate::config::Config;
pub use crate::store::FileStore;
