//! Environment configuration
//!
//! Command-line flags take precedence over everything loaded here.

use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default share base URL
pub const BASE_URL_VAR: &str = "RECEIPT_TOKEN_BASE_URL";

/// Path of the profile store file
pub const STORE_VAR: &str = "RECEIPT_TOKEN_STORE";

/// Store file used when nothing else is configured
pub const DEFAULT_STORE_PATH: &str = "parking_profiles.json";

/// Settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL for shareable links; tokens are printed bare without one
    pub base_url: Option<String>,
    /// Profile store file
    pub store_path: PathBuf,
}

impl Config {
    /// Load from process environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = var(BASE_URL_VAR);
        if base_url.is_none() {
            info!("{BASE_URL_VAR} not set, printing bare tokens");
        }

        let store_path = var(STORE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                info!("{STORE_VAR} not set, using default: {DEFAULT_STORE_PATH}");
                PathBuf::from(DEFAULT_STORE_PATH)
            });

        Self {
            base_url,
            store_path,
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, base_url: Option<String>, store: Option<PathBuf>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if let Some(store) = store {
            self.store_path = store;
        }
        self
    }
}
