use crate::config::Config;
use crate::store::FileStore;
use anyhow::{Context, Result};
use receipt_token_core::{encode, share_url, ProfileRegistry, ReceiptData};
use std::fs;
use std::io::{self, Read, Write};
use tracing::info;

/// Encode a receipt JSON file into a token, or a link when a base URL is set
///
/// `input` of `None` encodes the sample receipt, `-` reads stdin.
pub fn execute<W: Write>(
    input: Option<&str>,
    profile: Option<&str>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let mut receipt = read_receipt(input)?;

    if let Some(id) = profile {
        let store = FileStore::open(&config.store_path).with_context(|| {
            format!(
                "Failed to open profile store: {}",
                config.store_path.display()
            )
        })?;
        let registry = ProfileRegistry::new(store);
        let found = registry
            .get(id)
            .with_context(|| format!("Failed to load profile {}", id))?;

        info!("Applying profile {} ({})", found.id, found.name);
        found.apply_to(&mut receipt);
    }

    match config.base_url.as_deref() {
        Some(base) => {
            let link = share_url(base, &receipt)
                .with_context(|| format!("Failed to build link from {}", base))?;
            info!("Link is {} chars", link.as_str().len());
            writeln!(out, "{}", link)?;
        }
        None => {
            let token = encode(&receipt).with_context(|| "Failed to encode receipt")?;
            info!("Token is {} chars", token.len());
            writeln!(out, "{}", token)?;
        }
    }

    Ok(())
}

fn read_receipt(input: Option<&str>) -> Result<ReceiptData> {
    let content = match input {
        None => {
            info!("No input given, encoding the sample receipt");
            return Ok(ReceiptData::sample());
        }
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path))?,
    };

    serde_json::from_str(&content).with_context(|| "Failed to parse receipt JSON")
}
