use anyhow::{bail, Context, Result};
use colored::*;
use receipt_token_core::{decode, token_from_url, types::ReceiptDisplay, ReceiptData};
use serde::Serialize;
use std::fs;
use std::io::Write;
use tracing::{info, warn};

#[derive(Serialize)]
struct DecodedReceipt<'a> {
    receipt: &'a ReceiptData,
    display: ReceiptDisplay,
}

/// Decode a token or link and print the receipt as JSON
///
/// An undecodable token yields the blank receipt, as a page would show,
/// unless `strict` is set.
pub fn execute<W: Write>(
    link: &str,
    output: Option<&str>,
    with_display: bool,
    strict: bool,
    out: &mut W,
) -> Result<()> {
    let token = token_from_url(link).unwrap_or_else(|| link.trim().to_string());

    let receipt = match decode(&token) {
        Ok(receipt) => receipt,
        Err(e) if strict => bail!("Failed to decode token: {}", e),
        Err(e) => {
            warn!("Failed to decode token: {}", e);
            eprintln!("{} {}, showing a blank receipt", "✗".red(), e);
            ReceiptData::default()
        }
    };

    let serialized = if with_display {
        serde_json::to_string_pretty(&DecodedReceipt {
            receipt: &receipt,
            display: receipt.display(),
        })
    } else {
        serde_json::to_string_pretty(&receipt)
    };
    let json = serialized.with_context(|| "Failed to serialize receipt")?;

    if let Some(output_path) = output {
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Receipt written to: {}", output_path);
    } else {
        writeln!(out, "{}", json)?;
    }

    Ok(())
}
