use anyhow::Result;
use colored::*;
use receipt_token_core::{
    constants::FIELD_COUNT,
    decoder::{decode_values, inflate, token_bytes},
    schema::{from_positional, Field, FieldKind},
    token_from_url,
};
use std::io::Write;
use tracing::info;

/// Print each stage of a token: base64, compressed bytes, JSON, positions
pub fn execute<W: Write>(link: &str, out: &mut W) -> Result<()> {
    let token = token_from_url(link).unwrap_or_else(|| link.trim().to_string());
    info!("Inspecting token of {} chars", token.len());

    writeln!(out, "\n=== Token ===")?;
    writeln!(out, "Length:             {} chars", token.len())?;

    let compressed = match token_bytes(&token) {
        Ok(bytes) => bytes,
        Err(e) => return report_failure(out, &e.to_string()),
    };
    writeln!(out, "Compressed size:    {} bytes", compressed.len())?;
    writeln!(out, "Compressed (hex):   {}", hex::encode(&compressed))?;

    let json = match inflate(&compressed) {
        Ok(json) => json,
        Err(e) => return report_failure(out, &e.to_string()),
    };
    writeln!(out, "Inflated size:      {} bytes", json.len())?;
    writeln!(out, "Inflated text:      {}", String::from_utf8_lossy(&json))?;

    let values = match decode_values(&token) {
        Ok(values) => values,
        Err(e) => return report_failure(out, &e.to_string()),
    };

    writeln!(out, "\n=== Positions ===")?;
    writeln!(out, "Present:            {} of {}", values.len(), FIELD_COUNT)?;
    for field in Field::ALL {
        let kind = match field.kind() {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        };
        let shown = match values.get(field.index()) {
            Some(value) => value.to_string().normal(),
            None => "default".dimmed(),
        };
        writeln!(
            out,
            "  [{}] {} ({}): {}",
            field.index(),
            field.name(),
            kind,
            shown
        )?;
    }
    for (index, value) in values.iter().enumerate().skip(FIELD_COUNT) {
        writeln!(out, "  [{}] {}: {}", index, "unknown, ignored".yellow(), value)?;
    }

    writeln!(out, "\n=== Summary ===")?;
    match from_positional(&values) {
        Ok(_) => writeln!(out, "{} Token decodes to a receipt", "✓".green())?,
        Err(e) => return report_failure(out, &e.to_string()),
    }

    Ok(())
}

fn report_failure<W: Write>(out: &mut W, reason: &str) -> Result<()> {
    writeln!(out, "\n=== Summary ===")?;
    writeln!(out, "{} {}", "✗".red(), reason)?;
    Ok(())
}
