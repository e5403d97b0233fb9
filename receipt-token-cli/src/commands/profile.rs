use crate::store::FileStore;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use receipt_token_core::{NewProfile, ProfileRegistry};
use std::io::Write;
use std::path::Path;
use tracing::info;

fn open(store: &Path) -> Result<ProfileRegistry<FileStore>> {
    let store = FileStore::open(store)
        .with_context(|| format!("Failed to open profile store: {}", store.display()))?;
    Ok(ProfileRegistry::new(store))
}

/// Print all stored profiles
pub fn list<W: Write>(store: &Path, json: bool, out: &mut W) -> Result<()> {
    let profiles = open(store)?.list()?;
    info!("Found {} profiles in {}", profiles.len(), store.display());

    if json {
        let text = serde_json::to_string_pretty(&profiles)
            .with_context(|| "Failed to serialize profiles")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    if profiles.is_empty() {
        writeln!(out, "No profiles stored")?;
        return Ok(());
    }

    for profile in &profiles {
        writeln!(
            out,
            "{}  {} - {}",
            profile.id.dimmed(),
            profile.name.bold(),
            profile.parking_lot_name
        )?;
    }

    Ok(())
}

/// Validate and store a new profile, printing its id
pub fn add<W: Write>(store: &Path, profile: NewProfile, out: &mut W) -> Result<()> {
    let mut registry = open(store)?;
    let created = registry
        .create(profile, Utc::now())
        .with_context(|| "Failed to create profile")?;

    info!("Stored profile {} in {}", created.id, store.display());
    writeln!(out, "{}", created.id)?;
    Ok(())
}

/// Delete a profile by id
pub fn remove<W: Write>(store: &Path, id: &str, out: &mut W) -> Result<()> {
    let mut registry = open(store)?;
    registry
        .delete(id)
        .with_context(|| format!("Failed to delete profile {}", id))?;

    writeln!(out, "{} Deleted {}", "✓".green(), id)?;
    Ok(())
}
