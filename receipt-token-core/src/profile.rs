//! Parking profiles
//!
//! A profile holds the company and lot details that repeat across receipts
//! issued for the same parking lot. Profiles live in a key-value store under
//! the [`PROFILE_KEY_PREFIX`] prefix; the store itself is external and only
//! seen through the [`KvStore`] trait.

use crate::constants::PROFILE_KEY_PREFIX;
use crate::error::ProfileError;
use crate::types::ReceiptData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A stored parking profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingProfile {
    /// Store key, `parking_profile:<unix-ms>`
    pub id: String,

    /// Label shown when picking a profile
    pub name: String,

    /// Operating company
    pub company_name: String,

    /// Parking lot name
    pub parking_lot_name: String,

    /// Contact phone number
    #[serde(default)]
    pub phone_number: String,

    /// Invoice registration number
    #[serde(default)]
    pub registration_number: String,

    /// When the profile was stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ParkingProfile {
    /// Copy the company and lot details into a receipt
    ///
    /// Amounts, dates, management number and recipient are left alone.
    pub fn apply_to(&self, receipt: &mut ReceiptData) {
        receipt.company_name.clone_from(&self.company_name);
        receipt.parking_lot_name.clone_from(&self.parking_lot_name);
        receipt.phone_number.clone_from(&self.phone_number);
        receipt.registration_number.clone_from(&self.registration_number);
    }
}

/// Profile fields supplied by the user before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProfile {
    /// Label shown when picking a profile (required)
    pub name: String,
    /// Operating company (required)
    pub company_name: String,
    /// Parking lot name (required)
    pub parking_lot_name: String,
    /// Contact phone number
    pub phone_number: String,
    /// Invoice registration number
    pub registration_number: String,
}

impl NewProfile {
    /// Check that the required fields are filled in
    pub fn validate(&self) -> Result<(), ProfileError> {
        let required = [
            ("name", &self.name),
            ("companyName", &self.company_name),
            ("parkingLotName", &self.parking_lot_name),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField(field));
            }
        }

        Ok(())
    }

    fn into_profile(self, id: String, created_at: DateTime<Utc>) -> ParkingProfile {
        ParkingProfile {
            id,
            name: self.name,
            company_name: self.company_name,
            parking_lot_name: self.parking_lot_name,
            phone_number: self.phone_number,
            registration_number: self.registration_number,
            created_at: Some(created_at),
        }
    }
}

/// Key-value backend holding JSON values
pub trait KvStore {
    /// All entries whose key starts with `prefix`, in key order
    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, ProfileError>;

    /// Value stored under `key`
    fn get(&self, key: &str) -> Result<Option<Value>, ProfileError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: Value) -> Result<(), ProfileError>;

    /// Remove `key`, returning whether it existed
    fn del(&mut self, key: &str) -> Result<bool, ProfileError>;
}

/// In-memory [`KvStore`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing entries
    pub fn from_entries(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }

    /// Borrow the raw entries
    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, ProfileError> {
        Ok(self
            .entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn get(&self, key: &str) -> Result<Option<Value>, ProfileError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ProfileError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<bool, ProfileError> {
        Ok(self.entries.remove(key).is_some())
    }
}

/// Profile operations on top of a [`KvStore`]
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry<S> {
    store: S,
}

impl<S: KvStore> ProfileRegistry<S> {
    /// Create a registry over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// All stored profiles, oldest first
    ///
    /// Entries under the profile prefix that do not parse as profiles are
    /// skipped.
    pub fn list(&self) -> Result<Vec<ParkingProfile>, ProfileError> {
        let entries = self.store.get_by_prefix(PROFILE_KEY_PREFIX)?;

        let profiles = entries
            .into_iter()
            .filter_map(|(_key, value)| match serde_json::from_value(value) {
                Ok(profile) => Some(profile),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    warn!("Skipping malformed profile {}: {}", _key, _e);
                    None
                }
            })
            .collect();

        Ok(profiles)
    }

    /// Look up a profile by id
    ///
    /// The id may be given with or without the key prefix.
    pub fn get(&self, id: &str) -> Result<ParkingProfile, ProfileError> {
        let key = profile_key(id);
        let value = self
            .store
            .get(&key)?
            .ok_or_else(|| ProfileError::NotFound(key.clone()))?;

        serde_json::from_value(value)
            .map_err(|e| ProfileError::Store(format!("{}: {}", key, e)))
    }

    /// Validate and store a new profile
    ///
    /// The id is derived from `now` in milliseconds; a `-n` suffix is added
    /// if that key is already taken.
    pub fn create(
        &mut self,
        profile: NewProfile,
        now: DateTime<Utc>,
    ) -> Result<ParkingProfile, ProfileError> {
        profile.validate()?;

        let base = format!("{}{}", PROFILE_KEY_PREFIX, now.timestamp_millis());
        let mut id = base.clone();
        let mut suffix = 1u32;
        while self.store.get(&id)?.is_some() {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        let stored = profile.into_profile(id, now);
        let value =
            serde_json::to_value(&stored).map_err(|e| ProfileError::Store(e.to_string()))?;
        self.store.set(&stored.id, value)?;

        #[cfg(feature = "logging")]
        debug!("Created profile {} ({})", stored.id, stored.name);

        Ok(stored)
    }

    /// Remove a profile
    pub fn delete(&mut self, id: &str) -> Result<(), ProfileError> {
        let key = profile_key(id);
        if !self.store.del(&key)? {
            return Err(ProfileError::NotFound(key));
        }

        #[cfg(feature = "logging")]
        debug!("Deleted profile {}", key);

        Ok(())
    }
}

fn profile_key(id: &str) -> String {
    let id = id.trim();
    if id.starts_with(PROFILE_KEY_PREFIX) {
        id.to_string()
    } else {
        format!("{}{}", PROFILE_KEY_PREFIX, id)
    }
}
