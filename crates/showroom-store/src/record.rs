//! # Saved Configuration Records
//!
//! What actually lands in storage: the snapshot plus enough metadata to list
//! and identify it.
//!
//! ## Snapshot Pattern
//! The record freezes the total at save time. When it is opened later the
//! snapshot is restored against the *current* catalog; if prices moved, the
//! fresh quote differs from `total` and the caller can tell the user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use showroom_core::{Catalog, Configurator, Money, Snapshot};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::MAX_NAME_LEN;

/// A configuration the user saved under a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfiguration {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// User-chosen name; the storage key.
    pub name: String,

    /// The selection itself.
    pub snapshot: Snapshot,

    /// Total at save time (frozen).
    pub total: Money,

    /// When the configuration was saved.
    pub saved_at: DateTime<Utc>,
}

impl SavedConfiguration {
    /// Captures the current state of a session under a name.
    pub fn capture(name: &str, session: &Configurator) -> StoreResult<Self> {
        validate_name(name)?;

        Ok(SavedConfiguration {
            id: Uuid::new_v4(),
            name: name.to_string(),
            snapshot: session.snapshot(),
            total: session.quote().total,
            saved_at: Utc::now(),
        })
    }

    /// Reopens the saved configuration as a session on `catalog`.
    ///
    /// Fails with `InvalidSnapshot` if the catalog no longer offers one of
    /// the saved selections.
    pub fn open(&self, catalog: Arc<Catalog>) -> StoreResult<Configurator> {
        Ok(Configurator::from_snapshot(catalog, &self.snapshot)?)
    }
}

/// Validates a configuration name.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_NAME_LEN` characters
/// - Letters, digits, hyphens and underscores only (names become file names)
pub fn validate_name(name: &str) -> StoreResult<()> {
    let invalid = |reason: &str| StoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is required"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid("name is too long"));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "must contain only letters, numbers, hyphens, and underscores",
        ));
    }

    Ok(())
}
