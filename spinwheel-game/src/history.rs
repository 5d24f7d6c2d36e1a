//! Capped, newest-first log of completed spins.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{HISTORY_CAP, HISTORY_STORAGE_KEY};
use crate::storage::{KeyValueStore, read_or_none};

/// One completed spin as persisted under [`HISTORY_STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinHistoryEntry {
    pub id: u64,
    pub result_name: String,
    /// ISO-8601 completion instant (UTC, millisecond precision).
    pub timestamp: String,
}

/// Format an instant the way `Date.prototype.toISOString` does.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Id for the next record: one past the largest id present, or 1.
#[must_use]
pub fn next_id(entries: &[SpinHistoryEntry]) -> u64 {
    entries
        .iter()
        .map(|e| e.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Prepend a record and drop anything past [`HISTORY_CAP`].
#[must_use]
pub fn push_capped(
    mut entries: Vec<SpinHistoryEntry>,
    result_name: &str,
    timestamp: String,
) -> Vec<SpinHistoryEntry> {
    let entry = SpinHistoryEntry {
        id: next_id(&entries),
        result_name: result_name.to_string(),
        timestamp,
    };
    entries.insert(0, entry);
    entries.truncate(HISTORY_CAP);
    entries
}

/// History facade over a key-value store. Failures never reach the caller.
#[derive(Debug, Clone)]
pub struct HistoryLog<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryLog<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored records, or an empty log when absent or corrupt.
    #[must_use]
    pub fn load(&self) -> Vec<SpinHistoryEntry> {
        let Some(raw) = read_or_none(&self.store, HISTORY_STORAGE_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding unreadable spin history: {err}");
            Vec::new()
        })
    }

    /// Record a result completed now.
    pub fn append(&self, result_name: &str) -> SpinHistoryEntry {
        self.append_at(result_name, Utc::now())
    }

    /// Record a result completed at `at` and return the stored record.
    pub fn append_at(&self, result_name: &str, at: DateTime<Utc>) -> SpinHistoryEntry {
        let updated = push_capped(self.load(), result_name, iso_timestamp(at));
        let newest = updated[0].clone();
        match serde_json::to_string(&updated) {
            Ok(json) => {
                if let Err(err) = self.store.set(HISTORY_STORAGE_KEY, &json) {
                    log::warn!("failed to save spin history: {err}");
                }
            }
            Err(err) => log::warn!("failed to encode spin history: {err}"),
        }
        newest
    }

    /// Drop every record. Confirmation is the caller's job.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(HISTORY_STORAGE_KEY) {
            log::warn!("failed to clear spin history: {err}");
        }
    }
}
