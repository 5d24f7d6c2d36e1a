//! Persisted wheel configuration with a built-in fallback.
use crate::constants::CONFIG_STORAGE_KEY;
use crate::entry::{WheelConfiguration, WheelEntry};
use crate::storage::{KeyValueStore, read_or_none};

/// Loads and saves the configuration under [`CONFIG_STORAGE_KEY`].
///
/// Neither operation fails: unreadable data falls back to
/// [`WheelConfiguration::builtin`] and write failures are logged.
#[derive(Debug, Clone)]
pub struct ConfigStore<S> {
    store: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted configuration, repaired entry by entry, or the built-in set.
    #[must_use]
    pub fn load(&self) -> WheelConfiguration {
        let Some(raw) = read_or_none(&self.store, CONFIG_STORAGE_KEY) else {
            return WheelConfiguration::builtin();
        };
        WheelConfiguration::from_json_lenient(&raw).unwrap_or_else(|| {
            log::warn!("stored wheel configuration is not a JSON array; using defaults");
            WheelConfiguration::builtin()
        })
    }

    /// Replace the stored configuration with `entries`.
    ///
    /// Weights are clamped; names are stored as given. Callers filter out
    /// blank names first (see [`crate::editor::WheelEditor::validate`]).
    pub fn save(&self, entries: &[WheelEntry]) {
        let normalized: Vec<WheelEntry> = entries
            .iter()
            .map(|e| WheelEntry::new(e.name.clone(), e.weight()))
            .collect();
        let json = match serde_json::to_string(&normalized) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to encode wheel configuration: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(CONFIG_STORAGE_KEY, &json) {
            log::warn!("failed to save wheel configuration: {err}");
        }
    }
}
