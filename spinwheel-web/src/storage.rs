use spinwheel_game::{ConfigStore, HistoryLog, KeyValueStore, SpinWheel, StorageError};
#[cfg(not(target_arch = "wasm32"))]
use spinwheel_game::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::new();
}

/// `localStorage`-backed store. Off-wasm (server rendering, native tests)
/// every handle on a thread shares one in-memory map instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(not(target_arch = "wasm32"))]
fn with_fallback<T>(f: impl FnOnce(&MemoryStore) -> Result<T, std::convert::Infallible>) -> T {
    match FALLBACK.with(f) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl KeyValueStore for BrowserStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(with_fallback(|store| store.get(key)))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            with_fallback(|store| store.set(key, value));
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Backend(crate::dom::js_error_message(&e)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            with_fallback(|store| store.remove(key));
            Ok(())
        }
    }
}

/// Wheel services bound to browser storage.
#[must_use]
pub fn browser_wheel() -> SpinWheel<BrowserStore> {
    SpinWheel::new(BrowserStore)
}

#[must_use]
pub const fn config_store() -> ConfigStore<BrowserStore> {
    ConfigStore::new(BrowserStore)
}

#[must_use]
pub const fn history_log() -> HistoryLog<BrowserStore> {
    HistoryLog::new(BrowserStore)
}
