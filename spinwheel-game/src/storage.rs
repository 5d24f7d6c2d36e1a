//! Key-value storage abstraction backing the configuration and history.
//!
//! Browsers provide `localStorage`; tests and native tools use [`MemoryStore`].
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Failures surfaced by platform stores.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Trait for abstracting string key-value persistence.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete the value stored under `key`; missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

impl<S> KeyValueStore for Rc<S>
where
    S: KeyValueStore + ?Sized,
{
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

impl<S> KeyValueStore for &S
where
    S: KeyValueStore + ?Sized,
{
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with raw values.
    #[must_use]
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Rc::new(RefCell::new(map)),
        }
    }

    /// Raw value under `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read a key, logging and swallowing store failures.
pub(crate) fn read_or_none<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to read `{key}` from storage: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(alias.get("k").unwrap().as_deref(), Some("v"));
        alias.remove("k").unwrap();
        assert!(!store.contains("k"));
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn rc_and_ref_forward_to_inner_store() {
        let store = Rc::new(MemoryStore::with_values([("a", "1")]));
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        let by_ref = &*store;
        KeyValueStore::set(&by_ref, "b", "2").unwrap();
        assert_eq!(store.raw("b").as_deref(), Some("2"));
    }
}
