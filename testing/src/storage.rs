use glcore::{
    error::StorageError,
    storage::KeyValueStore,
};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::Rc,
};

#[derive(Default)]
struct Inner {
    entries: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
    reads: usize,
}

/// An in-memory store; clones share the same underlying entries so a test
/// may hand one to the resolver and inspect another.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<Inner>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.0.borrow_mut().entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn entries(&self) -> BTreeMap<String, String> {
        self.0.borrow().entries.clone()
    }

    /// Every `set` issued so far, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.0.borrow().writes.clone()
    }

    pub fn reads(&self) -> usize {
        self.0.borrow().reads
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut inner = self.0.borrow_mut();
        inner.reads += 1;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.0.borrow_mut();
        inner.writes.push((key.to_string(), value.to_string()));
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().entries.remove(key);
        Ok(())
    }
}

/// A store that reads from the wrapped store but refuses every write.
#[derive(Clone)]
pub struct ReadOnlyStore(pub MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("read only".to_string()))
    }
}

/// A store with nothing behind it.
#[derive(Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("no storage".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no storage".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no storage".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_clones() -> anyhow::Result<()> {
        let store = MemoryStore::new()
            .with_entry("user", "{}");
        let other = store.clone();
        other.set("access-token", "\"abc123\"")?;
        assert_eq!(store.get("access-token")?.as_deref(), Some("\"abc123\""));
        assert_eq!(store.writes(), vec![
            ("access-token".to_string(), "\"abc123\"".to_string()),
        ]);
        assert_eq!(store.reads(), 1);
        store.remove("user")?;
        assert_eq!(other.entries().len(), 1);
        Ok(())
    }
}
