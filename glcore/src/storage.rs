use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::error::StorageError;

pub const USER_KEY: &str = "user";
pub const ACCESS_TOKEN_KEY: &str = "access-token";

/// Raw string key-value storage, as offered by `localStorage` and the
/// like.  Implementations use interior mutability where needed as the
/// store is shared by reference.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed access on top of a [`KeyValueStore`], with values kept as JSON
/// text.
pub trait JsonStore: KeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get(key)?
            .map(|raw| {
                log::trace!("decoding stored value for key {key:?}");
                serde_json::from_str(&raw)
            })
            .transpose()
            .map_err(StorageError::from)
    }

    fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        log::trace!("storing value for key {key:?}");
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> JsonStore for S {}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
