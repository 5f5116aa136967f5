use glcore::error::{
    NavigationError,
    StorageError,
};
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("Misconfiguration: missing {0}")]
    Misconfiguration(&'static str),
}
