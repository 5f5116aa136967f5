use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The underlying store could not be reached (e.g. no window, or
    /// storage disabled by the user agent).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IdentityError {
    #[error("network error: {0}")]
    Network(String),
    #[error("identity provider responded with status {0}")]
    Status(u16),
    #[error("failed to decode identity provider response: {0}")]
    Decode(String),
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("navigation unavailable: {0}")]
    Unavailable(String),
    #[error("navigation to {url:?} failed: {reason}")]
    Failed {
        url: String,
        reason: String,
    },
}
