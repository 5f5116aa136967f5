use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

pub const ACCESS_TOKEN_PARAM: &str = "access_token";
pub const FROM_APP_PARAM: &str = "from_app";

/// The URI scheme registered by the companion desktop application.
pub const APP_SCHEME: &str = "gitlight";

/// Where the resolution is taking place.  Only a browser has the storage
/// and history that a resolution acts upon; anywhere else (e.g. during
/// prerendering) resolution is skipped entirely.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub enum ExecutionContext {
    #[default]
    Browser,
    Server,
}

/// The requested location for a single navigation load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    path: String,
    query: Vec<(String, String)>,
}

pub trait Navigator {
    /// Replace the current history entry with `path`, without a reload.
    fn replace_history(&self, path: &str) -> Result<(), NavigationError>;
    /// Full page navigation to `url`, which may use a non-http scheme.
    fn assign(&self, url: &str) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn replace_history(&self, path: &str) -> Result<(), NavigationError> {
        (**self).replace_history(path)
    }

    fn assign(&self, url: &str) -> Result<(), NavigationError> {
        (**self).assign(url)
    }
}

mod impls;
pub use impls::handoff_uri;
