use glcore::{
    error::{
        NavigationError,
        StorageError,
    },
    navigation::{
        ExecutionContext,
        Navigator,
    },
    storage::KeyValueStore,
};
use js_sys::Object;
use wasm_bindgen::JsValue;
use web_sys::{
    Storage,
    Window,
};

fn describe(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn window() -> Option<Window> {
    // the bindings are only callable from within a wasm module
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

/// `Browser` only when there is a window to act upon.
pub fn execution_context() -> ExecutionContext {
    match window() {
        Some(_) => ExecutionContext::Browser,
        None => ExecutionContext::Server,
    }
}

/// The window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Backend(describe(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(describe(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(describe(e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(describe(e)))
    }
}

/// The window's history and location.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn window(&self) -> Result<Window, NavigationError> {
        window().ok_or_else(|| NavigationError::Unavailable("no window".to_string()))
    }
}

impl Navigator for BrowserNavigator {
    fn replace_history(&self, path: &str) -> Result<(), NavigationError> {
        self.window()?
            .history()
            .and_then(|history| history.replace_state_with_url(&Object::new(), "", Some(path)))
            .map_err(|e| NavigationError::Failed {
                url: path.to_string(),
                reason: describe(e),
            })
    }

    fn assign(&self, url: &str) -> Result<(), NavigationError> {
        self.window()?
            .location()
            .set_href(url)
            .map_err(|e| NavigationError::Failed {
                url: url.to_string(),
                reason: describe(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_browser() {
        assert_eq!(execution_context(), ExecutionContext::Server);
        assert!(matches!(LocalStore.get("user"), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            BrowserNavigator.replace_history("/dashboard"),
            Err(NavigationError::Unavailable(_)),
        ));
        assert!(matches!(
            BrowserNavigator.assign("gitlight://access_token=abc123"),
            Err(NavigationError::Unavailable(_)),
        ));
    }
}
