use glcore::{
    error::NavigationError,
    navigation::Navigator,
};
use std::{
    cell::RefCell,
    rc::Rc,
};

#[derive(Clone, Debug, PartialEq)]
pub enum NavigationEvent {
    ReplaceHistory(String),
    Assign(String),
}

/// Records navigation side effects instead of performing them; clones
/// share the same record.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    events: Rc<RefCell<Vec<NavigationEvent>>>,
    refuse_assign: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator where nothing handles full page navigation, such as a
    /// custom scheme with no registered application.  Refused navigations
    /// are not recorded.
    pub fn refusing_assign() -> Self {
        Self {
            refuse_assign: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.borrow().clone()
    }

    pub fn assigned(&self) -> Vec<String> {
        self.events.borrow()
            .iter()
            .filter_map(|event| match event {
                NavigationEvent::Assign(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn replace_history(&self, path: &str) -> Result<(), NavigationError> {
        self.events.borrow_mut().push(NavigationEvent::ReplaceHistory(path.to_string()));
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<(), NavigationError> {
        if self.refuse_assign {
            return Err(NavigationError::Failed {
                url: url.to_string(),
                reason: "no handler for scheme".to_string(),
            });
        }
        self.events.borrow_mut().push(NavigationEvent::Assign(url.to_string()));
        Ok(())
    }
}
