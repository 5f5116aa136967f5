use glcore::{
    identity::IdentityBackend,
    navigation::{
        ExecutionContext,
        Navigator,
    },
    session::Session,
    storage::KeyValueStore,
};
use http::StatusCode;

use crate::error::Error;

#[derive(Default)]
pub struct Builder {
    store: Option<Box<dyn KeyValueStore>>,
    identity: Option<Box<dyn IdentityBackend>>,
    navigator: Option<Box<dyn Navigator>>,
    context: ExecutionContext,
}

/// Resolves the session for a navigation load and decides where the
/// browser should end up.
pub struct Resolver {
    store: Box<dyn KeyValueStore>,
    identity: Box<dyn IdentityBackend>,
    navigator: Box<dyn Navigator>,
    context: ExecutionContext,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Redirect {
    pub status: StatusCode,
    pub location: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing was resolved as there is no browser to act upon.
    Skipped,
    /// Proceed with rendering the requested path.
    Render(Option<Session>),
    Redirect(Redirect),
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, val: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(val));
        self
    }

    pub fn identity(mut self, val: impl IdentityBackend + 'static) -> Self {
        self.identity = Some(Box::new(val));
        self
    }

    pub fn navigator(mut self, val: impl Navigator + 'static) -> Self {
        self.navigator = Some(Box::new(val));
        self
    }

    pub fn context(mut self, val: ExecutionContext) -> Self {
        self.context = val;
        self
    }

    pub fn build(self) -> Result<Resolver, Error> {
        Ok(Resolver {
            store: self.store
                .ok_or(Error::Misconfiguration("store"))?,
            identity: self.identity
                .ok_or(Error::Misconfiguration("identity"))?,
            navigator: self.navigator
                .ok_or(Error::Misconfiguration("navigator"))?,
            context: self.context,
        })
    }
}

mod impls;
