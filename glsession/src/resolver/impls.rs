use glcore::{
    error::{
        IdentityError,
        StorageError,
    },
    navigation::{
        handoff_uri,
        Navigation,
        ACCESS_TOKEN_PARAM,
        DASHBOARD_PATH,
        FROM_APP_PARAM,
        LOGIN_PATH,
    },
    session::{
        AccessToken,
        UserProfile,
    },
    storage::{
        JsonStore,
        ACCESS_TOKEN_KEY,
        USER_KEY,
    },
};
use serde::de::DeserializeOwned;
use super::*;

impl Redirect {
    pub fn found(location: &'static str) -> Self {
        Self {
            status: StatusCode::FOUND,
            location,
        }
    }
}

impl Outcome {
    /// The redirect policy: the dashboard requires a session, and a
    /// session sends everything else to the dashboard.
    pub fn decide(navigation: &Navigation, session: Option<Session>) -> Self {
        match (navigation.is_dashboard(), session) {
            (true, None) => Self::Redirect(Redirect::found(LOGIN_PATH)),
            (false, Some(_)) => Self::Redirect(Redirect::found(DASHBOARD_PATH)),
            (_, session) => Self::Render(session),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Render(session) => session.as_ref(),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }
}

mod display {
    use std::fmt::{Display, Formatter, Result};
    use super::*;

    impl Display for Redirect {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "{} {}", self.status, self.location)
        }
    }

    impl Display for Outcome {
        fn fmt(&self, f: &mut Formatter) -> Result {
            match self {
                Self::Skipped => f.write_str("skipped"),
                Self::Render(None) => f.write_str("render without session"),
                Self::Render(Some(session)) => {
                    write!(f, "render with session for {}", session.user.login)
                }
                Self::Redirect(redirect) => write!(f, "redirect {redirect}"),
            }
        }
    }
}

impl Resolver {
    pub fn execution_context(&self) -> ExecutionContext {
        self.context
    }

    /// A single resolution pass for the navigation load.
    ///
    /// The stored token may be replaced by one carried by the URL, in
    /// which case the query string is stripped from the visible location
    /// (and the token is also handed off to the companion application
    /// when requested).  A missing profile is looked up with whichever
    /// token is available; a failed lookup simply leaves it missing.
    pub async fn resolve(&self, navigation: &Navigation) -> Result<Outcome, Error> {
        if self.context == ExecutionContext::Server {
            log::trace!("not in a browser; skipping resolution for {}", navigation.path());
            return Ok(Outcome::Skipped);
        }

        let mut user = self.load_or_discard::<UserProfile>(USER_KEY)?;
        let mut access_token = self.load_or_discard::<AccessToken>(ACCESS_TOKEN_KEY)?;

        if let Some(token) = navigation.param(ACCESS_TOKEN_PARAM) {
            let token = AccessToken::new(token);
            log::debug!("access token received via url");
            self.store.store(ACCESS_TOKEN_KEY, &token)?;
            if navigation.has_param(FROM_APP_PARAM) {
                log::debug!("handing off access token to companion application");
                // the companion application may not be installed
                if let Err(e) = self.navigator.assign(&handoff_uri(&token)) {
                    log::warn!("handoff to companion application failed: {e}");
                }
            }
            self.navigator.replace_history(DASHBOARD_PATH)?;
            access_token = Some(token);
        }

        let access_token = access_token.filter(|token| !token.is_empty());
        if user.is_none() {
            if let Some(token) = access_token.as_ref() {
                user = match self.lookup_profile(token).await {
                    Ok(profile) => {
                        if let Err(e) = self.store.store(USER_KEY, &profile) {
                            log::warn!("failed to persist user profile: {e}");
                        }
                        Some(profile)
                    }
                    Err(e) => {
                        log::warn!("unable to resolve user profile: {e}");
                        None
                    }
                };
            }
        }

        let session = Session::from_parts(user, access_token);
        let outcome = Outcome::decide(navigation, session);
        log::trace!("resolved {} to {outcome}", navigation.path());
        Ok(outcome)
    }

    /// Look up the profile for the token with the identity provider.
    pub async fn lookup_profile(
        &self,
        token: &AccessToken,
    ) -> Result<UserProfile, IdentityError> {
        self.identity.current_user(token).await
    }

    /// The session as currently stored, without consulting the identity
    /// provider or touching the location.
    pub fn current_session(&self) -> Result<Option<Session>, Error> {
        if self.context == ExecutionContext::Server {
            return Ok(None);
        }
        Ok(Session::from_parts(
            self.load_or_discard(USER_KEY)?,
            self.load_or_discard(ACCESS_TOKEN_KEY)?,
        ))
    }

    pub fn sign_out(&self) -> Result<(), Error> {
        log::debug!("clearing stored session");
        self.store.remove(USER_KEY)?;
        self.store.remove(ACCESS_TOKEN_KEY)?;
        Ok(())
    }

    // Undecodable values are treated as absent; they get overwritten the
    // next time a value is stored under the key.
    fn load_or_discard<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.store.load(key) {
            Ok(value) => Ok(value),
            Err(StorageError::Serde(e)) => {
                log::warn!("discarding undecodable value stored under {key:?}: {e}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
