use async_trait::async_trait;
use glcore::{
    error::IdentityError,
    identity::IdentityBackend,
    session::{
        AccessToken,
        UserProfile,
    },
};
use mockall::mock;

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityBackend for Identity {
        async fn current_user(
            &self,
            token: &AccessToken,
        ) -> Result<UserProfile, IdentityError>;
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: Some("The Octocat".to_string()),
        login: "octocat".to_string(),
        avatar: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
    }
}

/// An identity provider that accepts exactly one token, expected to be
/// looked up `times` times.
pub fn identity_accepting(token: &'static str, times: usize) -> MockIdentity {
    let mut identity = MockIdentity::new();
    identity.expect_current_user()
        .withf(move |t| t.as_str() == token)
        .times(times)
        .returning(|_| Ok(profile()));
    identity
}

/// An identity provider that fails every lookup with `error`.
pub fn identity_failing(error: IdentityError, times: usize) -> MockIdentity {
    let mut identity = MockIdentity::new();
    identity.expect_current_user()
        .times(times)
        .returning(move |_| Err(error.clone()));
    identity
}

/// An identity provider that must never be consulted.
pub fn identity_unused() -> MockIdentity {
    let mut identity = MockIdentity::new();
    identity.expect_current_user()
        .never();
    identity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn smoke_test_identity() -> anyhow::Result<()> {
        let identity = identity_accepting("abc123", 1);
        assert_eq!(identity.current_user(&AccessToken::new("abc123")).await?, profile());

        let identity = identity_failing(IdentityError::Status(401), 1);
        assert_eq!(
            identity.current_user(&AccessToken::new("abc123")).await,
            Err(IdentityError::Status(401)),
        );
        Ok(())
    }
}
