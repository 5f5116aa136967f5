use super::*;

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty token is carried around (and persisted) as is, but never
    /// counts towards a session.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

mod conversion {
    use std::fmt;
    use super::*;

    impl From<String> for AccessToken {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for AccessToken {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    impl fmt::Debug for AccessToken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.0.is_empty() {
                f.write_str("AccessToken(<empty>)")
            } else {
                f.write_str("AccessToken(<redacted>)")
            }
        }
    }
}

impl Session {
    /// Derive the session from whatever parts are currently available.
    pub fn from_parts(
        user: Option<UserProfile>,
        access_token: Option<AccessToken>,
    ) -> Option<Self> {
        match (user, access_token) {
            (Some(user), Some(access_token)) if !access_token.is_empty() => Some(Self {
                user,
                access_token,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: Some("The Octocat".to_string()),
            login: "octocat".to_string(),
            avatar: "https://avatars.githubusercontent.com/u/583231".to_string(),
        }
    }

    #[test]
    fn session_requires_both_parts() {
        assert_eq!(Session::from_parts(None, None), None);
        assert_eq!(Session::from_parts(Some(profile()), None), None);
        assert_eq!(Session::from_parts(None, Some("abc123".into())), None);
        assert_eq!(Session::from_parts(Some(profile()), Some("".into())), None);
        assert_eq!(
            Session::from_parts(Some(profile()), Some("abc123".into())),
            Some(Session {
                user: profile(),
                access_token: AccessToken::new("abc123"),
            }),
        );
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = AccessToken::new("gho_secret");
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
        assert_eq!(format!("{:?}", AccessToken::default()), "AccessToken(<empty>)");
        assert_eq!(token.as_str(), "gho_secret");
    }

    #[test]
    fn stored_forms() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&AccessToken::new("abc123"))?, r#""abc123""#);
        let user = UserProfile {
            name: None,
            .. profile()
        };
        assert_eq!(
            serde_json::to_string(&user)?,
            r#"{"name":null,"login":"octocat","avatar":"https://avatars.githubusercontent.com/u/583231"}"#,
        );
        let parsed: UserProfile = serde_json::from_str(
            r#"{"name":"The Octocat","login":"octocat","avatar":"https://avatars.githubusercontent.com/u/583231"}"#
        )?;
        assert_eq!(parsed, profile());
        Ok(())
    }
}
