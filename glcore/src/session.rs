use serde::{Deserialize, Serialize};

/// The opaque credential authorizing calls to the identity provider.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub login: String,
    pub avatar: String,
}

/// A resolved session; only ever constructed when both parts are present.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub user: UserProfile,
    pub access_token: AccessToken,
}

mod impls;
