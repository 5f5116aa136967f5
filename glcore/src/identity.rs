use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::IdentityError,
    session::{
        AccessToken,
        UserProfile,
    },
};

/// The subset of the identity provider's `GET /user` response that gets
/// retained; every other field in the response is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProviderUser {
    pub name: Option<String>,
    pub login: String,
    pub avatar_url: String,
}

impl From<ProviderUser> for UserProfile {
    fn from(value: ProviderUser) -> Self {
        let ProviderUser { name, login, avatar_url } = value;
        Self {
            name,
            login,
            avatar: avatar_url,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityBackend {
    async fn current_user(
        &self,
        token: &AccessToken,
    ) -> Result<UserProfile, IdentityError>;
}
