use async_trait::async_trait;
use glcore::{
    error::IdentityError,
    identity::{
        IdentityBackend,
        ProviderUser,
    },
    session::{
        AccessToken,
        UserProfile,
    },
};
use reqwest::header::{
    ACCEPT,
    USER_AGENT,
};

use crate::config::Config;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Identity backend for the GitHub REST API.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
    user_agent: Option<String>,
}

impl GithubClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn user_url(&self) -> String {
        format!("{}/user", self.api_url)
    }
}

fn identity_error(e: reqwest::Error) -> IdentityError {
    if let Some(status) = e.status() {
        IdentityError::Status(status.as_u16())
    } else if e.is_decode() {
        IdentityError::Decode(e.to_string())
    } else {
        IdentityError::Network(e.to_string())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityBackend for GithubClient {
    async fn current_user(
        &self,
        token: &AccessToken,
    ) -> Result<UserProfile, IdentityError> {
        let url = self.user_url();
        log::trace!("requesting {url}");
        let mut request = self.client.get(&url)
            .bearer_auth(token.as_str())
            .header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(user_agent) = self.user_agent.as_deref() {
            request = request.header(USER_AGENT, user_agent);
        }
        let user = request.send()
            .await
            .map_err(identity_error)?
            .error_for_status()
            .map_err(identity_error)?
            .json::<ProviderUser>()
            .await
            .map_err(identity_error)?;
        log::debug!("identity provider resolved login {:?}", user.login);
        Ok(user.into())
    }
}
