pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Settings for reaching the identity provider.
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "GITLIGHT_GITHUB_API_URL",
        env = "GITLIGHT_GITHUB_API_URL",
        default_value = DEFAULT_GITHUB_API_URL,
    ))]
    pub github_api_url: String,
    // browsers supply their own and refuse to have it overridden
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "GITLIGHT_USER_AGENT",
        env = "GITLIGHT_USER_AGENT",
    ))]
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            user_agent: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn github_api_url(mut self, val: impl Into<String>) -> Self {
        self.github_api_url = val.into();
        self
    }

    pub fn user_agent(mut self, val: impl Into<String>) -> Self {
        self.user_agent = Some(val.into());
        self
    }
}
