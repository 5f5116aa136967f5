use glsession::config::Config;

/// Where the sign in button sends the user; the endpoint starts the OAuth
/// flow which eventually returns with `?access_token=`.
pub const DEFAULT_LOGIN_URL: &str = "/api/login";

// Values are fixed when the bundle is built.
pub fn config() -> Config {
    match option_env!("GITLIGHT_GITHUB_API_URL") {
        Some(url) => Config::new().github_api_url(url),
        None => Config::new(),
    }
}

pub fn login_url() -> &'static str {
    option_env!("GITLIGHT_LOGIN_URL").unwrap_or(DEFAULT_LOGIN_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_time_values() {
        let config = config();
        assert!(config.github_api_url.starts_with("http"));
        assert_eq!(config.user_agent, None);
        assert!(!login_url().is_empty());
    }
}
