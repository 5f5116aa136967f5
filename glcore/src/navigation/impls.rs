use crate::session::AccessToken;
use super::*;

impl Navigation {
    /// Build from a pathname and a query string; the query string may or
    /// may not carry its leading `?`.
    pub fn new(path: impl Into<String>, search: &str) -> Self {
        let mut path = path.into();
        if path.is_empty() {
            path.push('/');
        }
        let search = search.strip_prefix('?').unwrap_or(search);
        let query = serde_urlencoded::from_str::<Vec<(String, String)>>(search)
            .unwrap_or_else(|e| {
                log::warn!("discarding unparseable query string {search:?}: {e}");
                Vec::new()
            });
        Self { path, query }
    }

    /// Build from either an absolute URL or a path with an optional query
    /// string; any fragment is dropped.
    pub fn from_url(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(head, _)| head);
        let url = match url.split_once("://") {
            Some((_, rest)) => rest.find(['/', '?']).map_or("", |i| &rest[i..]),
            None => url,
        };
        match url.split_once('?') {
            Some((path, search)) => Self::new(path, search),
            None => Self::new(url, ""),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The value of the first occurrence of the named query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    pub fn is_dashboard(&self) -> bool {
        self.path == DASHBOARD_PATH
    }
}

/// The URI that hands the token off to the companion application; the
/// application parses this exact form so the token goes in verbatim.
pub fn handoff_uri(token: &AccessToken) -> String {
    format!("{APP_SCHEME}://access_token={}", token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_path_and_search() {
        let nav = Navigation::new("/dashboard", "?access_token=abc123&from_app=1");
        assert_eq!(nav.path(), "/dashboard");
        assert!(nav.is_dashboard());
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("abc123"));
        assert_eq!(nav.param(FROM_APP_PARAM), Some("1"));

        let nav = Navigation::new("/", "access_token=abc123");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("abc123"));
        assert!(!nav.has_param(FROM_APP_PARAM));
        assert!(!nav.is_dashboard());
    }

    #[test]
    fn presence_flag() {
        let nav = Navigation::new("/", "access_token=abc123&from_app");
        assert!(nav.has_param(FROM_APP_PARAM));
        assert_eq!(nav.param(FROM_APP_PARAM), Some(""));
        let nav = Navigation::new("/", "from_app=");
        assert!(nav.has_param(FROM_APP_PARAM));
    }

    #[test]
    fn first_occurrence_wins() {
        let nav = Navigation::new("/", "access_token=first&access_token=second");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("first"));
        assert_eq!(nav.query().len(), 2);
    }

    #[test]
    fn percent_decoding() {
        let nav = Navigation::new("/", "access_token=gho%2Fabc+def");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("gho/abc def"));
    }

    #[test]
    fn from_url() {
        let nav = Navigation::from_url("https://gitlight.example/dashboard?access_token=abc123#top");
        assert_eq!(nav.path(), "/dashboard");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("abc123"));

        let nav = Navigation::from_url("https://gitlight.example");
        assert_eq!(nav.path(), "/");
        assert!(nav.query().is_empty());

        let nav = Navigation::from_url("https://gitlight.example?access_token=abc123");
        assert_eq!(nav.path(), "/");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("abc123"));

        let nav = Navigation::from_url("/login");
        assert_eq!(nav.path(), "/login");
        assert!(nav.query().is_empty());

        let nav = Navigation::from_url("?access_token=abc123");
        assert_eq!(nav.path(), "/");
        assert_eq!(nav.param(ACCESS_TOKEN_PARAM), Some("abc123"));
    }

    #[test]
    fn dashboard_match_is_exact() {
        assert!(!Navigation::from_url("/dashboard/").is_dashboard());
        assert!(!Navigation::from_url("/Dashboard").is_dashboard());
        assert!(Navigation::from_url("/dashboard?x=1").is_dashboard());
    }

    #[test]
    fn handoff() {
        assert_eq!(
            handoff_uri(&AccessToken::new("abc123")),
            "gitlight://access_token=abc123",
        );
    }
}
