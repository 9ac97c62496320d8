/// Connection settings for [`crate::GitHubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub username: String,
    /// Sent as a bearer token when present.
    pub token: Option<String>,
    pub api_base: String,
    pub per_page: u32,
    pub user_agent: String,
}

impl FetchConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.github.com";

    /// GitHub caps list endpoints at 100 entries per page.
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: None,
            api_base: Self::DEFAULT_API_BASE.to_string(),
            per_page: Self::MAX_PER_PAGE,
            user_agent: format!("trophycase/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
