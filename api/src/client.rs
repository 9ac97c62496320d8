use badge::MetricsBundle;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::aggregate::{aggregate, ActivityTotals};
use crate::config::FetchConfig;
use crate::error::ApiError;
use crate::model::{Repository, SearchTotal, UserProfile};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Thin GitHub REST client scoped to one user.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl GitHubClient {
    pub fn new(config: FetchConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Profile, repositories and activity totals, folded into one bundle.
    pub async fn fetch_metrics(&self) -> Result<MetricsBundle, ApiError> {
        let (profile, repos, totals) = futures::try_join!(
            self.fetch_profile(),
            self.fetch_repositories(),
            self.fetch_activity()
        )?;
        info!(
            user = %self.config.username,
            repos = repos.len(),
            "fetched profile data"
        );
        aggregate(&profile, &repos, totals, OffsetDateTime::now_utc())
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.get(&format!("/users/{}", self.config.username)).await
    }

    /// Walks `?page=N` until GitHub returns an empty page.
    pub async fn fetch_repositories(&self) -> Result<Vec<Repository>, ApiError> {
        let mut repos = Vec::new();
        let mut page = 1u32;
        loop {
            let path = format!(
                "/users/{}/repos?per_page={}&page={page}",
                self.config.username, self.config.per_page
            );
            let chunk: Vec<Repository> = self.get(&path).await?;
            debug!(page, count = chunk.len(), "fetched repository page");
            if chunk.is_empty() {
                break;
            }
            repos.extend(chunk);
            page += 1;
        }
        Ok(repos)
    }

    /// Search totals for commits, pull requests, issues and reviews.
    pub async fn fetch_activity(&self) -> Result<ActivityTotals, ApiError> {
        let user = self.config.username.as_str();
        let authored = format!("author:{user}");
        let authored_prs = format!("author:{user}+type:pr");
        let authored_issues = format!("author:{user}+type:issue");
        let reviewed_prs = format!("reviewed-by:{user}+type:pr");

        let (commits, pull_requests, issues, reviews) = futures::try_join!(
            self.search_total("commits", &authored),
            self.search_total("issues", &authored_prs),
            self.search_total("issues", &authored_issues),
            self.search_total("issues", &reviewed_prs)
        )?;
        Ok(ActivityTotals {
            commits,
            pull_requests,
            issues,
            reviews,
        })
    }

    async fn search_total(&self, endpoint: &str, query: &str) -> Result<u64, ApiError> {
        let total: SearchTotal = self
            .get(&format!("/search/{endpoint}?q={query}&per_page=1"))
            .await?;
        debug!(endpoint, query, total = total.total_count, "search total");
        Ok(total.total_count)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        let mut request = self.http.get(&url).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
