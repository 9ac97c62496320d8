//! Response shapes for the handful of GitHub endpoints we read. Only the
//! fields that feed a trophy are kept.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Envelope of the search endpoints; only the total is used.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SearchTotal {
    pub total_count: u64,
}
