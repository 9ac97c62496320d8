//! Folding raw API responses into a [`MetricsBundle`].
//!
//! Pure functions; the current time is passed in so account age stays
//! reproducible under test.

use std::collections::BTreeMap;

use badge::core::metrics::MAX_TOP_LANGUAGES;
use badge::MetricsBundle;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::error::ApiError;
use crate::model::{Repository, UserProfile};

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Totals taken from the search endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTotals {
    pub commits: u64,
    pub pull_requests: u64,
    pub issues: u64,
    pub reviews: u64,
}

pub fn aggregate(
    profile: &UserProfile,
    repos: &[Repository],
    totals: ActivityTotals,
    now: OffsetDateTime,
) -> Result<MetricsBundle, ApiError> {
    let total_stars = repos
        .iter()
        .map(|r| r.stargazers_count.unwrap_or(0))
        .fold(0u64, u64::saturating_add);
    let total_forks = repos
        .iter()
        .map(|r| r.forks_count.unwrap_or(0))
        .fold(0u64, u64::saturating_add);

    let mut builder = MetricsBundle::builder(profile.login.as_str())
        .account_age_years(account_age_years(&profile.created_at, now)?)
        .public_repos(profile.public_repos)
        .followers(profile.followers)
        .following(profile.following)
        .stars(total_stars)
        .forks(total_forks)
        .commits(totals.commits)
        .pull_requests(totals.pull_requests)
        .issues(totals.issues)
        .reviews(totals.reviews)
        .top_languages(top_languages(repos));
    if let Some(name) = &profile.name {
        builder = builder.display_name(name.as_str());
    }

    Ok(builder.build()?)
}

/// Most common repository languages, most frequent first. Ties go to the
/// alphabetically earlier name so repeated runs agree.
pub fn top_languages(repos: &[Repository]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        *counts.entry(language).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_TOP_LANGUAGES)
        .map(|(language, _)| language.to_string())
        .collect()
}

/// Years between `created_at` (RFC 3339) and `now`; never negative.
pub fn account_age_years(created_at: &str, now: OffsetDateTime) -> Result<f64, ApiError> {
    let created = OffsetDateTime::parse(created_at, &Rfc3339).map_err(|source| {
        ApiError::Timestamp {
            value: created_at.to_string(),
            source,
        }
    })?;
    let seconds = (now - created).as_seconds_f64();
    Ok((seconds / SECONDS_PER_YEAR).max(0.0))
}
