//! GitHub data collaborator for Trophycase.
//!
//! Fetches a profile, its repositories and a few search totals, then folds them
//! into a validated [`badge::MetricsBundle`]. Configuration is passed in
//! explicitly through [`FetchConfig`]; nothing here reads the environment.

mod aggregate;
mod client;
mod config;
mod error;
mod model;

pub use aggregate::{account_age_years, aggregate, top_languages, ActivityTotals};
pub use client::GitHubClient;
pub use config::FetchConfig;
pub use error::ApiError;
pub use model::{Repository, SearchTotal, UserProfile};
