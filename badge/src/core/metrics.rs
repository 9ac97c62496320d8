//! The validated input record describing one profile's activity.
//!
//! A [`MetricsBundle`] can only be obtained through [`MetricsBundleBuilder::build`]
//! or [`MetricsBundle::from_json`], both of which reject out-of-contract values.
//! Everything downstream (classification, layout, rendering) therefore treats
//! the bundle as trusted and never fails on it.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::BadgeError;

/// Maximum number of entries kept in `topLanguages`.
pub const MAX_TOP_LANGUAGES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    display_name: String,
    handle: String,
    account_age_years: f64,
    public_repo_count: u64,
    follower_count: u64,
    following_count: u64,
    total_stars: u64,
    total_forks: u64,
    commit_count: u64,
    pull_request_count: u64,
    issue_count: u64,
    review_count: u64,
    top_languages: Vec<String>,
}

impl MetricsBundle {
    /// Start building a bundle for `handle`. All counts default to zero.
    pub fn builder(handle: impl Into<String>) -> MetricsBundleBuilder {
        MetricsBundleBuilder::new(handle)
    }

    /// Parse and validate a bundle from loosely-typed JSON (camelCase keys).
    ///
    /// Missing required keys yield [`BadgeError::MalformedBundle`]; values of the
    /// wrong type, negative values and fractional counts yield
    /// [`BadgeError::InvalidMetric`]. `followingCount` and `topLanguages` are
    /// optional.
    pub fn from_json(value: &Value) -> Result<Self, BadgeError> {
        let obj = value
            .as_object()
            .ok_or_else(|| BadgeError::invalid_metric("bundle", "expected a JSON object"))?;

        let handle = required_text(obj, "handle")?;
        let display_name = required_text(obj, "displayName")?;
        if display_name.trim().is_empty() {
            return Err(BadgeError::invalid_metric(
                "displayName",
                "must not be empty",
            ));
        }

        let builder = MetricsBundle::builder(handle)
            .display_name(display_name)
            .account_age_years(required_years(obj, "accountAgeYears")?)
            .public_repos(required_count(obj, "publicRepoCount")?)
            .followers(required_count(obj, "followerCount")?)
            .following(optional_count(obj, "followingCount")?.unwrap_or(0))
            .stars(required_count(obj, "totalStars")?)
            .forks(required_count(obj, "totalForks")?)
            .commits(required_count(obj, "commitCount")?)
            .pull_requests(required_count(obj, "pullRequestCount")?)
            .issues(required_count(obj, "issueCount")?)
            .reviews(required_count(obj, "reviewCount")?)
            .top_languages(optional_languages(obj)?);

        builder.build()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn account_age_years(&self) -> f64 {
        self.account_age_years
    }

    pub fn public_repo_count(&self) -> u64 {
        self.public_repo_count
    }

    pub fn follower_count(&self) -> u64 {
        self.follower_count
    }

    pub fn following_count(&self) -> u64 {
        self.following_count
    }

    pub fn total_stars(&self) -> u64 {
        self.total_stars
    }

    pub fn total_forks(&self) -> u64 {
        self.total_forks
    }

    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    pub fn pull_request_count(&self) -> u64 {
        self.pull_request_count
    }

    pub fn issue_count(&self) -> u64 {
        self.issue_count
    }

    pub fn review_count(&self) -> u64 {
        self.review_count
    }

    /// Most frequent language first; at most [`MAX_TOP_LANGUAGES`] entries.
    pub fn top_languages(&self) -> &[String] {
        &self.top_languages
    }
}

/// Typed construction path used by the fetch layer and tests.
#[derive(Debug, Clone)]
pub struct MetricsBundleBuilder {
    handle: String,
    display_name: Option<String>,
    account_age_years: f64,
    public_repo_count: u64,
    follower_count: u64,
    following_count: u64,
    total_stars: u64,
    total_forks: u64,
    commit_count: u64,
    pull_request_count: u64,
    issue_count: u64,
    review_count: u64,
    top_languages: Vec<String>,
}

impl MetricsBundleBuilder {
    fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            display_name: None,
            account_age_years: 0.0,
            public_repo_count: 0,
            follower_count: 0,
            following_count: 0,
            total_stars: 0,
            total_forks: 0,
            commit_count: 0,
            pull_request_count: 0,
            issue_count: 0,
            review_count: 0,
            top_languages: Vec::new(),
        }
    }

    /// Blank names fall back to the handle when the bundle is built.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn account_age_years(mut self, years: f64) -> Self {
        self.account_age_years = years;
        self
    }

    pub fn public_repos(mut self, count: u64) -> Self {
        self.public_repo_count = count;
        self
    }

    pub fn followers(mut self, count: u64) -> Self {
        self.follower_count = count;
        self
    }

    pub fn following(mut self, count: u64) -> Self {
        self.following_count = count;
        self
    }

    pub fn stars(mut self, count: u64) -> Self {
        self.total_stars = count;
        self
    }

    pub fn forks(mut self, count: u64) -> Self {
        self.total_forks = count;
        self
    }

    pub fn commits(mut self, count: u64) -> Self {
        self.commit_count = count;
        self
    }

    pub fn pull_requests(mut self, count: u64) -> Self {
        self.pull_request_count = count;
        self
    }

    pub fn issues(mut self, count: u64) -> Self {
        self.issue_count = count;
        self
    }

    pub fn reviews(mut self, count: u64) -> Self {
        self.review_count = count;
        self
    }

    pub fn top_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<MetricsBundle, BadgeError> {
        let handle = self.handle.trim().to_string();
        if handle.is_empty() {
            return Err(BadgeError::malformed("handle"));
        }

        let years = self.account_age_years;
        if !years.is_finite() {
            return Err(BadgeError::invalid_metric(
                "accountAgeYears",
                "must be a finite number",
            ));
        }
        if years < 0.0 {
            return Err(BadgeError::invalid_metric(
                "accountAgeYears",
                "must not be negative",
            ));
        }

        if self.top_languages.len() > MAX_TOP_LANGUAGES {
            return Err(BadgeError::invalid_metric(
                "topLanguages",
                format!(
                    "holds {} entries, at most {MAX_TOP_LANGUAGES} allowed",
                    self.top_languages.len()
                ),
            ));
        }

        let display_name = match self.display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => handle.clone(),
        };

        Ok(MetricsBundle {
            display_name,
            handle,
            account_age_years: years,
            public_repo_count: self.public_repo_count,
            follower_count: self.follower_count,
            following_count: self.following_count,
            total_stars: self.total_stars,
            total_forks: self.total_forks,
            commit_count: self.commit_count,
            pull_request_count: self.pull_request_count,
            issue_count: self.issue_count,
            review_count: self.review_count,
            top_languages: self.top_languages,
        })
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, BadgeError> {
    obj.get(field).ok_or_else(|| BadgeError::malformed(field))
}

fn required_text(obj: &Map<String, Value>, field: &str) -> Result<String, BadgeError> {
    match required(obj, field)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(BadgeError::invalid_metric(
            field,
            format!("expected a string, found {}", kind(other)),
        )),
    }
}

fn required_count(obj: &Map<String, Value>, field: &str) -> Result<u64, BadgeError> {
    count_value(field, required(obj, field)?)
}

fn optional_count(obj: &Map<String, Value>, field: &str) -> Result<Option<u64>, BadgeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => count_value(field, value).map(Some),
    }
}

fn required_years(obj: &Map<String, Value>, field: &str) -> Result<f64, BadgeError> {
    match required(obj, field)? {
        Value::Number(number) => number.as_f64().ok_or_else(|| {
            BadgeError::invalid_metric(field, "not representable as a number")
        }),
        other => Err(BadgeError::invalid_metric(
            field,
            format!("expected a number, found {}", kind(other)),
        )),
    }
}

fn count_value(field: &str, value: &Value) -> Result<u64, BadgeError> {
    let number = match value {
        Value::Number(number) => number,
        other => {
            return Err(BadgeError::invalid_metric(
                field,
                format!("expected a number, found {}", kind(other)),
            ))
        }
    };

    if let Some(count) = number.as_u64() {
        return Ok(count);
    }

    let raw = number.as_f64().unwrap_or(f64::NAN);
    if raw.is_nan() || raw.is_infinite() {
        Err(BadgeError::invalid_metric(field, "must be a finite number"))
    } else if raw < 0.0 {
        Err(BadgeError::invalid_metric(field, "must not be negative"))
    } else if raw.fract() != 0.0 {
        Err(BadgeError::invalid_metric(
            field,
            format!("expected an integer, found {raw}"),
        ))
    } else if raw >= u64::MAX as f64 {
        Err(BadgeError::invalid_metric(field, "value is too large"))
    } else {
        Ok(raw as u64)
    }
}

fn optional_languages(obj: &Map<String, Value>) -> Result<Vec<String>, BadgeError> {
    const FIELD: &str = "topLanguages";

    let entries = match obj.get(FIELD) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(BadgeError::invalid_metric(
                FIELD,
                format!("expected an array, found {}", kind(other)),
            ))
        }
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(language) => Ok(language.clone()),
            other => Err(BadgeError::invalid_metric(
                FIELD,
                format!("expected language names, found {}", kind(other)),
            )),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "displayName": "Ada Lovelace",
            "handle": "ada",
            "accountAgeYears": 3.4,
            "publicRepoCount": 12,
            "followerCount": 40,
            "totalStars": 150,
            "totalForks": 9,
            "commitCount": 420,
            "pullRequestCount": 11,
            "issueCount": 3,
            "reviewCount": 0,
            "topLanguages": ["Rust", "Python"]
        })
    }

    #[test]
    fn parses_complete_bundle() {
        let bundle = MetricsBundle::from_json(&sample()).unwrap();
        assert_eq!(bundle.handle(), "ada");
        assert_eq!(bundle.display_name(), "Ada Lovelace");
        assert_eq!(bundle.total_stars(), 150);
        assert_eq!(bundle.following_count(), 0);
        assert_eq!(bundle.top_languages(), ["Rust", "Python"]);
    }

    #[test]
    fn missing_field_is_malformed() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("commitCount");
        assert_eq!(
            MetricsBundle::from_json(&value),
            Err(BadgeError::malformed("commitCount"))
        );
    }

    #[test]
    fn string_count_is_invalid_not_zero() {
        let mut value = sample();
        value["totalStars"] = json!("150");
        let err = MetricsBundle::from_json(&value).unwrap_err();
        assert!(matches!(err, BadgeError::InvalidMetric { ref field, .. } if field == "totalStars"));
    }

    #[test]
    fn negative_and_fractional_counts_rejected() {
        let mut negative = sample();
        negative["followerCount"] = json!(-1);
        assert!(matches!(
            MetricsBundle::from_json(&negative),
            Err(BadgeError::InvalidMetric { .. })
        ));

        let mut fractional = sample();
        fractional["publicRepoCount"] = json!(2.5);
        assert!(matches!(
            MetricsBundle::from_json(&fractional),
            Err(BadgeError::InvalidMetric { .. })
        ));

        let mut integral = sample();
        integral["publicRepoCount"] = json!(12.0);
        assert_eq!(
            MetricsBundle::from_json(&integral).unwrap().public_repo_count(),
            12
        );
    }

    #[test]
    fn counts_at_or_beyond_u64_range_rejected() {
        let mut overflow = sample();
        overflow["totalStars"] = json!(18_446_744_073_709_551_616.0_f64);
        assert!(matches!(
            MetricsBundle::from_json(&overflow),
            Err(BadgeError::InvalidMetric { .. })
        ));

        let mut max = sample();
        max["totalStars"] = json!(u64::MAX);
        assert_eq!(MetricsBundle::from_json(&max).unwrap().total_stars(), u64::MAX);
    }

    #[test]
    fn experience_must_be_numeric_and_non_negative() {
        let mut text = sample();
        text["accountAgeYears"] = json!("3 years");
        assert!(matches!(
            MetricsBundle::from_json(&text),
            Err(BadgeError::InvalidMetric { .. })
        ));

        let err = MetricsBundle::builder("ada")
            .account_age_years(-0.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, BadgeError::InvalidMetric { .. }));
    }

    #[test]
    fn absent_languages_default_to_empty() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("topLanguages");
        let bundle = MetricsBundle::from_json(&value).unwrap();
        assert!(bundle.top_languages().is_empty());
    }

    #[test]
    fn too_many_languages_rejected() {
        let err = MetricsBundle::builder("ada")
            .top_languages(["Rust", "Go", "C", "Zig"])
            .build()
            .unwrap_err();
        assert!(matches!(err, BadgeError::InvalidMetric { ref field, .. } if field == "topLanguages"));
    }

    #[test]
    fn blank_handle_is_malformed_and_blank_name_falls_back() {
        assert_eq!(
            MetricsBundle::builder("  ").build(),
            Err(BadgeError::malformed("handle"))
        );
        let bundle = MetricsBundle::builder("ada").display_name("").build().unwrap();
        assert_eq!(bundle.display_name(), "ada");
    }
}
