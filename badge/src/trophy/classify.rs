//! Threshold banding for every trophy category.
//!
//! All categories share one generic classifier driven by a static rule table.
//! Each rule lists its bands from the highest rank down; the first band whose
//! bound admits the metric wins. When no band matches the trophy is
//! [`Rank::Unranked`] with zero points and the category's fallback title.
//!
//! Followers score `×2` in both A and B.

use serde::Serialize;

use super::rank::{Category, Rank};
use crate::core::error::BadgeError;

/// Result of classifying one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub rank: Rank,
    pub title: &'static str,
    pub points: u64,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    AtLeast(f64),
    Above(f64),
}

impl Bound {
    fn admits(self, metric: f64) -> bool {
        match self {
            Bound::AtLeast(floor) => metric >= floor,
            Bound::Above(floor) => metric > floor,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Points {
    Metric,
    Times(u64),
    /// Half-up rounding of `metric * factor`; used for fractional metrics.
    RoundedTimes(f64),
}

impl Points {
    fn score(self, metric: f64) -> u64 {
        match self {
            Points::Metric => metric as u64,
            Points::Times(factor) => (metric as u64).saturating_mul(factor),
            Points::RoundedTimes(factor) => (metric * factor + 0.5).floor() as u64,
        }
    }

    /// Exact integer scoring for count metrics.
    fn score_count(self, count: u64) -> u64 {
        match self {
            Points::Metric => count,
            Points::Times(factor) => count.saturating_mul(factor),
            Points::RoundedTimes(_) => self.score(count as f64),
        }
    }
}

#[derive(Debug)]
struct Band {
    rank: Rank,
    bound: Bound,
    points: Points,
    title: &'static str,
}

#[derive(Debug)]
struct CategoryRule {
    bands: &'static [Band],
    fallback_title: &'static str,
}

const fn band(rank: Rank, bound: Bound, points: Points, title: &'static str) -> Band {
    Band {
        rank,
        bound,
        points,
        title,
    }
}

const COMMITS: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(200.0), Points::Metric, "High Committer"),
        band(Rank::B, Bound::AtLeast(50.0), Points::Metric, "Middle Committer"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Committer"),
    ],
    fallback_title: "Unknown",
};

const REPOSITORIES: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(30.0), Points::Times(3), "High Repo Creator"),
        band(Rank::B, Bound::AtLeast(10.0), Points::Times(2), "Middle Repo Creator"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Repository"),
    ],
    fallback_title: "No Repositories",
};

const EXPERIENCE: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(5.0), Points::RoundedTimes(10.0), "Veteran Developer"),
        band(Rank::B, Bound::AtLeast(2.0), Points::RoundedTimes(8.0), "Experienced Developer"),
        band(Rank::C, Bound::Above(0.2), Points::RoundedTimes(5.0), "Rookie Developer"),
    ],
    fallback_title: "Newbie",
};

const STARS: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(100.0), Points::Metric, "High Stargazer"),
        band(Rank::B, Bound::AtLeast(20.0), Points::Metric, "Middle Stargazer"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Star"),
    ],
    fallback_title: "No Stars",
};

const FOLLOWERS: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(50.0), Points::Times(2), "Famous User"),
        band(Rank::B, Bound::AtLeast(10.0), Points::Times(2), "Active User"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Friend"),
    ],
    fallback_title: "No Followers",
};

const PULL_REQUESTS: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(50.0), Points::Times(2), "High Puller"),
        band(Rank::B, Bound::AtLeast(10.0), Points::Times(2), "Middle Puller"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Pull"),
    ],
    fallback_title: "No Pull Requests",
};

const ISSUES: CategoryRule = CategoryRule {
    bands: &[
        band(Rank::A, Bound::AtLeast(50.0), Points::Metric, "High Issuer"),
        band(Rank::B, Bound::AtLeast(10.0), Points::Metric, "Middle Issuer"),
        band(Rank::C, Bound::Above(0.0), Points::Metric, "First Issue"),
    ],
    fallback_title: "No Issues",
};

// Reviews only ever reach C.
const REVIEWS: CategoryRule = CategoryRule {
    bands: &[band(Rank::C, Bound::Above(0.0), Points::Metric, "First Reviewer")],
    fallback_title: "No Reviews",
};

fn rule(category: Category) -> &'static CategoryRule {
    match category {
        Category::Commits => &COMMITS,
        Category::Repositories => &REPOSITORIES,
        Category::Experience => &EXPERIENCE,
        Category::Stars => &STARS,
        Category::Followers => &FOLLOWERS,
        Category::PullRequests => &PULL_REQUESTS,
        Category::Issues => &ISSUES,
        Category::Reviews => &REVIEWS,
    }
}

/// Classify `metric` for `category`.
///
/// Fails with [`BadgeError::InvalidMetric`] for negative or non-finite values,
/// and for fractional values outside [`Category::Experience`].
pub fn classify(category: Category, metric: f64) -> Result<Classification, BadgeError> {
    check_metric(category, metric)?;
    Ok(classify_checked(category, metric))
}

/// Total over the valid domain; callers guarantee `metric` passed [`check_metric`].
pub(crate) fn classify_checked(category: Category, metric: f64) -> Classification {
    banded(category, metric, |points| points.score(metric))
}

/// Classify an integer count. Banding compares as `f64`; points stay exact.
pub(crate) fn classify_count(category: Category, count: u64) -> Classification {
    banded(category, count as f64, |points| points.score_count(count))
}

fn banded(category: Category, metric: f64, score: impl Fn(Points) -> u64) -> Classification {
    let rule = rule(category);
    rule.bands
        .iter()
        .find(|band| band.bound.admits(metric))
        .map(|band| Classification {
            rank: band.rank,
            title: band.title,
            points: score(band.points),
        })
        .unwrap_or(Classification {
            rank: Rank::Unranked,
            title: rule.fallback_title,
            points: 0,
        })
}

fn check_metric(category: Category, metric: f64) -> Result<(), BadgeError> {
    let field = category.label();
    if !metric.is_finite() {
        return Err(BadgeError::invalid_metric(field, "must be a finite number"));
    }
    if metric < 0.0 {
        return Err(BadgeError::invalid_metric(field, "must not be negative"));
    }
    if !category.accepts_fraction() && metric.fract() != 0.0 {
        return Err(BadgeError::invalid_metric(
            field,
            format!("expected an integer, found {metric}"),
        ));
    }
    Ok(())
}
