use serde::Serialize;
use tracing::debug;

use super::classify::{classify_checked, classify_count};
use super::rank::{Category, Rank};
use crate::core::metrics::MetricsBundle;

/// One ranked, titled, scored badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trophy {
    pub category: Category,
    pub label: &'static str,
    pub rank: Rank,
    pub title: &'static str,
    pub points: u64,
    /// Input value, kept for progress-bar scaling.
    pub raw_metric: f64,
}

/// The eight trophies of one profile, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrophySet {
    trophies: Vec<Trophy>,
}

impl TrophySet {
    pub fn trophies(&self) -> &[Trophy] {
        &self.trophies
    }

    pub fn len(&self) -> usize {
        self.trophies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trophies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trophy> {
        self.trophies.iter()
    }

    pub fn get(&self, category: Category) -> Option<&Trophy> {
        self.trophies.iter().find(|t| t.category == category)
    }

    pub fn total_points(&self) -> u64 {
        self.trophies
            .iter()
            .fold(0u64, |sum, t| sum.saturating_add(t.points))
    }

    pub fn best_rank(&self) -> Rank {
        self.trophies
            .iter()
            .map(|t| t.rank)
            .max()
            .unwrap_or(Rank::Unranked)
    }
}

impl<'a> IntoIterator for &'a TrophySet {
    type Item = &'a Trophy;
    type IntoIter = std::slice::Iter<'a, Trophy>;

    fn into_iter(self) -> Self::IntoIter {
        self.trophies.iter()
    }
}

/// Classify every category of `bundle` into the fixed display sequence.
///
/// A built [`MetricsBundle`] is already validated, so this never fails.
pub fn assemble(bundle: &MetricsBundle) -> TrophySet {
    let trophies: Vec<Trophy> = Category::ALL
        .iter()
        .map(|&category| {
            let (raw_metric, classification) = match count(bundle, category) {
                Some(count) => (count as f64, classify_count(category, count)),
                None => {
                    let years = bundle.account_age_years();
                    (years, classify_checked(category, years))
                }
            };
            Trophy {
                category,
                label: category.label(),
                rank: classification.rank,
                title: classification.title,
                points: classification.points,
                raw_metric,
            }
        })
        .collect();

    debug!(
        handle = bundle.handle(),
        trophies = trophies.len(),
        "assembled trophy set"
    );

    TrophySet { trophies }
}

/// Integer metric behind `category`; `None` for account age.
fn count(bundle: &MetricsBundle, category: Category) -> Option<u64> {
    match category {
        Category::Commits => Some(bundle.commit_count()),
        Category::Repositories => Some(bundle.public_repo_count()),
        Category::Experience => None,
        Category::Stars => Some(bundle.total_stars()),
        Category::Followers => Some(bundle.follower_count()),
        Category::PullRequests => Some(bundle.pull_request_count()),
        Category::Issues => Some(bundle.issue_count()),
        Category::Reviews => Some(bundle.review_count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_eight_in_fixed_order() {
        let empty = MetricsBundle::builder("nobody").build().unwrap();
        let busy = MetricsBundle::builder("busy")
            .commits(5_000)
            .public_repos(80)
            .account_age_years(12.0)
            .stars(9_000)
            .followers(700)
            .pull_requests(300)
            .issues(90)
            .reviews(40)
            .build()
            .unwrap();

        for bundle in [&empty, &busy] {
            let set = assemble(bundle);
            assert_eq!(set.len(), 8);
            let order: Vec<Category> = set.iter().map(|t| t.category).collect();
            assert_eq!(order, Category::ALL);
        }
    }

    #[test]
    fn carries_labels_and_raw_metrics() {
        let bundle = MetricsBundle::builder("ada")
            .commits(49)
            .public_repos(30)
            .account_age_years(2.5)
            .pull_requests(12)
            .build()
            .unwrap();
        let set = assemble(&bundle);

        let commits = set.get(Category::Commits).unwrap();
        assert_eq!(commits.rank, Rank::C);
        assert_eq!(commits.title, "First Committer");
        assert_eq!(commits.raw_metric, 49.0);

        let prs = set.get(Category::PullRequests).unwrap();
        assert_eq!(prs.label, "Pull Requests");
        assert_eq!(prs.points, 24);

        assert_eq!(set.get(Category::Experience).unwrap().points, 20);
        assert_eq!(set.best_rank(), Rank::A);
        assert_eq!(set.total_points(), 49 + 90 + 20 + 24);
    }

    #[test]
    fn huge_counts_keep_exact_points() {
        let commits = (1u64 << 53) + 1;
        let bundle = MetricsBundle::builder("ada")
            .commits(commits)
            .stars(u64::MAX)
            .build()
            .unwrap();
        let set = assemble(&bundle);
        assert_eq!(set.get(Category::Commits).unwrap().points, commits);
        assert_eq!(set.get(Category::Stars).unwrap().points, u64::MAX);
    }
}
