use std::fmt;

use serde::Serialize;

/// Tier assigned by threshold banding.
///
/// Variants are declared lowest first so the derived ordering gives
/// `A > B > C > Unranked` for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Unranked,
    C,
    B,
    A,
}

impl Rank {
    /// Badge letter; unranked trophies show a question mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::Unranked => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Tracked metric categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Commits,
    Repositories,
    Experience,
    Stars,
    Followers,
    PullRequests,
    Issues,
    Reviews,
}

impl Category {
    /// Fixed display sequence. Badge layout depends on this order.
    pub const ALL: [Category; 8] = [
        Category::Commits,
        Category::Repositories,
        Category::Experience,
        Category::Stars,
        Category::Followers,
        Category::PullRequests,
        Category::Issues,
        Category::Reviews,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Commits => "Commits",
            Category::Repositories => "Repositories",
            Category::Experience => "Experience",
            Category::Stars => "Stars",
            Category::Followers => "Followers",
            Category::PullRequests => "Pull Requests",
            Category::Issues => "Issues",
            Category::Reviews => "Reviews",
        }
    }

    /// Whether the underlying metric may carry a fractional part.
    pub fn accepts_fraction(self) -> bool {
        matches!(self, Category::Experience)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
