//! Markup-free description of a badge.
//!
//! [`Scene::compose`] turns a trophy set into positioned card descriptors and
//! header text; `svg::render` is the only place that knows about markup. Text
//! is fitted to its field here, escaping happens at render time.

use crate::core::config::RenderConfig;
use crate::core::error::BadgeError;
use crate::core::format::{
    fit_text, format_languages, format_points, format_years, DISPLAY_NAME_MAX_CHARS,
    HANDLE_MAX_CHARS,
};
use crate::core::metrics::MetricsBundle;
use crate::trophy::{Category, Rank, Trophy, TrophySet};

use super::layout::{
    bar_width, layout, progress_ratio, Canvas, CardGeometry, Point, DEFAULT_ORIGIN, INNER_MARGIN,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderScene {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardScene {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub rank: Rank,
    pub title: String,
    pub points: String,
    pub detail: String,
    pub track_width: f64,
    pub bar_width: f64,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub header: HeaderScene,
    pub cards: Vec<CardScene>,
}

impl Scene {
    pub fn compose(
        bundle: &MetricsBundle,
        trophies: &TrophySet,
        config: &RenderConfig,
    ) -> Result<Self, BadgeError> {
        config.validate()?;

        let geometry = CardGeometry::from_config(config);
        let grid = layout(trophies.len(), config.columns, geometry, DEFAULT_ORIGIN);
        let track_width = config.card_width.saturating_sub(INNER_MARGIN) as f64;

        let cards = trophies
            .iter()
            .zip(grid.positions())
            .map(|(trophy, &origin)| {
                let ratio = progress_ratio(trophy.raw_metric, config.progress_scale);
                CardScene {
                    origin,
                    width: geometry.card_width,
                    height: geometry.card_height,
                    label: fit_text(trophy.label, config.max_label_chars),
                    rank: trophy.rank,
                    title: fit_text(trophy.title, config.max_label_chars),
                    points: format_points(trophy.points),
                    detail: metric_detail(trophy),
                    track_width,
                    bar_width: bar_width(ratio, geometry.card_width),
                    accent: rank_accent(trophy.rank),
                }
            })
            .collect();

        Ok(Self {
            canvas: grid.canvas(),
            header: header(bundle, trophies),
            cards,
        })
    }
}

fn header(bundle: &MetricsBundle, trophies: &TrophySet) -> HeaderScene {
    HeaderScene {
        title: format!(
            "🏆 {}'s GitHub Trophies",
            fit_text(bundle.display_name(), DISPLAY_NAME_MAX_CHARS)
        ),
        subtitle: format!(
            "@{} • Top Languages: {}",
            fit_text(bundle.handle(), HANDLE_MAX_CHARS),
            format_languages(bundle.top_languages())
        ),
        summary: format!(
            "{} pts • best rank {} • {} forks • {} following",
            trophies.total_points(),
            trophies.best_rank(),
            bundle.total_forks(),
            bundle.following_count()
        ),
    }
}

fn metric_detail(trophy: &Trophy) -> String {
    match trophy.category {
        Category::Experience => format_years(trophy.raw_metric),
        _ => format!("{}", trophy.raw_metric as u64),
    }
}

pub fn rank_accent(rank: Rank) -> &'static str {
    match rank {
        Rank::A => "#fbbf24",
        Rank::B => "#cbd5e1",
        Rank::C => "#d97706",
        Rank::Unranked => "#64748b",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trophy::assemble;

    fn bundle() -> MetricsBundle {
        MetricsBundle::builder("ada")
            .display_name("Ada")
            .commits(220)
            .stars(25)
            .account_age_years(3.3)
            .forks(4)
            .following(7)
            .top_languages(["Rust", "Go"])
            .build()
            .unwrap()
    }

    #[test]
    fn one_card_per_trophy_in_grid_order() {
        let bundle = bundle();
        let set = assemble(&bundle);
        let config = RenderConfig::default();
        let scene = Scene::compose(&bundle, &set, &config).unwrap();

        assert_eq!(scene.cards.len(), 8);
        assert_eq!(scene.cards[0].origin, DEFAULT_ORIGIN);
        assert_eq!(scene.cards[0].label, "Commits");
        assert_eq!(scene.cards[0].accent, rank_accent(Rank::A));
        // 4 columns: the fifth card starts the second row
        assert_eq!(scene.cards[4].origin.x, DEFAULT_ORIGIN.x);
        assert!(scene.cards[4].origin.y > DEFAULT_ORIGIN.y);
        assert_eq!(scene.canvas.width, 40 + 4 * 120 + 3 * 14 + 40);
    }

    #[test]
    fn bars_follow_progress_scale() {
        let bundle = bundle();
        let set = assemble(&bundle);
        let scene = Scene::compose(&bundle, &set, &RenderConfig::default()).unwrap();

        let commits = &scene.cards[0];
        assert_eq!(commits.bar_width, commits.track_width);
        let stars = &scene.cards[3];
        assert_eq!(stars.bar_width, 0.5 * stars.track_width);
        let reviews = &scene.cards[7];
        assert_eq!(reviews.bar_width, 0.0);
        assert_eq!(scene.cards[2].detail, "3.3 yrs");
    }

    #[test]
    fn labels_respect_char_budget() {
        let bundle = bundle();
        let set = assemble(&bundle);
        let config = RenderConfig {
            max_label_chars: 5,
            ..RenderConfig::default()
        };
        let scene = Scene::compose(&bundle, &set, &config).unwrap();
        assert_eq!(scene.cards[5].label, "Pull …");
        assert_eq!(scene.cards[0].title, "High …");
    }

    #[test]
    fn header_lines() {
        let bundle = bundle();
        let set = assemble(&bundle);
        let scene = Scene::compose(&bundle, &set, &RenderConfig::default()).unwrap();
        assert_eq!(scene.header.title, "🏆 Ada's GitHub Trophies");
        assert_eq!(scene.header.subtitle, "@ada • Top Languages: Rust • Go");
        assert!(scene.header.summary.contains("4 forks"));
        assert!(scene.header.summary.contains("7 following"));
    }

    #[test]
    fn long_names_fit_the_header() {
        let name = "N".repeat(200);
        let handle = "h".repeat(60);
        let bundle = MetricsBundle::builder(handle.as_str())
            .display_name(name.as_str())
            .build()
            .unwrap();
        let set = assemble(&bundle);
        let scene = Scene::compose(&bundle, &set, &RenderConfig::default()).unwrap();

        let fitted_name = format!("{}…", "N".repeat(DISPLAY_NAME_MAX_CHARS));
        assert_eq!(
            scene.header.title,
            format!("🏆 {fitted_name}'s GitHub Trophies")
        );
        assert!(!scene.header.title.contains(&name));
        let fitted_handle = format!("@{}… •", "h".repeat(HANDLE_MAX_CHARS));
        assert!(scene.header.subtitle.starts_with(&fitted_handle));
    }

    #[test]
    fn invalid_config_rejected() {
        let bundle = bundle();
        let set = assemble(&bundle);
        let config = RenderConfig {
            columns: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            Scene::compose(&bundle, &set, &config),
            Err(BadgeError::InvalidConfig { .. })
        ));
    }
}
