//! End-to-end checks on the rendered SVG: structure, sizing and escaping of
//! profile-supplied text.

use badge::render::layout::DEFAULT_ORIGIN;
use badge::{render_badge, MetricsBundle, RenderConfig};
use serde_json::json;

fn hostile_bundle() -> MetricsBundle {
    MetricsBundle::from_json(&json!({
        "displayName": "<script>alert(1)</script>",
        "handle": "x\"><img src=x>",
        "accountAgeYears": 6.2,
        "publicRepoCount": 31,
        "followerCount": 12,
        "totalStars": 101,
        "totalForks": 3,
        "commitCount": 240,
        "pullRequestCount": 4,
        "issueCount": 0,
        "reviewCount": 2,
        "topLanguages": ["C & C++", "<Rust>"]
    }))
    .unwrap()
}

#[test]
fn script_in_display_name_is_neutralised() {
    let badge = render_badge(&hostile_bundle(), &RenderConfig::default()).unwrap();
    assert!(!badge.markup.contains("<script>"));
    assert!(!badge.markup.contains("</script>"));
    assert!(!badge.markup.contains("<img"));
    assert!(!badge.markup.contains("<Rust>"));
    assert!(badge.markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(badge.markup.contains("C &amp; C++"));
}

#[test]
fn every_trophy_gets_a_card() {
    let badge = render_badge(&hostile_bundle(), &RenderConfig::default()).unwrap();
    assert_eq!(badge.markup.matches("<g transform=").count(), 8);
    for label in [
        "Commits",
        "Repositories",
        "Experience",
        "Stars",
        "Followers",
        "Pull Requests",
        "Issues",
        "Reviews",
    ] {
        assert!(badge.markup.contains(&format!(">{label}</text>")), "{label}");
    }
    assert!(badge.markup.contains(">High Committer</text>"));
    assert!(badge.markup.contains(">No Issues</text>"));
}

#[test]
fn reported_size_matches_svg_attributes() {
    let config = RenderConfig {
        columns: 2,
        ..RenderConfig::default()
    };
    let badge = render_badge(&hostile_bundle(), &config).unwrap();

    let expected_w = DEFAULT_ORIGIN.x * 2 + 2 * config.card_width + config.col_gap;
    let expected_h = DEFAULT_ORIGIN.y + 4 * config.card_height + 3 * config.row_gap + DEFAULT_ORIGIN.x;
    assert_eq!(badge.width, expected_w);
    assert_eq!(badge.height, expected_h);
    assert!(badge.markup.starts_with(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{expected_w}" height="{expected_h}""#
    )));
}

#[test]
fn rendering_is_deterministic() {
    let bundle = hostile_bundle();
    let config = RenderConfig::default();
    assert_eq!(
        render_badge(&bundle, &config).unwrap(),
        render_badge(&bundle, &config).unwrap()
    );
}

#[test]
fn oversized_cards_are_rejected_not_wrapped() {
    let config = RenderConfig {
        card_width: 1_500_000_000,
        ..RenderConfig::default()
    };
    assert!(matches!(
        render_badge(&hostile_bundle(), &config),
        Err(badge::BadgeError::InvalidConfig { .. })
    ));
}
