//! Formatting helpers for presenting trophy values in fixed-width fields.

/// Character budget for the points value on a card.
pub const POINTS_MAX_CHARS: usize = 12;

/// Character budget for the joined top-languages list.
pub const LANGUAGES_MAX_CHARS: usize = 22;

/// Character budget for the display name in the header title.
pub const DISPLAY_NAME_MAX_CHARS: usize = 24;

/// GitHub logins are at most 39 characters.
pub const HANDLE_MAX_CHARS: usize = 39;

pub const ELLIPSIS: char = '…';

/// Keep the first `max_chars` characters of `text`, appending an ellipsis when
/// anything was cut. Counts `char`s, not bytes.
pub fn fit_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let kept: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{kept}{ELLIPSIS}")
    } else {
        kept
    }
}

/// The number is fitted to the points field; the unit is appended after.
pub fn format_points(points: u64) -> String {
    format!("{} pts", fit_text(&points.to_string(), POINTS_MAX_CHARS))
}

/// `"Rust • Go"`, or `"None"` for an empty list, fitted to the language field.
pub fn format_languages(languages: &[String]) -> String {
    if languages.is_empty() {
        return "None".to_string();
    }
    fit_text(&languages.join(" • "), LANGUAGES_MAX_CHARS)
}

pub fn format_years(years: f64) -> String {
    format!("{years:.1} yrs")
}
