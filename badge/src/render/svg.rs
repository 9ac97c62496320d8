//! SVG serializer for a composed [`Scene`].
//!
//! Pure string templating. Every interpolated text value is escaped because
//! names, handles and language labels come from external profiles.

use std::fmt::Write;

use super::layout::INNER_MARGIN;
use super::scene::{CardScene, HeaderScene, Scene};
use super::RenderedBadge;

const FONT_FAMILY: &str = "Segoe UI, system-ui, sans-serif";

/// Escape the XML special characters for text content and attribute values.
/// `&` is handled first by construction (single pass).
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn render(scene: &Scene) -> RenderedBadge {
    let width = scene.canvas.width;
    let height = scene.canvas.height;
    let mut out = String::with_capacity(4096 + scene.cards.len() * 1024);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    write_defs(&mut out);
    let _ = writeln!(
        out,
        r##"  <rect width="100%" height="100%" fill="url(#bg)" rx="24"/>"##
    );
    write_header(&mut out, &scene.header);
    for card in &scene.cards {
        write_card(&mut out, card);
    }
    out.push_str("</svg>\n");

    RenderedBadge {
        markup: out,
        width,
        height,
    }
}

fn write_defs(out: &mut String) {
    out.push_str(concat!(
        "  <defs>\n",
        "    <linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\n",
        "      <stop offset=\"0%\" stop-color=\"#0d1117\"/>\n",
        "      <stop offset=\"100%\" stop-color=\"#0b0f14\"/>\n",
        "    </linearGradient>\n",
        "    <linearGradient id=\"card-bg\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\n",
        "      <stop offset=\"0%\" stop-color=\"#111827\"/>\n",
        "      <stop offset=\"100%\" stop-color=\"#0f172a\"/>\n",
        "    </linearGradient>\n",
        "    <filter id=\"neon\">\n",
        "      <feDropShadow dx=\"0\" dy=\"0\" stdDeviation=\"3\" flood-color=\"#00f5ff\"/>\n",
        "    </filter>\n",
        "  </defs>\n",
    ));
}

fn write_header(out: &mut String, header: &HeaderScene) {
    let _ = writeln!(
        out,
        r##"  <text x="50%" y="44" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="26" font-weight="700" fill="#e5e7eb">{}</text>"##,
        escape_xml(&header.title)
    );
    let _ = writeln!(
        out,
        r##"  <text x="50%" y="72" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="15" fill="#9ca3af">{}</text>"##,
        escape_xml(&header.subtitle)
    );
    let _ = writeln!(
        out,
        r##"  <text x="50%" y="94" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="12" fill="#64748b">{}</text>"##,
        escape_xml(&header.summary)
    );
}

/// Card content is drawn on a 120x170 reference card and scaled to the
/// configured size: vertical slots follow the height, glyphs and the rank ring
/// follow the tighter of the two axes.
struct CardFrame {
    scale_y: f64,
    scale: f64,
}

impl CardFrame {
    const REFERENCE_WIDTH: f64 = 120.0;
    const REFERENCE_HEIGHT: f64 = 170.0;

    fn new(width: u32, height: u32) -> Self {
        let scale_x = width as f64 / Self::REFERENCE_WIDTH;
        let scale_y = height as f64 / Self::REFERENCE_HEIGHT;
        Self {
            scale_y,
            scale: scale_x.min(scale_y),
        }
    }

    fn y(&self, reference: f64) -> f64 {
        reference * self.scale_y
    }

    fn size(&self, reference: f64) -> f64 {
        reference * self.scale
    }
}

fn write_card(out: &mut String, card: &CardScene) {
    let frame = CardFrame::new(card.width, card.height);
    let cx = card.width as f64 / 2.0;
    let track_x = INNER_MARGIN / 2;
    let accent = card.accent;

    let _ = writeln!(
        out,
        r#"  <g transform="translate({}, {})">"#,
        card.origin.x, card.origin.y
    );
    let _ = writeln!(
        out,
        r##"    <rect width="{}" height="{}" rx="{:.1}" fill="url(#card-bg)" stroke="#00f5ff" stroke-width="1.5" filter="url(#neon)"/>"##,
        card.width,
        card.height,
        frame.size(16.0)
    );
    let _ = writeln!(
        out,
        r##"    <text x="{cx}" y="{:.1}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{:.1}" fill="#cbd5e1">{}</text>"##,
        frame.y(24.0),
        frame.size(13.0),
        escape_xml(&card.label)
    );
    let _ = writeln!(
        out,
        r#"    <circle cx="{cx}" cy="{:.1}" r="{:.1}" fill="none" stroke="{accent}" stroke-width="3"/>"#,
        frame.y(62.0),
        frame.size(24.0)
    );
    let _ = writeln!(
        out,
        r#"    <text x="{cx}" y="{:.1}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{:.1}" font-weight="700" fill="{accent}">{}</text>"#,
        frame.y(71.0),
        frame.size(26.0),
        card.rank.symbol()
    );
    let _ = writeln!(
        out,
        r##"    <text x="{cx}" y="{:.1}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{:.1}" fill="#e5e7eb">{}</text>"##,
        frame.y(108.0),
        frame.size(10.0),
        escape_xml(&card.title)
    );
    let _ = writeln!(
        out,
        r##"    <text x="{cx}" y="{:.1}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{:.1}" font-weight="700" fill="#fbbf24">{}</text>"##,
        frame.y(126.0),
        frame.size(12.0),
        escape_xml(&card.points)
    );
    let _ = writeln!(
        out,
        r##"    <text x="{cx}" y="{:.1}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{:.1}" fill="#64748b">{}</text>"##,
        frame.y(142.0),
        frame.size(10.0),
        escape_xml(&card.detail)
    );
    let track_y = frame.y(152.0);
    let track_h = frame.y(6.0);
    let _ = writeln!(
        out,
        r##"    <rect x="{track_x}" y="{track_y:.1}" width="{:.1}" height="{track_h:.1}" rx="{:.1}" fill="#1f2937"/>"##,
        card.track_width,
        track_h / 2.0
    );
    let _ = writeln!(
        out,
        r#"    <rect x="{track_x}" y="{track_y:.1}" width="{:.1}" height="{track_h:.1}" rx="{:.1}" fill="{accent}"/>"#,
        card.bar_width,
        track_h / 2.0
    );
    out.push_str("  </g>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RenderConfig;
    use crate::core::metrics::MetricsBundle;
    use crate::trophy::assemble;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    fn card_attr(markup: &str, attr: &str) -> Vec<Vec<f64>> {
        let needle = format!(" {attr}=\"");
        markup
            .split("<g transform=")
            .skip(1)
            .map(|card| {
                card.match_indices(&needle)
                    .filter_map(|(at, _)| {
                        let rest = &card[at + needle.len()..];
                        rest[..rest.find('"')?].parse::<f64>().ok()
                    })
                    .collect()
            })
            .collect()
    }

    fn small_card_markup(card_height: u32) -> String {
        let bundle = MetricsBundle::builder("ada").commits(12).build().unwrap();
        let config = RenderConfig {
            card_height,
            ..RenderConfig::default()
        };
        let scene = Scene::compose(&bundle, &assemble(&bundle), &config).unwrap();
        render(&scene).markup
    }

    #[test]
    fn short_cards_keep_content_inside() {
        let markup = small_card_markup(100);
        let cards = card_attr(&markup, "y");
        assert_eq!(cards.len(), 8);
        for ys in &cards {
            // label, rank, title, points, detail, track, bar
            assert_eq!(ys.len(), 7);
            assert!(ys.iter().all(|&y| y > 0.0 && y < 100.0), "{ys:?}");
            assert!(ys[..5].windows(2).all(|w| w[0] < w[1]), "{ys:?}");
            assert!(ys[4] < ys[5], "detail {} overlaps track {}", ys[4], ys[5]);
        }
        for (cy, r) in card_attr(&markup, "cy").iter().zip(card_attr(&markup, "r")) {
            assert!(cy[0] - r[0] > 0.0 && cy[0] + r[0] < 100.0);
        }
    }

    #[test]
    fn default_card_uses_reference_slots() {
        let markup = small_card_markup(170);
        let ys = &card_attr(&markup, "y")[0];
        assert_eq!(ys, &[24.0, 71.0, 108.0, 126.0, 142.0, 152.0, 152.0]);
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }
}
