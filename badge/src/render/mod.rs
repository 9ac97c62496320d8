//! Layout, scene composition and serialization of the trophy badge.

pub mod export;
pub mod layout;
pub mod scene;
pub mod svg;

use tracing::debug;

use crate::core::config::RenderConfig;
use crate::core::error::BadgeError;
use crate::core::metrics::MetricsBundle;
use crate::trophy::assemble;

pub use scene::Scene;

/// Final SVG markup and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBadge {
    pub markup: String,
    pub width: u32,
    pub height: u32,
}

/// Classify, lay out and render `bundle` in one call.
pub fn render_badge(
    bundle: &MetricsBundle,
    config: &RenderConfig,
) -> Result<RenderedBadge, BadgeError> {
    let trophies = assemble(bundle);
    let scene = Scene::compose(bundle, &trophies, config)?;
    let badge = svg::render(&scene);
    debug!(
        width = badge.width,
        height = badge.height,
        bytes = badge.markup.len(),
        "rendered badge"
    );
    Ok(badge)
}
