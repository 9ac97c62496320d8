//! Trophy engine for Trophycase. Classification, layout and rendering live here;
//! fetching profile data is left to the `api` crate.

pub mod core;
pub mod render;
pub mod trophy;

pub use crate::core::config::RenderConfig;
pub use crate::core::error::BadgeError;
pub use crate::core::metrics::{MetricsBundle, MetricsBundleBuilder};
pub use render::{render_badge, RenderedBadge};
pub use trophy::{assemble, Category, Rank, Trophy, TrophySet};
