//! Render config resolution: defaults, then a JSON file, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use badge::{MetricsBundle, RenderConfig};
use tracing::{debug, warn};

use crate::args::Cli;

pub fn resolve_render_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => load_render_config(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load_render_config(&path)?,
            Some(path) => {
                debug!(path = %path.display(), "no render config file, using defaults");
                RenderConfig::default()
            }
            None => {
                warn!("no platform config directory, using default render config");
                RenderConfig::default()
            }
        },
    };

    cli.layout.apply(&mut config);
    config.validate()?;
    Ok(config)
}

pub fn load_render_config(path: &Path) -> Result<RenderConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading render config {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing render config {}", path.display()))?;
    debug!(path = %path.display(), "loaded render config");
    Ok(config)
}

pub fn load_bundle(path: &Path) -> Result<MetricsBundle> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading metrics {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing metrics {}", path.display()))?;
    let bundle = MetricsBundle::from_json(&value)
        .with_context(|| format!("validating metrics {}", path.display()))?;
    Ok(bundle)
}

fn default_config_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "Trophycase", "Trophycase")?;
    Some(dirs.config_dir().join("render.json"))
}
