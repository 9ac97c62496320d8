use std::path::PathBuf;

use badge::RenderConfig;
use clap::{ArgAction, Args, Parser, ValueHint};

/// Render GitHub trophies as an SVG badge.
#[derive(Debug, Parser)]
#[command(name = "trophycase", version, about)]
pub struct Cli {
    /// GitHub login to render.
    #[arg(short, long, env = "GITHUB_USERNAME", default_value = "bhavik-125")]
    pub user: String,

    /// Personal access token, sent as a bearer token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Render from a JSON metrics bundle instead of calling the API.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub metrics: Option<PathBuf>,

    /// JSON render config; defaults to `render.json` in the platform config dir.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "trophy.svg", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Also rasterize the badge to this PNG path.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub png: Option<PathBuf>,

    /// Print the classified trophies as JSON on stdout.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    #[command(flatten)]
    pub layout: LayoutOverrides,
}

/// Per-field overrides applied on top of the config file.
#[derive(Debug, Default, Clone, Args)]
pub struct LayoutOverrides {
    #[arg(long)]
    pub columns: Option<u32>,
    #[arg(long)]
    pub card_width: Option<u32>,
    #[arg(long)]
    pub card_height: Option<u32>,
    #[arg(long)]
    pub col_gap: Option<u32>,
    #[arg(long)]
    pub row_gap: Option<u32>,
    #[arg(long)]
    pub progress_scale: Option<f64>,
    #[arg(long)]
    pub max_label_chars: Option<usize>,
}

impl LayoutOverrides {
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(width) = self.card_width {
            config.card_width = width;
        }
        if let Some(height) = self.card_height {
            config.card_height = height;
        }
        if let Some(gap) = self.col_gap {
            config.col_gap = gap;
        }
        if let Some(gap) = self.row_gap {
            config.row_gap = gap;
        }
        if let Some(scale) = self.progress_scale {
            config.progress_scale = scale;
        }
        if let Some(chars) = self.max_label_chars {
            config.max_label_chars = chars;
        }
    }
}
