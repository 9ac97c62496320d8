use std::process::ExitCode;

use anyhow::{Context, Result};
use api::{FetchConfig, GitHubClient};
use badge::render::export::{rasterize_png, write_artifact};
use badge::render::{svg, Scene};
use badge::{assemble, MetricsBundle};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod args;
mod settings;

use args::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = settings::resolve_render_config(&cli)?;

    let bundle = match &cli.metrics {
        Some(path) => settings::load_bundle(path)?,
        None => fetch_bundle(&cli)?,
    };

    let trophies = assemble(&bundle);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&trophies)?);
    }

    let scene = Scene::compose(&bundle, &trophies, &config)?;
    let badge = svg::render(&scene);

    // Rasterize before writing anything so a failure leaves no partial output.
    let png = match &cli.png {
        Some(path) => Some((path, rasterize_png(&badge).context("rasterizing badge")?)),
        None => None,
    };

    write_artifact(&cli.output, badge.markup.as_bytes())?;
    if let Some((path, bytes)) = png {
        write_artifact(path, &bytes)?;
    }

    info!(
        user = bundle.handle(),
        points = trophies.total_points(),
        width = badge.width,
        height = badge.height,
        "trophies generated"
    );
    Ok(())
}

fn fetch_bundle(cli: &Cli) -> Result<MetricsBundle> {
    let config = FetchConfig::new(cli.user.as_str()).with_token(cli.token.clone());
    let client = GitHubClient::new(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let bundle = runtime
        .block_on(client.fetch_metrics())
        .with_context(|| format!("fetching GitHub data for {}", cli.user))?;
    Ok(bundle)
}
