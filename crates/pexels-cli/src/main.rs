// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pexels_client::{Orientation, PexelsClient, Photo, PhotoSearch, Size};
use pexels_config::{load as load_config, AppConfig, TelemetryConfig, DEFAULT_CONFIG_PATH};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Search Pexels for landscape photos and print what comes back.
#[derive(Debug, Parser)]
#[command(name = "pexels", version)]
struct Args {
    /// JSON file holding the API key.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, default_value = "elephant")]
    query: String,

    #[arg(long, default_value_t = 5)]
    per_page: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, _guard) = start(&args.config, &TelemetryConfig::default())?;
    info!(target: "cli", "starting the Pexels client application");

    let client = build_client(&config)?;
    let search = PhotoSearch::new(args.query)
        .orientation(Orientation::Landscape)
        .size(Size::Large)
        .page(1)
        .per_page(args.per_page);

    let response = client
        .photos()
        .search(&search)
        .await
        .context("error searching photos")?;

    if response.photos.is_empty() {
        bail!("no photos found");
    }

    for photo in &response.photos {
        info!(target: "cli", id = photo.id, photographer = %photo.photographer, "photo");
        println!("{}", describe(photo));
    }

    info!(target: "cli", "done");
    Ok(())
}

/// Load configuration and install the log sink it names. A configuration
/// failure is still written to the `fallback` sink before it is returned.
fn start(config_path: &Path, fallback: &TelemetryConfig) -> Result<(AppConfig, WorkerGuard)> {
    match load_config(config_path) {
        Ok(config) => {
            let guard = init_tracing(&config.telemetry)?;
            info!(target: "config", path = %config_path.display(), "configuration loaded");
            Ok((config, guard))
        }
        Err(err) => {
            let _guard = init_tracing(fallback)?;
            error!(target: "config", path = %config_path.display(), "{:#}", err);
            Err(err)
        }
    }
}

fn init_tracing(telemetry: &TelemetryConfig) -> Result<WorkerGuard> {
    let path = Path::new(&telemetry.log_file);
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", telemetry.log_file))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(directory)
        .with_context(|| format!("failed to open log file {}", telemetry.log_file))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&telemetry.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(guard)
}

fn build_client(config: &AppConfig) -> Result<PexelsClient> {
    let mut builder = PexelsClient::builder(config.api_key.clone());

    if let Some(url) = &config.photo_base_url {
        builder = builder.photo_base_url(url.clone());
    }
    if let Some(url) = &config.video_base_url {
        builder = builder.video_base_url(url.clone());
    }
    if let Some(url) = &config.collection_base_url {
        builder = builder.collection_base_url(url.clone());
    }
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

fn describe(photo: &Photo) -> String {
    format!(
        "Photo ID: {}, Photographer: {}, URL: {}",
        photo.id, photo.photographer, photo.url
    )
}
