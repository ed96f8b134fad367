mod replay;

use anyhow::Context;
use clap::Parser;
use park_domain::config::{AppConfig, LoggingConfig};
use park_event_bus::EventBus;
use park_kernel::config::{load_config, load_config_or_default};
use park_kernel::diagnostics::EventLogger;
use park_logger::{Logger, parse_level};
use replay::InputReplay;
use std::path::PathBuf;
use tracing::info;

/// Headless ParkLogic shell.
#[derive(Debug, Parser)]
#[command(name = "parklogic", version, about)]
struct Args {
    /// Configuration file. Defaults to `parklogic.*` in the working directory, if present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to replay (overrides `replay.frames`).
    #[arg(short, long)]
    frames: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config: AppConfig = match &args.config {
        Some(path) => load_config(Some(path))?,
        None => load_config_or_default(None::<PathBuf>)?,
    };
    if let Some(frames) = args.frames {
        config.replay.frames = frames;
    }

    let _logger = init_logging(&config.logging)?;
    info!(title = %config.window.title, "Starting shell");

    let bus = EventBus::new();
    let event_logger = EventLogger::attach(&bus);

    let stats = InputReplay::new(bus.clone(), &config.window, &config.replay).run();

    info!(
        frames = stats.frames,
        published = stats.published,
        delivered = stats.delivered,
        observed = event_logger.observed(),
        "Replay finished"
    );

    Ok(())
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<Logger> {
    let level = parse_level(&config.level).context("Reading logging.level")?;
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(config.console).level(level);
    let builder = match &config.filter {
        Some(directives) => builder.env_filter(directives),
        None => builder,
    };

    let logger = match &config.path {
        Some(path) => builder.path(path).max_files(config.max_files).json(config.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
