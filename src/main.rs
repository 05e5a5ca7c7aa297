use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hls_runtimes::app::{Config, Pipeline};

/// Parse HLS job runtimes from catapult.log files
#[derive(Parser)]
#[command(name = "report-runtimes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to HLS directory (default: hls)
    #[arg(long)]
    hls_dir: Option<PathBuf>,

    /// Optional path to CSV file for export
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Config file (default: ~/.config/hls-runtimes/config.toml)
    #[arg(long, env = "HLS_RUNTIMES_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.hls_dir, cli.csv, cli.log_level);

    // ログ初期化
    init_logging(&config.log_level);
    debug!("Using config: {:?}", config);

    let stdout = io::stdout();
    let outcome = Pipeline::from_config(&config).run(&mut stdout.lock())?;
    debug!("Run finished: {:?}", outcome);

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
