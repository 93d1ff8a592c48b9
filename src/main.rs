use std::path::PathBuf;

use clap::Parser;
use clipview::bootstrap::{self, tracing::init_tracing_subscriber, ConfigSource};
use clipview::shell;
use tokio::io::BufReader;
use tracing::info;

/// Clipboard history with an in-place JSON inspector
#[derive(Parser, Debug)]
#[command(name = "clipview", version, about)]
struct Cli {
    /// Config file (TOML). Defaults to ./clipview.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Push the sample entries before reading commands
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = bootstrap::resolve_config(cli.config.as_deref())?;
    init_tracing_subscriber(&config.log.level)?;
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "config loaded"),
        ConfigSource::Defaults => info!("no config file, using defaults"),
    }

    let runtime = bootstrap::wire(&config);
    if cli.seed {
        runtime
            .handle
            .send(cv_app::SessionCommand::SeedSamples)?;
    }

    shell::run(&runtime, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    runtime.handle.shutdown()?;
    runtime.task.await?;
    Ok(())
}
