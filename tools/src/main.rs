mod bundle;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cangjie6_core::Config;

/// Build the dated Rime distribution bundles for the Cangjie6 code table.
#[derive(Parser)]
struct Args {
    /// TOML file describing the input/output layout. Defaults to the in-repo
    /// layout when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the output root directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if let Some(out) = args.out {
        config.output_root = out;
    }

    bundle::run(&config)?;
    Ok(())
}
