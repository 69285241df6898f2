use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render livestream lower-third overlays from a TOML spec into ./output/slideNN.png.
#[derive(Parser, Debug)]
#[command(name = "livestream-imagegen", version, about)]
struct Cli {
    /// TOML spec file with [setup], [speaker] and [[slide]] tables.
    #[arg(value_name = "SPECFILE")]
    spec: PathBuf,
}

const OUTPUT_DIR: &str = "output";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let deck = livestream_imagegen::Deck::load(&cli.spec)?;
    let out = livestream_imagegen::render_deck(&deck, Path::new(OUTPUT_DIR))?;
    tracing::info!(
        written = out.written.len(),
        removed = out.removed.len(),
        "done"
    );
    Ok(())
}
