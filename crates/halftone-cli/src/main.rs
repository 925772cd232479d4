//! Command-line driver: decode an image, run the separation and
//! halftone pipeline, and write the per-channel screen templates.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::info;

/// Generate CMYK halftone screen templates from a color image.
#[derive(Parser, Debug)]
#[command(name = "halftone", version)]
struct Cli {
    /// Input image (any format the `image` crate can decode).
    input: PathBuf,

    /// Output directory for Cyan.png / Magenta.png / Yellow.png /
    /// Black.png (created if missing).
    #[arg(short, long, default_value = "screen_templates")]
    output: PathBuf,

    /// Gray component replacement percentage (0-100): how much shared
    /// gray moves from C/M/Y into the black channel.
    #[arg(long, default_value_t = 30)]
    percentage: u8,

    /// Sample box size in source pixels.
    #[arg(long, default_value_t = 10)]
    sample: u32,

    /// Output scale factor; the maximum dot diameter is sample * scale.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Screen transparency threshold (0-255).
    #[arg(long, default_value_t = halftone::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Also write a merged RGB preview of the four dot planes.
    #[arg(long)]
    composite: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let image = image::open(&cli.input)
        .with_context(|| format!("failed to decode {}", cli.input.display()))?;
    info!(
        width = image.width(),
        height = image.height(),
        "Loaded source image"
    );

    let cmyk = halftone::separate(&image, cli.percentage)?;
    let dots = halftone::halftone(&cmyk, cli.sample, cli.scale)?;
    let screens = halftone::screen_templates(&dots, cli.threshold)?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    halftone::save_screens(&cli.output, &screens)?;

    if let Some(path) = &cli.composite {
        halftone::composite(&dots)?
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote composite preview");
    }

    info!(dir = %cli.output.display(), "Done");
    Ok(())
}
