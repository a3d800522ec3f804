//! `spritesheet-maker` command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use spritesheet_maker::{cli::Cli, generate, logging, settings::Settings};

fn main() -> Result<()> {
	let cli = Cli::parse();

	let settings = Settings::load(&cli).context("Invalid configuration")?;
	let config = settings.pack_config().context("Invalid configuration")?;

	logging::init(settings.log_level);

	generate(&cli.source_dir, &cli.output_dir, &config).with_context(|| {
		format!("Failed to generate sprite sheet from {}", cli.source_dir.display())
	})?;

	Ok(())
}
