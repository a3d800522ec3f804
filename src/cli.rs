//! Command-line surface.

use std::{
	fs,
	num::NonZeroU32,
	path::{Path, PathBuf},
};

use clap::Parser;
use spritesheet_types::grid::OverflowPolicy;

use crate::logging::LogLevel;

/// Generate a sprite sheet image from a directory of same-size frames
#[derive(Debug, Parser)]
#[command(name = "spritesheet-maker")]
#[command(version)]
#[command(about = "Generate a sprite sheet image from a directory of same-size frames", long_about = None)]
pub struct Cli {
	/// Directory with source images for sprite sheet generation
	#[arg(value_name = "sourceDir", value_parser = readable_dir)]
	pub source_dir: PathBuf,

	/// Directory for the result
	#[arg(value_name = "outputDir", value_parser = writable_dir)]
	pub output_dir: PathBuf,

	/// Rows count. Default: enough rows for every frame
	#[arg(long, value_name = "ROWS", value_parser = positive_int)]
	pub rows: Option<NonZeroU32>,

	/// Columns count. Default: 5
	#[arg(long, value_name = "COLUMNS", value_parser = positive_int)]
	pub columns: Option<NonZeroU32>,

	/// Logging level. Default: info
	#[arg(long = "logLevel", value_name = "LEVEL", value_enum)]
	pub log_level: Option<LogLevel>,

	/// Cutoff for frames past the grid: `inclusive` or `strict`. Default: inclusive
	#[arg(long, value_name = "POLICY")]
	pub overflow: Option<OverflowPolicy>,

	/// TOML file with default settings
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

/// Accepts an existing, readable directory and returns its absolute path.
pub fn readable_dir(value: &str) -> Result<PathBuf, String> {
	let dir = existing_dir(value)?;
	if fs::read_dir(&dir).is_err() {
		return Err(format!("Directory {value} not readable"));
	}
	absolute(&dir)
}

/// Accepts an existing, writable directory and returns its absolute path.
///
/// Writability is tested by creating, then removing, a temporary file in the
/// directory, so the answer holds for the current process.
pub fn writable_dir(value: &str) -> Result<PathBuf, String> {
	let dir = existing_dir(value)?;
	let scratch = tempfile::Builder::new().prefix(".spritesheet-maker").tempfile_in(&dir);
	if scratch.is_err() {
		return Err(format!("Directory {value} not writable"));
	}
	absolute(&dir)
}

/// Parses a grid dimension, which must be an integer of at least 1.
pub fn positive_int(value: &str) -> Result<NonZeroU32, String> {
	let parsed: i64 = value.trim().parse().map_err(|_| "Must be a integer number".to_string())?;
	if parsed < 1 {
		return Err("Argument must be >= 1".to_string());
	}
	u32::try_from(parsed)
		.ok()
		.and_then(NonZeroU32::new)
		.ok_or_else(|| format!("Argument must be <= {}", u32::MAX))
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
	let dir = PathBuf::from(value);
	if !dir.is_dir() {
		return Err(format!("Not a directory: {value}"));
	}
	Ok(dir)
}

fn absolute(dir: &Path) -> Result<PathBuf, String> {
	std::path::absolute(dir).map_err(|e| format!("Cannot resolve {}: {e}", dir.display()))
}
