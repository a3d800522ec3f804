//! End-to-end run: read frames, pack them, write the sheet.

use std::path::{Path, PathBuf};

use log::{info, warn};
use spritesheet_io::{IoError, read_frames, save_sheet};
use spritesheet_types::{
	PackError,
	packer::{PackConfig, pack},
};
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum GenerateError {
	/// Reading a source image or writing the sheet failed
	#[error(transparent)]
	Io(#[from] IoError),

	/// The frames could not be packed
	#[error(transparent)]
	Pack(#[from] PackError),
}

/// Builds one sprite sheet from every image below `source_dir`.
///
/// Returns the path of the written PNG, or `None` if `source_dir` holds no
/// files, in which case nothing is written.
///
/// # Errors
///
/// Fails on the first file that cannot be decoded; no partial sheet is
/// written in that case.
pub fn generate(
	source_dir: &Path,
	output_dir: &Path,
	config: &PackConfig,
) -> Result<Option<PathBuf>, GenerateError> {
	info!("Source dir: {}", source_dir.display());
	info!("Output dir: {}", output_dir.display());

	let frames = read_frames(source_dir)?;
	if frames.is_empty() {
		warn!("Source dir is empty");
		return Ok(None);
	}
	info!("Source images count: {}", frames.len());

	let Some(sheet) = pack(&frames, config)? else {
		return Ok(None);
	};
	drop(frames);

	let path = save_sheet(&sheet, output_dir)?;
	Ok(Some(path))
}
