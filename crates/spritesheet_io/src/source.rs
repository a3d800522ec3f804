//! Image source: enumerates and decodes the frames of a directory.

use std::path::{Path, PathBuf};

use image::ImageReader;
use log::debug;
use spritesheet_types::frame::Frame;
use walkdir::WalkDir;

use crate::error::IoError;

/// Lists every file below `root`, recursively, sorted by path.
///
/// Directories are walked but not returned. Symbolic links are listed under
/// their own path unless they point to a directory; symlinked directories
/// are not descended into. A dangling link is listed too and fails on decode.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
	let mut files = Vec::new();

	for entry in WalkDir::new(root).follow_links(false) {
		let entry = entry?;
		let file_type = entry.file_type();
		let is_file = file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir());
		if is_file {
			files.push(entry.into_path());
		}
	}

	files.sort();
	Ok(files)
}

/// Decodes a single file into a frame.
///
/// The format is guessed from the file content. The file handle is released
/// before this returns.
pub fn decode_frame(path: &Path) -> Result<Frame, IoError> {
	let read_error = |source| IoError::Read {
		path: path.to_path_buf(),
		source,
	};

	let reader = ImageReader::open(path).map_err(read_error)?;
	let reader = reader.with_guessed_format().map_err(read_error)?;
	let image = reader.decode().map_err(|source| IoError::Decode {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(Frame::from(image))
}

/// Reads every image below `root` in path order.
///
/// Stops at the first file that is not a decodable image.
pub fn read_frames(root: &Path) -> Result<Vec<Frame>, IoError> {
	let files = collect_source_files(root)?;
	let mut frames = Vec::with_capacity(files.len());

	for path in &files {
		debug!("Read file: {}", path.display());
		frames.push(decode_frame(path)?);
	}

	Ok(frames)
}
