//! Error types for reading frames and writing sheets.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Errors that can occur while reading source images or writing a sheet
#[derive(Debug, Error)]
pub enum IoError {
	/// The source directory could not be traversed
	#[error("Failed to walk source directory: {0}")]
	Walk(#[from] walkdir::Error),

	/// A source file could not be opened or read
	#[error("Failed to read '{}': {source}", path.display())]
	Read {
		/// Offending file
		path: PathBuf,
		/// Underlying IO error
		source: std::io::Error,
	},

	/// A source file is not a decodable image
	#[error("'{}' is not a valid image: {source}", path.display())]
	Decode {
		/// Offending file
		path: PathBuf,
		/// Underlying decoder error
		source: ImageError,
	},

	/// The sheet could not be encoded or written
	#[error("Failed to write sprite sheet '{}': {source}", path.display())]
	Encode {
		/// Destination file
		path: PathBuf,
		/// Underlying encoder error
		source: ImageError,
	},
}
