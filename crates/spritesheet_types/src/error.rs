//! Error types for sheet packing.

use thiserror::Error;

/// Errors that can occur when packing frames into a sheet
#[derive(Debug, Error)]
pub enum PackError {
	/// The sheet dimensions do not fit in a `u32`
	#[error(
		"Sheet too large: {columns} columns x {tile_width} px by {rows} rows x {tile_height} px exceeds the maximum image size"
	)]
	SheetTooLarge {
		/// Effective column count
		columns: u32,
		/// Effective row count
		rows: u32,
		/// Tile width in pixels
		tile_width: u32,
		/// Tile height in pixels
		tile_height: u32,
	},
}

/// Error returned when parsing an unknown overflow policy name
#[derive(Debug, Error)]
#[error("Unknown overflow policy '{0}', expected 'inclusive' or 'strict'")]
pub struct ParseOverflowPolicyError(pub String);
