//! Image sink: writes a finished sheet as a timestamped PNG.

use std::{
	fmt::Display,
	path::{Path, PathBuf},
};

use chrono::{DateTime, Local, TimeZone};
use image::ImageFormat;
use log::info;
use spritesheet_types::packer::Sheet;

use crate::error::IoError;

/// Prefix of every generated sheet file name
pub const SHEET_FILE_PREFIX: &str = "sprite_sheet";

/// Returns the file name for a sheet saved at `at`.
///
/// The timestamp has second resolution, e.g. `sprite_sheet20240131T235959.png`.
pub fn sheet_file_name<Tz>(at: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	format!("{SHEET_FILE_PREFIX}{}.png", at.format("%Y%m%dT%H%M%S"))
}

/// Saves `sheet` into `output_dir`, named after the current local time.
///
/// Returns the path of the written file.
pub fn save_sheet(sheet: &Sheet, output_dir: &Path) -> Result<PathBuf, IoError> {
	save_sheet_at(sheet, output_dir, &Local::now())
}

/// Saves `sheet` into `output_dir`, named after `at`.
pub fn save_sheet_at<Tz>(
	sheet: &Sheet,
	output_dir: &Path,
	at: &DateTime<Tz>,
) -> Result<PathBuf, IoError>
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	let path = output_dir.join(sheet_file_name(at));

	sheet.image().save_with_format(&path, ImageFormat::Png).map_err(|source| IoError::Encode {
		path: path.clone(),
		source,
	})?;

	info!("Sprite sheet saved: {} ({}x{})", path.display(), sheet.width(), sheet.height());
	Ok(path)
}
