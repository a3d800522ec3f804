//! Reading frames from disk and writing finished sheets.
//!
//! - [`source`]: walks a directory, decodes every file into a
//!   [`Frame`](spritesheet_types::frame::Frame)
//! - [`sink`]: encodes a [`Sheet`](spritesheet_types::packer::Sheet) to a
//!   timestamped PNG
//!
//! ```no_run
//! use std::path::Path;
//! use spritesheet_io::{read_frames, save_sheet};
//! use spritesheet_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = read_frames(Path::new("frames"))?;
//! if let Some(sheet) = pack(&frames, &PackConfig::default())? {
//! 	let path = save_sheet(&sheet, Path::new("out"))?;
//! 	println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod sink;
pub mod source;

pub use error::IoError;
pub use sink::{SHEET_FILE_PREFIX, save_sheet, save_sheet_at, sheet_file_name};
pub use source::{collect_source_files, decode_frame, read_frames};
