//! `spritesheet-maker` arranges a directory of same-size images into a single
//! sprite sheet PNG.
//!
//! The packing itself lives in [`spritesheet_types`], file access in
//! [`spritesheet_io`]. This crate adds the command line, layered settings,
//! logging, and the [`generate`] pipeline tying them together.
//!
//! ```no_run
//! use std::path::Path;
//! use spritesheet_maker::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::new(GridSpec::new(None, std::num::NonZeroU32::new(8)));
//! match generate(Path::new("frames"), Path::new("out"), &config)? {
//! 	Some(path) => println!("wrote {}", path.display()),
//! 	None => println!("nothing to pack"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod settings;

/// `use spritesheet_maker::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use spritesheet_types::prelude::*;

	#[doc(inline)]
	pub use spritesheet_io::{IoError, read_frames, save_sheet};

	#[doc(inline)]
	pub use crate::pipeline::{GenerateError, generate};
}

pub use pipeline::{GenerateError, generate};
pub use spritesheet_io;
pub use spritesheet_types;
