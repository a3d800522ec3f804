//! Core types and grid packing for `spritesheet-maker`.
//!
//! A sprite sheet is a single image holding a set of same-size frames laid
//! out on a grid. This crate owns the arithmetic and the compositing:
//!
//! - [`grid`]: requested and effective grid dimensions, cells and rectangles
//! - [`frame`]: decoded RGBA frames and the tile size shared by all cells
//! - [`packer`]: pastes frames into a transparent canvas
//!
//! Decoding source files and encoding the result live in `spritesheet_io`.
//!
//! # Examples
//!
//! ```
//! use image::RgbaImage;
//! use spritesheet_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames: Vec<Frame> = (0..5).map(|_| Frame::new(RgbaImage::new(100, 100))).collect();
//!
//! if let Some(sheet) = pack(&frames, &PackConfig::default())? {
//! 	assert_eq!(sheet.dimensions(), (500, 100));
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod frame;
pub mod grid;
pub mod packer;

/// `use spritesheet_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{PackError, ParseOverflowPolicyError};
