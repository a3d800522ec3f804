//! Grid packing of uniform frames into a single sheet.
//!
//! The tile size comes from the first frame. Every frame is clipped to that
//! size and pasted, in order, into its row-major cell on a transparent RGBA
//! canvas.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use spritesheet_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames: Vec<Frame> = (0..7)
//! 	.map(|i| Frame::new(RgbaImage::from_pixel(50, 50, Rgba([i * 30, 0, 0, 255]))))
//! 	.collect();
//!
//! let config = PackConfig::new(GridSpec::new(None, std::num::NonZeroU32::new(3)));
//! let sheet = pack(&frames, &config)?.expect("frames are not empty");
//!
//! assert_eq!(sheet.dimensions(), (150, 150));
//! assert_eq!(sheet.placements()[6].rect.y, 100);
//! # Ok(())
//! # }
//! ```

use image::{RgbaImage, imageops};
use log::{debug, info, warn};

use crate::{
	error::PackError,
	frame::{Frame, TileSize},
	grid::{Cell, Grid, GridSpec, OverflowPolicy, Rect},
};


/// Configuration for a packing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackConfig {
	/// Requested grid dimensions
	pub grid: GridSpec,
	/// Cutoff rule for frames past the grid capacity
	pub overflow: OverflowPolicy,
}

impl PackConfig {
	/// Creates a configuration with the default overflow policy.
	pub fn new(grid: GridSpec) -> Self {
		Self {
			grid,
			overflow: OverflowPolicy::default(),
		}
	}

	/// Replaces the overflow policy.
	pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
		self.overflow = overflow;
		self
	}
}

/// Where a single frame was pasted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	/// Zero-based index in source order
	pub index: usize,
	/// Grid cell
	pub cell: Cell,
	/// Destination rectangle, possibly outside the canvas
	pub rect: Rect,
}

/// A finished sprite sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
	canvas: RgbaImage,
	grid: Grid,
	tile: TileSize,
	placements: Vec<Placement>,
	dropped: usize,
}

impl Sheet {
	/// Sheet width in pixels
	pub fn width(&self) -> u32 {
		self.canvas.width()
	}

	/// Sheet height in pixels
	pub fn height(&self) -> u32 {
		self.canvas.height()
	}

	/// `(width, height)` of the sheet
	pub fn dimensions(&self) -> (u32, u32) {
		self.canvas.dimensions()
	}

	/// Effective grid used for the layout
	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Tile size taken from the first frame
	pub fn tile_size(&self) -> TileSize {
		self.tile
	}

	/// Frames that were pasted, in source order
	pub fn placements(&self) -> &[Placement] {
		&self.placements
	}

	/// Number of frames dropped by the overflow cutoff
	pub fn dropped(&self) -> usize {
		self.dropped
	}

	/// Borrow the composited canvas
	pub fn image(&self) -> &RgbaImage {
		&self.canvas
	}
}

/// Packs `frames` into a single sheet.
///
/// Returns `Ok(None)` when `frames` is empty. Frames past the grid capacity,
/// as decided by [`PackConfig::overflow`], are dropped with a warning.
///
/// # Errors
///
/// Returns [`PackError::SheetTooLarge`] if the sheet size overflows `u32`.
pub fn pack(frames: &[Frame], config: &PackConfig) -> Result<Option<Sheet>, PackError> {
	let Some(first) = frames.first() else {
		warn!("No frames to pack");
		return Ok(None);
	};

	let tile = first.size();
	let grid = config.grid.resolve(frames.len());
	info!("Grid size: {grid}");

	let (width, height) = sheet_dimensions(grid, tile)?;
	info!("Sheet size: {width}x{height} (tile {tile})");

	let mut canvas = RgbaImage::new(width, height);
	let capacity = grid.capacity();
	let mut placements = Vec::with_capacity(frames.len());

	for (index, frame) in frames.iter().enumerate() {
		let position = index as u64;
		if !config.overflow.admits(position, capacity) {
			warn!(
				"Grid holds {capacity} cells, dropping {} frame(s) from index {index}",
				frames.len() - index
			);
			break;
		}

		let cell = grid.cell(position);
		let rect = cell.rect(tile);
		debug!("Frame {index}: row {}, column {}, box {rect}", cell.row, cell.column);

		let clipped = frame.clip(tile);
		imageops::replace(&mut canvas, &clipped, clamp_offset(rect.x), clamp_offset(rect.y));

		placements.push(Placement {
			index,
			cell,
			rect,
		});
	}

	let dropped = frames.len() - placements.len();

	Ok(Some(Sheet {
		canvas,
		grid,
		tile,
		placements,
		dropped,
	}))
}

fn sheet_dimensions(grid: Grid, tile: TileSize) -> Result<(u32, u32), PackError> {
	let too_large = || PackError::SheetTooLarge {
		columns: grid.columns(),
		rows: grid.rows(),
		tile_width: tile.width,
		tile_height: tile.height,
	};

	let width = tile.width.checked_mul(grid.columns()).ok_or_else(too_large)?;
	let height = tile.height.checked_mul(grid.rows()).ok_or_else(too_large)?;

	// the RGBA buffer length must fit in usize as well
	(width as usize)
		.checked_mul(height as usize)
		.and_then(|pixels| pixels.checked_mul(4))
		.ok_or_else(too_large)?;

	Ok((width, height))
}

// offsets past the canvas are clipped by `replace`
fn clamp_offset(value: u64) -> i64 {
	i64::try_from(value).unwrap_or(i64::MAX)
}
