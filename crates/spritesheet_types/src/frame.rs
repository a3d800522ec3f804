//! Decoded source frames.

use std::fmt::Display;

use image::{DynamicImage, RgbaImage, imageops};

/// Width and height shared by every cell of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl TileSize {
	/// Creates a new tile size.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
		}
	}
}

impl Display for TileSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

/// One decoded source image, stored as RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	pixels: RgbaImage,
}

impl Frame {
	/// Wraps an RGBA buffer.
	pub fn new(pixels: RgbaImage) -> Self {
		Self {
			pixels,
		}
	}

	/// Frame width in pixels
	pub fn width(&self) -> u32 {
		self.pixels.width()
	}

	/// Frame height in pixels
	pub fn height(&self) -> u32 {
		self.pixels.height()
	}

	/// Size of this frame as a tile
	pub fn size(&self) -> TileSize {
		TileSize::new(self.width(), self.height())
	}

	/// Borrow the pixel buffer
	pub fn pixels(&self) -> &RgbaImage {
		&self.pixels
	}

	/// Crops the frame to `tile`, anchored at the frame's own origin.
	///
	/// The crop is clamped to the frame on each axis: a frame narrower or
	/// shorter than the tile keeps its own width or height on that axis.
	pub fn clip(&self, tile: TileSize) -> RgbaImage {
		if self.size() == tile {
			return self.pixels.clone();
		}
		imageops::crop_imm(&self.pixels, 0, 0, tile.width, tile.height).to_image()
	}
}

impl From<RgbaImage> for Frame {
	fn from(pixels: RgbaImage) -> Self {
		Self::new(pixels)
	}
}

impl From<DynamicImage> for Frame {
	fn from(image: DynamicImage) -> Self {
		Self::new(image.into_rgba8())
	}
}
