//! Benchmark helper utilities for `spritesheet-maker`
//!
//! Synthetic frames are generated in memory so the benchmarks measure packing
//! only, without any decoding or file IO.

use image::{Rgba, RgbaImage};
use spritesheet_types::frame::Frame;

/// Generates `count` frames of `width` x `height` pixels.
///
/// Every frame carries a distinct gradient so no two frames are identical.
pub fn generate_frames(count: usize, width: u32, height: u32) -> Vec<Frame> {
	(0..count)
		.map(|i| {
			let seed = (i % 256) as u8;
			Frame::new(RgbaImage::from_fn(width, height, |x, y| {
				Rgba([seed, (x % 256) as u8, (y % 256) as u8, 255])
			}))
		})
		.collect()
}

/// Common benchmark workloads: `(frame count, tile width, tile height)`
pub mod workloads {
	/// A short walk cycle of small pixel-art tiles
	pub const WALK_CYCLE: (usize, u32, u32) = (8, 32, 32);
	/// A typical effect animation
	pub const EFFECT: (usize, u32, u32) = (30, 128, 128);
	/// Many large frames, as exported from a video
	pub const VIDEO: (usize, u32, u32) = (120, 256, 144);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_frames() {
		let frames = generate_frames(3, 4, 2);
		assert_eq!(frames.len(), 3);
		assert_eq!(frames[2].size(), spritesheet_types::frame::TileSize::new(4, 2));
		assert_ne!(frames[0], frames[1]);
	}
}
