//! Grid arithmetic for sprite sheets.
//!
//! A grid is resolved from a [`GridSpec`] and the number of frames to pack.
//! Frames are laid out row-major: frame `i` lands in column `i % columns`
//! and row `i / columns`.

use std::{fmt::Display, num::NonZeroU32, str::FromStr};

use serde::Deserialize;

use crate::{error::ParseOverflowPolicyError, frame::TileSize};

/// Column count used when none is given explicitly
pub const DEFAULT_COLUMNS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Requested grid dimensions.
///
/// Either value may be omitted. Missing columns fall back to
/// [`DEFAULT_COLUMNS`], missing rows are derived from the frame count.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use spritesheet_types::grid::GridSpec;
///
/// let spec = GridSpec::new(None, NonZeroU32::new(3));
/// let grid = spec.resolve(7);
///
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.rows(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridSpec {
	/// Explicit row count
	pub rows: Option<NonZeroU32>,
	/// Explicit column count
	pub columns: Option<NonZeroU32>,
}

impl GridSpec {
	/// Creates a grid specification from optional row and column counts.
	pub fn new(rows: Option<NonZeroU32>, columns: Option<NonZeroU32>) -> Self {
		Self {
			rows,
			columns,
		}
	}

	/// Resolves the effective grid for `frame_count` frames.
	///
	/// Rows are rounded up, so a partially filled last row still gets a full
	/// row of cells. Both dimensions are at least 1, even for zero frames.
	pub fn resolve(&self, frame_count: usize) -> Grid {
		let columns = self.columns.unwrap_or(DEFAULT_COLUMNS).get();
		let rows = match self.rows {
			Some(rows) => rows.get(),
			None => {
				let needed = frame_count.div_ceil(columns as usize).max(1);
				u32::try_from(needed).unwrap_or(u32::MAX)
			}
		};

		Grid {
			rows,
			columns,
		}
	}
}

/// Effective grid dimensions, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
	rows: u32,
	columns: u32,
}

impl Grid {
	/// Number of rows
	pub fn rows(&self) -> u32 {
		self.rows
	}

	/// Number of columns
	pub fn columns(&self) -> u32 {
		self.columns
	}

	/// Total number of cells, `rows * columns`.
	pub fn capacity(&self) -> u64 {
		u64::from(self.rows) * u64::from(self.columns)
	}

	/// Returns the cell for the frame at zero-based `index`.
	///
	/// The row is not bounded by [`Grid::rows`]; callers decide what to do
	/// with indices past [`Grid::capacity`].
	pub fn cell(&self, index: u64) -> Cell {
		let columns = u64::from(self.columns);
		Cell {
			row: index / columns,
			column: index % columns,
		}
	}
}

impl Display for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "columns = {}, rows = {}", self.columns, self.rows)
	}
}

/// Position of a frame in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
	/// Zero-based row
	pub row: u64,
	/// Zero-based column
	pub column: u64,
}

impl Cell {
	/// Destination rectangle of this cell on the sheet.
	///
	/// The x step is the tile width and the y step the tile height.
	pub fn rect(&self, tile: TileSize) -> Rect {
		Rect {
			x: self.column * u64::from(tile.width),
			y: self.row * u64::from(tile.height),
			width: tile.width,
			height: tile.height,
		}
	}
}

/// Pixel rectangle on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
	/// Left edge
	pub x: u64,
	/// Top edge
	pub y: u64,
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl Display for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"({}, {}, {}, {})",
			self.x,
			self.y,
			self.x + u64::from(self.width),
			self.y + u64::from(self.height)
		)
	}
}

/// What to do with frames that do not fit in the grid.
///
/// Frames are never rejected with an error; frames past the cutoff are
/// dropped with a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
	/// Stop once `index > rows * columns`.
	///
	/// The frame at `index == rows * columns` is still placed. Its cell lies
	/// one row below the canvas, so nothing of it is visible.
	#[default]
	Inclusive,

	/// Stop once `index >= rows * columns`.
	Strict,
}

impl OverflowPolicy {
	/// Returns `true` if the frame at `index` is still placed.
	pub fn admits(self, index: u64, capacity: u64) -> bool {
		match self {
			Self::Inclusive => index <= capacity,
			Self::Strict => index < capacity,
		}
	}
}

impl Display for OverflowPolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Inclusive => write!(f, "inclusive"),
			Self::Strict => write!(f, "strict"),
		}
	}
}

impl FromStr for OverflowPolicy {
	type Err = ParseOverflowPolicyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"inclusive" => Ok(Self::Inclusive),
			"strict" => Ok(Self::Strict),
			_ => Err(ParseOverflowPolicyError(s.to_string())),
		}
	}
}
