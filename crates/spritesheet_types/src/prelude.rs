//! Prelude module for `spritesheet_types`.
//!
//! ```
//! use spritesheet_types::prelude::*;
//!
//! let config = PackConfig::new(GridSpec::default()).with_overflow(OverflowPolicy::Strict);
//! assert_eq!(config.grid.resolve(12).rows(), 3);
//! ```

#[doc(inline)]
pub use crate::{
	PackError,
	frame::{Frame, TileSize},
	grid::{Cell, DEFAULT_COLUMNS, Grid, GridSpec, OverflowPolicy, Rect},
	packer::{PackConfig, Placement, Sheet, pack},
};
