//! Flush rectangle types
//!
//! The UI toolkit describes damaged regions with **inclusive** end
//! coordinates: the single pixel at (3, 7) is the area (3, 7)-(3, 7). Panel
//! blit entry points use the half-open convention instead, where the end
//! coordinates are excluded. [`Area`] carries the toolkit convention through
//! the bridge and converts at the hardware boundary via
//! [`to_exclusive`](Area::to_exclusive).
//!
//! ## Example
//!
//! ```
//! use panel_bridge::Area;
//!
//! let area = Area::new(0, 0, 479, 479);
//! assert_eq!(area.width(), 480);
//! assert_eq!(area.height(), 480);
//! assert_eq!(area.to_exclusive(), (0, 0, 480, 480));
//! ```

use crate::config::Dimensions;

/// Rectangular region with inclusive start and end coordinates
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. The bridge rejects areas that do
/// not satisfy this or that fall outside the panel before they reach the
/// panel driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    /// Start column (inclusive)
    pub x1: i32,
    /// Start row (inclusive)
    pub y1: i32,
    /// End column (inclusive)
    pub x2: i32,
    /// End row (inclusive)
    pub y2: i32,
}

impl Area {
    /// Create a new area from inclusive bounds
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels (end-inclusive, so a degenerate area is 1 wide)
    pub const fn width(&self) -> u32 {
        (self.x2 - self.x1 + 1) as u32
    }

    /// Height in pixels (end-inclusive, so a degenerate area is 1 tall)
    pub const fn height(&self) -> u32 {
        (self.y2 - self.y1 + 1) as u32
    }

    /// Number of pixels covered by this area
    ///
    /// A flush buffer for the area must hold exactly this many pixels.
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Convert to the half-open rectangle the panel driver expects
    ///
    /// Returns `(x_start, y_start, x_end, y_end)` where the end coordinates
    /// are **not** included: `x_end = x2 + 1`, `y_end = y2 + 1`.
    pub const fn to_exclusive(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2 + 1, self.y2 + 1)
    }

    /// Whether the area is well-formed and lies entirely on the panel
    pub fn fits_within(&self, dimensions: Dimensions) -> bool {
        self.x1 >= 0
            && self.y1 >= 0
            && self.x1 <= self.x2
            && self.y1 <= self.y2
            && self.x2 < i32::from(dimensions.hor_res)
            && self.y2 < i32::from(dimensions.ver_res)
    }
}
