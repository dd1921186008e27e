//! Panel driver abstraction
//!
//! This module provides the [`PanelDriver`] trait, the hardware seam of the
//! bridge. Implement it over your platform's LCD peripheral; with the
//! `graphics` feature the crate ships
//! [`GraphicPanel`](crate::graphics::GraphicPanel), an implementation over
//! any embedded-graphics draw target.
//!
//! The panel is expected to be fully configured (clocks, timings, backlight)
//! before it is handed to the bridge; the bridge only retrieves frame
//! buffers and transfers flush rectangles.

use core::fmt::Debug;

use crate::buffer::FrameBuffers;
use crate::color::Rgb565;

/// Trait for the hardware panel driver
///
/// Abstracts the two capabilities the bridge consumes: handing out the
/// panel-owned frame buffers and transferring a rectangular pixel region to
/// the physical display.
pub trait PanelDriver {
    /// Error type for panel operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Borrow descriptors for `count` frame buffers owned by the panel
    ///
    /// The buffers were allocated when the panel was configured; the
    /// descriptors are non-owning and stay valid for the panel's lifetime.
    /// Implementations should return fewer descriptors than requested rather
    /// than fail when the panel was configured with fewer buffers; the
    /// bridge verifies the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot report its buffers.
    fn frame_buffers(&mut self, count: usize) -> Result<FrameBuffers, Self::Error>;

    /// Transfer pixel data into a rectangle of the physical display
    ///
    /// The rectangle is **half-open**: `x_end` and `y_end` are not included.
    /// `pixels` holds `(x_end - x_start) * (y_end - y_start)` pixels in
    /// row-major order. The call may complete asynchronously at the driver
    /// level; the bridge does not wait on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer could not be issued.
    fn draw_bitmap(
        &mut self,
        x_start: i32,
        y_start: i32,
        x_end: i32,
        y_end: i32,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error>;
}
