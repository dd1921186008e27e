//! Panel adapter for embedded-graphics draw targets
//!
//! This module provides [`GraphicPanel`], a [`PanelDriver`] implementation
//! over any type from the embedded-graphics ecosystem that implements
//! [`DrawTarget`] for RGB565. It lets the bridge run against simulator
//! windows, in-memory framebuffers, or any of the many display drivers that
//! already speak `DrawTarget`, without a vendor blit entry point.
//!
//! Frame-buffer descriptors are manufactured from the target's reported
//! size; flush rectangles are blitted with
//! [`fill_contiguous`](DrawTarget::fill_contiguous).
//!
//! ## Example
//!
//! ```rust,no_run
//! use panel_bridge::{Builder, Bridge, Dimensions, GraphicPanel, NoTouch};
//! # use embedded_graphics_core::draw_target::DrawTarget;
//! # use embedded_graphics_core::geometry::{OriginDimensions, Size};
//! # use embedded_graphics_core::pixelcolor::Rgb565;
//! # use embedded_graphics_core::prelude::Pixel;
//! # use core::convert::Infallible;
//! # struct MockTarget;
//! # impl OriginDimensions for MockTarget {
//! #     fn size(&self) -> Size { Size::new(480, 480) }
//! # }
//! # impl DrawTarget for MockTarget {
//! #     type Color = Rgb565;
//! #     type Error = Infallible;
//! #     fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
//! #     where
//! #         I: IntoIterator<Item = Pixel<Self::Color>>,
//! #     {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockTimer;
//! # impl panel_bridge::TickTimer for MockTimer {
//! #     type Error = Infallible;
//! #     fn start_periodic(&mut self, _period_ms: u32) -> Result<(), Self::Error> { Ok(()) }
//! #     fn stop(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let panel = GraphicPanel::new(MockTarget);
//! let dims = match Dimensions::new(480, 480) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let _bridge = Bridge::init(panel, MockTimer, NoTouch, config);
//! ```

use core::fmt::Debug;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics_core::primitives::Rectangle;

use crate::buffer::{FrameBuffer, FrameBuffers, MAX_FRAME_BUFFERS};
use crate::color::Rgb565;
use crate::panel::PanelDriver;

/// Panel driver over an embedded-graphics draw target
///
/// ## Type Parameters
///
/// * `D` - draw target with RGB565 color, e.g. a simulator display or an
///   in-memory framebuffer
pub struct GraphicPanel<D> {
    /// The wrapped draw target
    target: D,
}

impl<D> GraphicPanel<D>
where
    D: DrawTarget<Color = EgRgb565> + OriginDimensions,
{
    /// Wrap a draw target as a panel driver
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Unwrap the panel, returning the draw target
    pub fn release(self) -> D {
        self.target
    }
}

impl<D> PanelDriver for GraphicPanel<D>
where
    D: DrawTarget<Color = EgRgb565> + OriginDimensions,
    D::Error: Debug,
{
    type Error = D::Error;

    fn frame_buffers(&mut self, count: usize) -> Result<FrameBuffers, Self::Error> {
        let size = self.target.size();
        let capacity = size.width as usize * size.height as usize;
        let mut buffers = FrameBuffers::new();
        for index in 0..count.min(MAX_FRAME_BUFFERS) {
            let _ = buffers.push(FrameBuffer::new(index as u8, capacity));
        }
        Ok(buffers)
    }

    fn draw_bitmap(
        &mut self,
        x_start: i32,
        y_start: i32,
        x_end: i32,
        y_end: i32,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error> {
        // half-open rectangle, end coordinates excluded
        let width = (x_end - x_start) as u32;
        let height = (y_end - y_start) as u32;
        let rect = Rectangle::new(Point::new(x_start, y_start), Size::new(width, height));
        self.target
            .fill_contiguous(&rect, pixels.iter().copied().map(EgRgb565::from))
    }
}
