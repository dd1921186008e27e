//! Display bridge for immediate-mode UI toolkits
//!
//! Binds a UI toolkit's rendering contract (a double-buffered draw buffer, a
//! flush target, a tick source, a pointer input) to a hardware RGB LCD panel
//! driver. The panel owns the pixel memory; the bridge holds non-owning
//! descriptors, converts the toolkit's inclusive flush rectangles to the
//! panel's half-open convention, and keeps the toolkit time base ticking
//! from a periodic timer.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` panel adapter (with `graphics` feature)
//! - Double-buffered flush protocol with exactly-once ready signaling
//! - Interrupt-safe tick source
//!
//! ## Usage
//!
//! ```rust,no_run
//! use panel_bridge::{
//!     Area, Bridge, Builder, Dimensions, FrameBuffer, FrameBuffers, NoTouch, PanelDriver,
//!     Rgb565, TickTimer,
//! };
//! # use core::convert::Infallible;
//! # struct MockPanel;
//! # impl PanelDriver for MockPanel {
//! #     type Error = Infallible;
//! #     fn frame_buffers(&mut self, _count: usize) -> Result<FrameBuffers, Self::Error> {
//! #         Ok(FrameBuffers::pair(
//! #             FrameBuffer::new(0, 480 * 480),
//! #             FrameBuffer::new(1, 480 * 480),
//! #         ))
//! #     }
//! #     fn draw_bitmap(
//! #         &mut self,
//! #         _x_start: i32,
//! #         _y_start: i32,
//! #         _x_end: i32,
//! #         _y_end: i32,
//! #         _pixels: &[Rgb565],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockTimer;
//! # impl TickTimer for MockTimer {
//! #     type Error = Infallible;
//! #     fn start_periodic(&mut self, _period_ms: u32) -> Result<(), Self::Error> { Ok(()) }
//! #     fn stop(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let dims = match Dimensions::new(480, 480) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut bridge = match Bridge::init(MockPanel, MockTimer, NoTouch, config) {
//!     Ok(bridge) => bridge,
//!     Err(_) => return,
//! };
//!
//! // the toolkit flushes rendered regions through the bridge
//! let area = Area::new(0, 0, 9, 9);
//! let pixels = [Rgb565::BLACK; 100];
//! let _ = bridge.flush(&area, &pixels);
//!
//! // the periodic timer callback advances the time base
//! bridge.tick();
//! ```
//!
//! In firmware, `Bridge::init` runs once after the panel is configured, the
//! platform timer invokes [`Bridge::tick`] every tick period, and the main
//! loop calls [`Bridge::drive`] repeatedly.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Flush rectangle types
pub mod area;
/// The display bridge itself
pub mod bridge;
/// Frame-buffer descriptors and draw-buffer bookkeeping
pub mod buffer;
/// Native pixel format
pub mod color;
/// Bridge configuration types and builder
pub mod config;
/// Error types for the bridge
pub mod error;
/// Pointer input seam
pub mod input;
/// Panel driver abstraction
pub mod panel;
/// Toolkit time base and periodic timer seam
pub mod tick;

/// Panel adapter over embedded-graphics draw targets (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use area::Area;
pub use bridge::{Bridge, BridgeError, DisplayTarget, UiLoop};
pub use buffer::{DrawBuffer, FrameBuffer, FrameBuffers, MAX_FRAME_BUFFERS};
pub use color::Rgb565;
pub use config::{
    Builder, Config, DEFAULT_LOOP_DELAY_MS, DEFAULT_TICK_PERIOD_MS, Dimensions,
    FRAME_BUFFER_COUNT,
};
pub use error::{BuilderError, Error};
pub use input::{NoTouch, PointerState, TouchSource};
pub use panel::PanelDriver;
pub use tick::{TickCounter, TickTimer};

#[cfg(feature = "graphics")]
pub use graphics::GraphicPanel;
