//! Native pixel format for RGB LCD panels
//!
//! This module defines the [`Rgb565`] pixel type used for all pixel data
//! crossing the bridge: the toolkit renders RGB565 into the panel-owned frame
//! buffers, and flush regions carry slices of it to the blit entry point.
//!
//! ## Layout
//!
//! One pixel is a single `u16` with the common 5-6-5 packing:
//!
//! | Bits  | Channel |
//! |-------|---------|
//! | 15-11 | Red     |
//! | 10-5  | Green   |
//! | 4-0   | Blue    |
//!
//! ## Example
//!
//! ```
//! use panel_bridge::Rgb565;
//!
//! let red = Rgb565::new(31, 0, 0);
//! assert_eq!(red.raw(), 0xF800);
//!
//! let white = Rgb565::from_raw(0xFFFF);
//! assert_eq!(white, Rgb565::WHITE);
//! ```

/// A packed RGB565 pixel as transferred to the panel
///
/// With the `graphics` feature enabled this converts to and from the
/// embedded-graphics `Rgb565` color so pixel slices can be blitted through
/// any `DrawTarget`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb565(u16);

impl Rgb565 {
    /// All channels at minimum
    pub const BLACK: Self = Self(0x0000);
    /// All channels at maximum
    pub const WHITE: Self = Self(0xFFFF);

    /// Create a pixel from channel values
    ///
    /// Channel values use the native bit depth (red and blue 0-31, green
    /// 0-63); out-of-range bits are masked off.
    ///
    /// ## Example
    ///
    /// ```
    /// use panel_bridge::Rgb565;
    ///
    /// assert_eq!(Rgb565::new(0, 63, 0).raw(), 0x07E0);
    /// assert_eq!(Rgb565::new(0, 0, 31).raw(), 0x001F);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0x1F) << 11) | ((g as u16 & 0x3F) << 5) | (b as u16 & 0x1F))
    }

    /// Create a pixel from its raw packed value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

#[cfg(feature = "graphics")]
impl From<Rgb565> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Rgb565 {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        use embedded_graphics_core::prelude::RawData;
        Self(RawU16::from(color).into_inner())
    }
}
