//! Error types for the bridge
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and bridge operations ([`Error`]).
//!
//! [`Error`] is generic over the error types of the three external
//! collaborators (panel driver, tick timer, touch source) so that callers
//! can still match on the underlying hardware error.
//!
//! ## Example
//!
//! ```
//! use panel_bridge::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(0, 480);
//! assert!(result.is_err());
//! ```

use core::fmt::Debug;

/// Errors that can occur when operating the bridge
///
/// Generic over the collaborator error types to preserve them:
///
/// * `PE` - panel driver error
/// * `TE` - tick timer error
/// * `SE` - touch source error
#[derive(Debug)]
pub enum Error<PE, TE, SE> {
    /// Panel driver error (frame-buffer retrieval or bitmap transfer)
    Panel(PE),
    /// Tick timer error
    ///
    /// Starting the periodic timer is part of initialization; a bridge whose
    /// tick source failed to start is never constructed.
    Timer(TE),
    /// Touch source error while polling input
    Touch(SE),
    /// The panel driver handed out the wrong number of frame buffers
    ///
    /// The bridge requires exactly
    /// [`FRAME_BUFFER_COUNT`](crate::config::FRAME_BUFFER_COUNT) buffers for
    /// double buffering.
    FrameBufferCount {
        /// Number of buffers requested
        expected: usize,
        /// Number of buffers the panel provided
        provided: usize,
    },
    /// A frame buffer is smaller than the full panel
    FrameBufferTooSmall {
        /// Required capacity in pixels (`hor_res * ver_res`)
        required: usize,
        /// Capacity the panel declared
        provided: usize,
    },
    /// A flush area is malformed or does not lie on the panel
    AreaOutOfBounds {
        /// Start column (inclusive)
        x1: i32,
        /// Start row (inclusive)
        y1: i32,
        /// End column (inclusive)
        x2: i32,
        /// End row (inclusive)
        y2: i32,
    },
    /// A flush buffer does not match the area it claims to cover
    PixelCountMismatch {
        /// Pixels the area covers
        expected: usize,
        /// Pixels provided
        provided: usize,
    },
}

impl<PE: Debug, TE: Debug, SE: Debug> core::fmt::Display for Error<PE, TE, SE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Panel(e) => write!(f, "Panel error: {e:?}"),
            Self::Timer(e) => write!(f, "Tick timer error: {e:?}"),
            Self::Touch(e) => write!(f, "Touch source error: {e:?}"),
            Self::FrameBufferCount { expected, provided } => {
                write!(
                    f,
                    "Wrong frame buffer count: expected {expected}, got {provided}"
                )
            }
            Self::FrameBufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Frame buffer too small: required {required} pixels, provided {provided}"
                )
            }
            Self::AreaOutOfBounds { x1, y1, x2, y2 } => {
                write!(f, "Flush area out of bounds: ({x1},{y1})-({x2},{y2})")
            }
            Self::PixelCountMismatch { expected, provided } => {
                write!(
                    f,
                    "Pixel count mismatch: area covers {expected} pixels, buffer holds {provided}"
                )
            }
        }
    }
}

impl<PE: Debug, TE: Debug, SE: Debug> core::error::Error for Error<PE, TE, SE> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the bridge is
/// initialized.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be
    /// called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// Both axes must be non-zero.
    InvalidDimensions {
        /// Horizontal resolution requested
        hor_res: u16,
        /// Vertical resolution requested
        ver_res: u16,
    },
    /// Tick period of zero
    ///
    /// A zero period would freeze the toolkit time base.
    InvalidTickPeriod,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { hor_res, ver_res } => {
                write!(f, "Invalid dimensions {hor_res}x{ver_res}")
            }
            Self::InvalidTickPeriod => write!(f, "Tick period must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}
