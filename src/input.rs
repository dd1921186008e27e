//! Pointer input seam
//!
//! The toolkit polls a pointer-type input device on its own schedule. The
//! bridge does not implement a touch controller protocol; it delegates to an
//! external [`TouchSource`] collaborator supplied at initialization. Boards
//! without touch hardware use the [`NoTouch`] stub.

use core::convert::Infallible;
use core::fmt::Debug;

/// State of a pointer-type input device at one poll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Column of the last known contact
    pub x: i32,
    /// Row of the last known contact
    pub y: i32,
    /// Whether the pointer is currently pressed
    pub pressed: bool,
}

impl PointerState {
    /// A pressed pointer at the given position
    pub const fn pressed(x: i32, y: i32) -> Self {
        Self { x, y, pressed: true }
    }

    /// A released pointer, keeping the last known position
    pub const fn released(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            pressed: false,
        }
    }
}

/// Trait for the external touch-driver collaborator
///
/// Implementations poll the touch controller and report the current pointer
/// state. Polling must not block; it runs inside the toolkit's input read
/// cycle.
pub trait TouchSource {
    /// Error type for poll operations
    type Error: Debug;

    /// Poll the current pointer state
    ///
    /// # Errors
    ///
    /// Returns an error if the touch controller could not be read.
    fn poll(&mut self) -> Result<PointerState, Self::Error>;
}

/// Input stub for boards without touch hardware
///
/// Always reports a released pointer at the origin and never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTouch;

impl TouchSource for NoTouch {
    type Error = Infallible;

    fn poll(&mut self) -> Result<PointerState, Self::Error> {
        Ok(PointerState::default())
    }
}
