//! Toolkit time base and the periodic timer seam
//!
//! The toolkit does not read a live clock; its notion of elapsed time is a
//! counter advanced from a periodic timer callback. [`TickCounter`] is that
//! counter, and [`TickTimer`] is the platform timer that schedules the
//! callback. Constant drift between accumulated ticks and wall-clock time is
//! an accepted limitation as long as the period is fixed.

use core::fmt::Debug;
use core::sync::atomic::{AtomicU32, Ordering};

/// Trait for the platform's periodic timer
///
/// The timer invokes [`Bridge::tick`](crate::bridge::Bridge::tick) (or
/// [`TickCounter::tick`] directly) once per period, typically from interrupt
/// or timer-task context. It runs for the remainder of the process lifetime
/// unless [`stop`](Self::stop) is called through the explicit shutdown path.
pub trait TickTimer {
    /// Error type for timer operations
    type Error: Debug;

    /// Arm the timer to fire every `period_ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns an error if the timer could not be created or started. The
    /// bridge treats this as fatal at initialization: a silent tick source
    /// would break all toolkit timing.
    fn start_periodic(&mut self, period_ms: u32) -> Result<(), Self::Error>;

    /// Stop the timer
    ///
    /// # Errors
    ///
    /// Returns an error if the timer could not be stopped.
    fn stop(&mut self) -> Result<(), Self::Error>;
}

/// Toolkit time base, advanced by exactly one period per tick
///
/// [`tick`](Self::tick) takes `&self` and performs a single relaxed atomic
/// add, so the timer callback may run from interrupt context against a
/// shared reference while the main loop reads
/// [`elapsed_ms`](Self::elapsed_ms). No further synchronization is layered
/// on top. The counter wraps after about 49 days at millisecond resolution.
#[derive(Debug)]
pub struct TickCounter {
    /// Accumulated milliseconds (wrapping)
    elapsed_ms: AtomicU32,
    /// Fixed period added per tick
    period_ms: u32,
}

impl TickCounter {
    /// Create a counter at zero with the given period
    pub const fn new(period_ms: u32) -> Self {
        Self {
            elapsed_ms: AtomicU32::new(0),
            period_ms,
        }
    }

    /// Advance the time base by exactly one period
    ///
    /// Cheap and non-blocking; safe to call from the timer interrupt.
    pub fn tick(&self) {
        self.elapsed_ms.fetch_add(self.period_ms, Ordering::Relaxed);
    }

    /// Accumulated milliseconds since initialization
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms.load(Ordering::Relaxed)
    }

    /// The fixed period added per tick
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
