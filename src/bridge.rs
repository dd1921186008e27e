//! The display bridge
//!
//! [`Bridge`] binds the UI toolkit's rendering contract (a draw buffer, a
//! flush target, a tick source, a pointer input) to a hardware panel
//! driver's capabilities (frame buffers, a bitmap blit entry point). Control
//! flow is initialization-then-loop: [`Bridge::init`] runs once at startup,
//! [`Bridge::drive`] runs repeatedly from the main control loop, and
//! [`Bridge::tick`] runs from the periodic timer callback.
//!
//! The bridge is an explicit context object: all state that a C shim would
//! keep in process-wide statics (the draw-buffer descriptor, the frame
//! buffer references, the tick counter) lives in the `Bridge` instance, of
//! which one exists per process.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::area::Area;
use crate::buffer::DrawBuffer;
use crate::color::Rgb565;
use crate::config::{Config, Dimensions, FRAME_BUFFER_COUNT};
use crate::error::Error;
use crate::input::{PointerState, TouchSource};
use crate::panel::PanelDriver;
use crate::tick::{TickCounter, TickTimer};

/// Bridge error specialized to the collaborator error types
pub type BridgeError<P, T, S> = Error<
    <P as PanelDriver>::Error,
    <T as TickTimer>::Error,
    <S as TouchSource>::Error,
>;

type BridgeResult<V, P, T, S> = Result<V, BridgeError<P, T, S>>;

/// Capability interface the toolkit renders through
///
/// The toolkit depends on this trait instead of a raw flush callback
/// pointer. [`Bridge`] implements it by transferring the region to the panel
/// driver and signaling the draw buffer free again.
pub trait DisplayTarget {
    /// Error type for flush operations
    type Error: Debug;

    /// Transfer a rendered region to the physical display
    ///
    /// `area` uses inclusive end coordinates; `pixels` holds exactly
    /// `area.pixel_count()` pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is invalid or the transfer failed.
    fn flush(&mut self, area: &Area, pixels: &[Rgb565]) -> Result<(), Self::Error>;
}

/// The toolkit's pending-work processor
///
/// Covers the work the toolkit performs on the main loop: internal timers,
/// animations, and redraw scheduling. [`Bridge::drive`] invokes it once per
/// iteration, feeding it the current time base.
pub trait UiLoop {
    /// Process pending toolkit work
    fn run_pending(&mut self, elapsed_ms: u32);
}

/// Display bridge between a UI toolkit and a panel driver
///
/// ## Type Parameters
///
/// * `P` - panel driver implementing [`PanelDriver`]
/// * `T` - periodic timer implementing [`TickTimer`]
/// * `S` - touch collaborator implementing [`TouchSource`] (use
///   [`NoTouch`](crate::input::NoTouch) for boards without touch hardware)
///
/// Construction *is* initialization: a `Bridge` only exists once the frame
/// buffers are retrieved, the draw buffer is built, and the tick timer is
/// running, so double initialization and use-before-init are
/// unrepresentable.
pub struct Bridge<P, T, S>
where
    P: PanelDriver,
    T: TickTimer,
    S: TouchSource,
{
    /// Configured hardware panel, owned for the bridge lifetime
    panel: P,
    /// Periodic tick timer, running from init until shutdown
    timer: T,
    /// External touch collaborator
    touch: S,
    /// Bridge configuration
    config: Config,
    /// The one draw-buffer descriptor registered with the toolkit
    draw_buffer: DrawBuffer,
    /// Toolkit time base
    tick: TickCounter,
}

impl<P, T, S> Bridge<P, T, S>
where
    P: PanelDriver,
    T: TickTimer,
    S: TouchSource,
{
    /// Initialize the bridge
    ///
    /// Retrieves exactly [`FRAME_BUFFER_COUNT`] frame buffers from the
    /// panel, builds the double-buffered draw descriptor over them, and
    /// starts the periodic tick timer at the configured period. On success
    /// the toolkit is ready to render and the timer is active for the
    /// remainder of the process lifetime (or until [`shutdown`](Self::shutdown)).
    ///
    /// # Errors
    ///
    /// * [`Error::Panel`] if the frame buffers could not be retrieved
    /// * [`Error::FrameBufferCount`] if the panel provided a buffer count
    ///   other than two
    /// * [`Error::FrameBufferTooSmall`] if a buffer holds fewer pixels than
    ///   the full panel
    /// * [`Error::Timer`] if the tick timer could not be started; a bridge
    ///   without a working tick source is never constructed
    pub fn init(mut panel: P, mut timer: T, touch: S, config: Config) -> BridgeResult<Self, P, T, S> {
        let buffers = panel
            .frame_buffers(FRAME_BUFFER_COUNT)
            .map_err(Error::Panel)?;
        if buffers.len() != FRAME_BUFFER_COUNT {
            return Err(Error::FrameBufferCount {
                expected: FRAME_BUFFER_COUNT,
                provided: buffers.len(),
            });
        }

        let required = config.dimensions.pixel_count();
        for buffer in buffers.iter() {
            if buffer.capacity() < required {
                return Err(Error::FrameBufferTooSmall {
                    required,
                    provided: buffer.capacity(),
                });
            }
        }

        let (first, second) = match (buffers.get(0), buffers.get(1)) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                return Err(Error::FrameBufferCount {
                    expected: FRAME_BUFFER_COUNT,
                    provided: buffers.len(),
                });
            }
        };
        let draw_buffer = DrawBuffer::new(first, second, required);

        timer
            .start_periodic(config.tick_period_ms)
            .map_err(Error::Timer)?;

        debug!(
            "display bridge up: {}x{}, tick every {} ms",
            config.dimensions.hor_res, config.dimensions.ver_res, config.tick_period_ms
        );

        Ok(Self {
            panel,
            timer,
            touch,
            tick: TickCounter::new(config.tick_period_ms),
            draw_buffer,
            config,
        })
    }

    /// Transfer a rendered region to the panel
    ///
    /// Converts the area's inclusive end coordinates to the panel driver's
    /// half-open convention and issues the bitmap transfer. The draw buffer
    /// is signaled free **exactly once per accepted invocation**, even when
    /// the transfer itself reports an error, so the toolkit's buffer
    /// rotation never stalls; the panel error is still returned.
    ///
    /// Invocations rejected by validation do not touch the rotation state.
    ///
    /// # Errors
    ///
    /// * [`Error::AreaOutOfBounds`] if the area is malformed or off-panel
    /// * [`Error::PixelCountMismatch`] if `pixels` does not hold exactly
    ///   `area.pixel_count()` pixels
    /// * [`Error::Panel`] if the transfer failed
    pub fn flush(&mut self, area: &Area, pixels: &[Rgb565]) -> BridgeResult<(), P, T, S> {
        if !area.fits_within(self.config.dimensions) {
            return Err(Error::AreaOutOfBounds {
                x1: area.x1,
                y1: area.y1,
                x2: area.x2,
                y2: area.y2,
            });
        }
        let expected = area.pixel_count();
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                provided: pixels.len(),
            });
        }

        self.draw_buffer.begin_flush();
        let (x_start, y_start, x_end, y_end) = area.to_exclusive();
        let result = self
            .panel
            .draw_bitmap(x_start, y_start, x_end, y_end, pixels)
            .map_err(Error::Panel);
        self.draw_buffer.flush_ready();
        result
    }

    /// Advance the toolkit time base by one tick period
    ///
    /// Called by the periodic timer, typically from interrupt or timer-task
    /// context; takes `&self` and is non-blocking.
    pub fn tick(&self) {
        self.tick.tick();
    }

    /// Run one main-loop iteration
    ///
    /// Processes the toolkit's pending work first, then yields the processor
    /// for the configured loop delay. Call at least as often as the shortest
    /// timer or animation period the UI requires.
    pub fn drive<U: UiLoop, D: DelayNs>(&mut self, ui: &mut U, delay: &mut D) {
        ui.run_pending(self.tick.elapsed_ms());
        delay.delay_ms(self.config.loop_delay_ms);
    }

    /// Poll the pointer input device
    ///
    /// # Errors
    ///
    /// Returns [`Error::Touch`] if the touch collaborator failed.
    pub fn poll_input(&mut self) -> BridgeResult<PointerState, P, T, S> {
        self.touch.poll().map_err(Error::Touch)
    }

    /// Tear the bridge down
    ///
    /// Stops the tick timer and returns the panel and touch source to the
    /// caller. Fire-and-forget firmware can simply never call this; the
    /// timer then runs until reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timer`] if the timer could not be stopped; the
    /// collaborators are dropped in that case.
    pub fn shutdown(self) -> BridgeResult<(P, S), P, T, S> {
        let Self {
            panel,
            mut timer,
            touch,
            draw_buffer,
            ..
        } = self;
        timer.stop().map_err(Error::Timer)?;
        debug!(
            "display bridge down after {} completed flushes",
            draw_buffer.completed_flushes()
        );
        Ok((panel, touch))
    }

    /// Panel resolution the bridge was configured for
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Bridge configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The draw-buffer descriptor registered with the toolkit
    pub fn draw_buffer(&self) -> &DrawBuffer {
        &self.draw_buffer
    }

    /// Accumulated toolkit time base in milliseconds
    pub fn elapsed_ms(&self) -> u32 {
        self.tick.elapsed_ms()
    }
}

impl<P, T, S> DisplayTarget for Bridge<P, T, S>
where
    P: PanelDriver,
    T: TickTimer,
    S: TouchSource,
{
    type Error = BridgeError<P, T, S>;

    fn flush(&mut self, area: &Area, pixels: &[Rgb565]) -> Result<(), Self::Error> {
        Bridge::flush(self, area, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{FrameBuffer, FrameBuffers};
    use crate::config::Builder;
    use crate::input::NoTouch;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[derive(Debug)]
    struct MockPanel {
        buffer_requests: Vec<usize>,
        draw_calls: Vec<(i32, i32, i32, i32, usize)>,
        buffer_count: usize,
        buffer_capacity: usize,
        fail_draw: bool,
    }

    impl MockPanel {
        fn new(capacity: usize) -> Self {
            Self {
                buffer_requests: Vec::new(),
                draw_calls: Vec::new(),
                buffer_count: 2,
                buffer_capacity: capacity,
                fail_draw: false,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct DrawFailed;

    impl PanelDriver for MockPanel {
        type Error = DrawFailed;

        fn frame_buffers(&mut self, count: usize) -> Result<FrameBuffers, Self::Error> {
            self.buffer_requests.push(count);
            let mut buffers = FrameBuffers::new();
            for index in 0..self.buffer_count.min(count) {
                let _ = buffers.push(FrameBuffer::new(index as u8, self.buffer_capacity));
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
            self.draw_calls
                .push((x_start, y_start, x_end, y_end, pixels.len()));
            if self.fail_draw {
                return Err(DrawFailed);
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockTimer {
        started_with: Vec<u32>,
        stopped: Rc<Cell<bool>>,
        fail_start: bool,
    }

    #[derive(Debug, PartialEq)]
    struct TimerFailed;

    impl TickTimer for MockTimer {
        type Error = TimerFailed;

        fn start_periodic(&mut self, period_ms: u32) -> Result<(), Self::Error> {
            if self.fail_start {
                return Err(TimerFailed);
            }
            self.started_with.push(period_ms);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), Self::Error> {
            self.stopped.set(true);
            Ok(())
        }
    }

    struct EventUi {
        events: Rc<RefCell<Vec<&'static str>>>,
        seen_elapsed: Vec<u32>,
    }

    impl UiLoop for EventUi {
        fn run_pending(&mut self, elapsed_ms: u32) {
            self.events.borrow_mut().push("run_pending");
            self.seen_elapsed.push(elapsed_ms);
        }
    }

    struct EventDelay {
        events: Rc<RefCell<Vec<&'static str>>>,
        delays_ms: Vec<u32>,
    }

    impl DelayNs for EventDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        // record once per yield, independent of how the default impl
        // chunks nanosecond delays
        fn delay_ms(&mut self, ms: u32) {
            self.events.borrow_mut().push("yield");
            self.delays_ms.push(ms);
        }
    }

    fn config_480() -> Config {
        Builder::new()
            .dimensions(Dimensions::new(480, 480).unwrap())
            .build()
            .unwrap()
    }

    fn test_bridge() -> Bridge<MockPanel, MockTimer, NoTouch> {
        let panel = MockPanel::new(480 * 480);
        Bridge::init(panel, MockTimer::default(), NoTouch, config_480()).unwrap()
    }

    #[test]
    fn test_init_requests_exactly_two_buffers_and_starts_timer() {
        let bridge = test_bridge();
        assert_eq!(bridge.panel.buffer_requests, [2]);
        assert_eq!(bridge.timer.started_with, [5]);
        assert_eq!(bridge.draw_buffer().capacity(), 480 * 480);
        assert_eq!(bridge.dimensions(), Dimensions::new(480, 480).unwrap());
    }

    #[test]
    fn test_init_fails_on_wrong_buffer_count() {
        let mut panel = MockPanel::new(480 * 480);
        panel.buffer_count = 1;
        let result = Bridge::init(panel, MockTimer::default(), NoTouch, config_480());
        assert!(matches!(
            result,
            Err(Error::FrameBufferCount {
                expected: 2,
                provided: 1
            })
        ));
    }

    #[test]
    fn test_init_fails_on_undersized_buffer() {
        let panel = MockPanel::new(100);
        let result = Bridge::init(panel, MockTimer::default(), NoTouch, config_480());
        assert!(matches!(
            result,
            Err(Error::FrameBufferTooSmall {
                provided: 100,
                ..
            })
        ));
    }

    #[test]
    fn test_init_surfaces_timer_failure() {
        let panel = MockPanel::new(480 * 480);
        let timer = MockTimer {
            fail_start: true,
            ..MockTimer::default()
        };
        let result = Bridge::init(panel, timer, NoTouch, config_480());
        assert!(matches!(result, Err(Error::Timer(TimerFailed))));
    }

    #[test]
    fn test_init_honors_configured_tick_period() {
        let config = Builder::new()
            .dimensions(Dimensions::new(480, 480).unwrap())
            .tick_period_ms(10)
            .build()
            .unwrap();
        let bridge =
            Bridge::init(MockPanel::new(480 * 480), MockTimer::default(), NoTouch, config)
                .unwrap();
        assert_eq!(bridge.timer.started_with, [10]);
    }

    #[test]
    fn test_flush_converts_inclusive_to_exclusive_bounds() {
        let mut bridge = test_bridge();
        let area = Area::new(10, 20, 29, 49);
        let pixels = [Rgb565::BLACK; 20 * 30];
        bridge.flush(&area, &pixels).unwrap();
        assert_eq!(bridge.panel.draw_calls, [(10, 20, 30, 50, 20 * 30)]);
    }

    #[test]
    fn test_flush_single_pixel_area() {
        let mut bridge = test_bridge();
        let area = Area::new(7, 7, 7, 7);
        let pixels = [Rgb565::WHITE; 1];
        bridge.flush(&area, &pixels).unwrap();
        assert_eq!(bridge.panel.draw_calls, [(7, 7, 8, 8, 1)]);
        assert_eq!(bridge.draw_buffer().completed_flushes(), 1);
    }

    #[test]
    fn test_flush_signals_ready_exactly_once_per_invocation() {
        let mut bridge = test_bridge();
        let pixels = [Rgb565::BLACK; 100];
        for expected in 1..=4 {
            bridge.flush(&Area::new(0, 0, 9, 9), &pixels).unwrap();
            assert_eq!(bridge.draw_buffer().completed_flushes(), expected);
            assert!(!bridge.draw_buffer().flush_in_progress());
        }
    }

    #[test]
    fn test_flush_signals_ready_even_when_transfer_fails() {
        let mut bridge = test_bridge();
        bridge.panel.fail_draw = true;
        let pixels = [Rgb565::BLACK; 100];
        let result = bridge.flush(&Area::new(0, 0, 9, 9), &pixels);
        assert!(matches!(result, Err(Error::Panel(DrawFailed))));
        // rotation must not stall on a failed transfer
        assert_eq!(bridge.draw_buffer().completed_flushes(), 1);
        assert!(!bridge.draw_buffer().flush_in_progress());
    }

    #[test]
    fn test_flush_rotates_active_buffer() {
        let mut bridge = test_bridge();
        let first = bridge.draw_buffer().active();
        let pixels = [Rgb565::BLACK; 1];
        bridge.flush(&Area::new(0, 0, 0, 0), &pixels).unwrap();
        assert_ne!(bridge.draw_buffer().active(), first);
        bridge.flush(&Area::new(0, 0, 0, 0), &pixels).unwrap();
        assert_eq!(bridge.draw_buffer().active(), first);
    }

    #[test]
    fn test_flush_rejects_out_of_bounds_area() {
        let mut bridge = test_bridge();
        let pixels = [Rgb565::BLACK; 100];
        let result = bridge.flush(&Area::new(475, 0, 484, 9), &pixels);
        assert!(matches!(result, Err(Error::AreaOutOfBounds { x2: 484, .. })));
        // rejected flushes never reach the panel or the rotation state
        assert!(bridge.panel.draw_calls.is_empty());
        assert_eq!(bridge.draw_buffer().completed_flushes(), 0);
    }

    #[test]
    fn test_flush_rejects_wrong_pixel_count() {
        let mut bridge = test_bridge();
        let pixels = [Rgb565::BLACK; 99];
        let result = bridge.flush(&Area::new(0, 0, 9, 9), &pixels);
        assert!(matches!(
            result,
            Err(Error::PixelCountMismatch {
                expected: 100,
                provided: 99
            })
        ));
        assert!(bridge.panel.draw_calls.is_empty());
    }

    #[test]
    fn test_tick_advances_time_base_by_period() {
        let bridge = test_bridge();
        assert_eq!(bridge.elapsed_ms(), 0);
        for expected in 1..=100u32 {
            bridge.tick();
            assert_eq!(bridge.elapsed_ms(), expected * 5);
        }
    }

    #[test]
    fn test_drive_runs_pending_work_before_yield_on_every_iteration() {
        let mut bridge = test_bridge();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut ui = EventUi {
            events: Rc::clone(&events),
            seen_elapsed: Vec::new(),
        };
        let mut delay = EventDelay {
            events: Rc::clone(&events),
            delays_ms: Vec::new(),
        };

        for _ in 0..50 {
            bridge.drive(&mut ui, &mut delay);
        }

        let events = events.borrow();
        assert_eq!(events.len(), 100);
        for pair in events.chunks(2) {
            assert_eq!(pair, ["run_pending", "yield"]);
        }
        assert_eq!(delay.delays_ms, [5; 50]);
    }

    #[test]
    fn test_drive_feeds_current_time_base_to_toolkit() {
        let mut bridge = test_bridge();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut ui = EventUi {
            events: Rc::clone(&events),
            seen_elapsed: Vec::new(),
        };
        let mut delay = EventDelay {
            events: Rc::clone(&events),
            delays_ms: Vec::new(),
        };

        bridge.drive(&mut ui, &mut delay);
        bridge.tick();
        bridge.tick();
        bridge.drive(&mut ui, &mut delay);

        assert_eq!(ui.seen_elapsed, [0, 10]);
    }

    #[test]
    fn test_poll_input_delegates_to_touch_source() {
        let mut bridge = test_bridge();
        assert_eq!(bridge.poll_input().ok(), Some(PointerState::default()));
    }

    #[test]
    fn test_shutdown_stops_timer_and_returns_collaborators() {
        let bridge = test_bridge();
        let stopped = Rc::clone(&bridge.timer.stopped);
        assert!(!stopped.get());
        let result = bridge.shutdown();
        assert!(result.is_ok());
        assert!(stopped.get());
    }

    #[test]
    fn test_end_to_end_480x480_descriptor() {
        let bridge = test_bridge();
        let dims = bridge.dimensions();
        assert_eq!(dims.hor_res, 480);
        assert_eq!(dims.ver_res, 480);
        assert_eq!(bridge.draw_buffer().capacity(), 480 * 480);
        for buffer in bridge.draw_buffer().frame_buffers() {
            assert!(buffer.capacity() >= 480 * 480);
        }
    }
}
