//! Bridge configuration types and builder

pub use crate::error::BuilderError;

/// Tick period the reference configuration uses, in milliseconds
pub const DEFAULT_TICK_PERIOD_MS: u32 = 5;

/// Cooperative yield at the end of each loop iteration, in milliseconds
pub const DEFAULT_LOOP_DELAY_MS: u32 = 5;

/// Number of frame buffers the bridge retrieves from the panel driver
///
/// Double buffering: the toolkit renders into one buffer while the panel
/// scans out the other.
pub const FRAME_BUFFER_COUNT: usize = 2;

/// Panel resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Horizontal resolution in pixels
    pub hor_res: u16,
    /// Vertical resolution in pixels
    pub ver_res: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either axis is zero.
    pub fn new(hor_res: u16, ver_res: u16) -> Result<Self, BuilderError> {
        if hor_res == 0 || ver_res == 0 {
            return Err(BuilderError::InvalidDimensions { hor_res, ver_res });
        }
        Ok(Self { hor_res, ver_res })
    }

    /// Full-panel pixel count
    ///
    /// This is the capacity each frame buffer must provide and the capacity
    /// the draw-buffer descriptor declares to the toolkit.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.hor_res) * usize::from(self.ver_res)
    }
}

/// Bridge configuration
///
/// Use [`Builder`] to create a `Config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panel resolution
    pub dimensions: Dimensions,
    /// Period of the tick timer; each tick advances the toolkit time base
    /// by exactly this amount
    pub tick_period_ms: u32,
    /// How long the loop operation yields after processing pending work
    pub loop_delay_ms: u32,
}

/// Builder for constructing bridge configuration
///
/// # Example
///
/// ```
/// use panel_bridge::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(480, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.tick_period_ms, 5);
/// ```
#[must_use]
pub struct Builder {
    /// Panel resolution (required)
    dimensions: Option<Dimensions>,
    /// Tick timer period in milliseconds
    tick_period_ms: u32,
    /// Loop yield in milliseconds
    loop_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            loop_delay_ms: DEFAULT_LOOP_DELAY_MS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel resolution (required)
    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the tick timer period in milliseconds
    ///
    /// Must be non-zero; a zero period would freeze the toolkit time base.
    pub fn tick_period_ms(mut self, period_ms: u32) -> Self {
        self.tick_period_ms = period_ms;
        self
    }

    /// Set the cooperative yield applied at the end of each loop iteration
    pub fn loop_delay_ms(mut self, delay_ms: u32) -> Self {
        self.loop_delay_ms = delay_ms;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidTickPeriod` for a zero tick period.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.tick_period_ms == 0 {
            return Err(BuilderError::InvalidTickPeriod);
        }
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            tick_period_ms: self.tick_period_ms,
            loop_delay_ms: self.loop_delay_ms,
        })
    }
}
