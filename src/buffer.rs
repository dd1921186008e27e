//! Frame-buffer descriptors and draw-buffer bookkeeping
//!
//! The panel driver owns the pixel memory. The bridge only ever holds
//! non-owning [`FrameBuffer`] descriptors, obtained once at initialization
//! and never reallocated or freed. [`DrawBuffer`] is the double-buffer
//! descriptor the bridge keeps for the toolkit: which buffer is active, and
//! whether a flush transfer is currently in flight.

/// Maximum frame buffers an RGB panel driver can hand out
///
/// Matches the hardware limit of common RGB LCD peripherals (up to three
/// bounce/frame buffers).
pub const MAX_FRAME_BUFFERS: usize = 3;

/// Non-owning descriptor of one panel-owned frame buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Position of this buffer in the panel's buffer set
    index: u8,
    /// Capacity in pixels
    capacity: usize,
}

impl FrameBuffer {
    const EMPTY: Self = Self {
        index: 0,
        capacity: 0,
    };

    /// Describe a panel-owned buffer
    pub const fn new(index: u8, capacity: usize) -> Self {
        Self { index, capacity }
    }

    /// Position of this buffer in the panel's buffer set
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Capacity in pixels
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Fixed-capacity set of frame-buffer descriptors
///
/// Returned by [`PanelDriver::frame_buffers`](crate::panel::PanelDriver::frame_buffers).
/// Holds at most [`MAX_FRAME_BUFFERS`] entries without heap allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffers {
    buffers: [FrameBuffer; MAX_FRAME_BUFFERS],
    len: usize,
}

impl FrameBuffers {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            buffers: [FrameBuffer::EMPTY; MAX_FRAME_BUFFERS],
            len: 0,
        }
    }

    /// Create a set holding exactly two buffers
    pub const fn pair(first: FrameBuffer, second: FrameBuffer) -> Self {
        Self {
            buffers: [first, second, FrameBuffer::EMPTY],
            len: 2,
        }
    }

    /// Append a descriptor
    ///
    /// # Errors
    ///
    /// Returns the descriptor back if the set is already full.
    pub fn push(&mut self, buffer: FrameBuffer) -> Result<(), FrameBuffer> {
        if self.len == MAX_FRAME_BUFFERS {
            return Err(buffer);
        }
        self.buffers[self.len] = buffer;
        self.len += 1;
        Ok(())
    }

    /// Number of descriptors in the set
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a descriptor by position
    pub fn get(&self, index: usize) -> Option<FrameBuffer> {
        if index < self.len {
            Some(self.buffers[index])
        } else {
            None
        }
    }

    /// Iterate over the descriptors
    pub fn iter(&self) -> impl Iterator<Item = FrameBuffer> + '_ {
        self.buffers[..self.len].iter().copied()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Draw-buffer descriptor registered with the toolkit
///
/// Describes both frame buffers and the declared pixel capacity, and tracks
/// the flush protocol: [`begin_flush`](Self::begin_flush) marks a transfer in
/// flight, [`flush_ready`](Self::flush_ready) signals the buffer free again
/// and rotates the active buffer. The ready signal is issued exactly once per
/// flush; skipping it would stall the toolkit's buffer rotation, doubling it
/// would corrupt it.
///
/// Exactly one `DrawBuffer` exists per bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawBuffer {
    /// The two panel-owned buffers
    buffers: [FrameBuffer; 2],
    /// Declared capacity in pixels, the full panel resolution
    capacity: usize,
    /// Which buffer the toolkit renders into next
    active: usize,
    /// Whether a flush transfer is currently in flight
    flush_in_progress: bool,
    /// Completed flush transfers since initialization (wrapping)
    completed_flushes: u32,
}

impl DrawBuffer {
    /// Create a descriptor over two frame buffers
    pub const fn new(first: FrameBuffer, second: FrameBuffer, capacity: usize) -> Self {
        Self {
            buffers: [first, second],
            capacity,
            active: 0,
            flush_in_progress: false,
            completed_flushes: 0,
        }
    }

    /// Declared pixel capacity
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The buffer the toolkit renders into next
    pub const fn active(&self) -> FrameBuffer {
        self.buffers[self.active]
    }

    /// Both frame buffers, in panel order
    pub const fn frame_buffers(&self) -> [FrameBuffer; 2] {
        self.buffers
    }

    /// Whether a flush transfer is currently in flight
    pub const fn flush_in_progress(&self) -> bool {
        self.flush_in_progress
    }

    /// Completed flush transfers since initialization
    pub const fn completed_flushes(&self) -> u32 {
        self.completed_flushes
    }

    /// Mark a flush transfer as in flight
    pub(crate) fn begin_flush(&mut self) {
        self.flush_in_progress = true;
    }

    /// Signal the buffer free for reuse and rotate the active buffer
    pub(crate) fn flush_ready(&mut self) {
        self.flush_in_progress = false;
        self.active = (self.active + 1) % 2;
        self.completed_flushes = self.completed_flushes.wrapping_add(1);
    }
}
