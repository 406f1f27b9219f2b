//! Rate limiting of pointer drag samples.

use std::time::{Duration, Instant};

/// The input surfaces that sample the pointer while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The 2D canvas.
    Canvas,
    /// The 1D slider next to the canvas.
    Slider,
    /// The alpha strip.
    Alpha,
}

/// Lets at most one sample through per interval. The first sample of a drag
/// always passes, and so does the release.
#[derive(Clone, Debug)]
pub struct DragThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl DragThrottle {
    /// Create a throttle with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// The minimum time between two samples.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a pointer move at `now` should be converted.
    pub fn sample(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// End the drag. The next sample passes regardless of timing.
    pub fn release(&mut self) {
        self.last = None;
    }
}
