//! Time based interpolation between two colors, for display effects such as
//! a palette swatch fading in. Transitions never touch the picked color.

use std::time::Duration;

use num_traits::Float;

use crate::color::{Color, Component};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// A linear fade from one color to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// The color at the start.
    pub from: Color,
    /// The color at the end.
    pub to: Color,
    /// How long the fade takes.
    pub duration: Duration,
}

impl Transition {
    /// Create a new transition.
    pub fn new(from: Color, to: Color, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// The progress in [0..1] after `elapsed` time.
    pub fn progress(&self, elapsed: Duration) -> Component {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as Component
    }

    /// True once `elapsed` has reached the duration.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The color to display after `elapsed` time. Channels are interpolated
    /// as stored, alpha included.
    pub fn at(&self, elapsed: Duration) -> Color {
        let t = self.progress(elapsed);
        let channel = |a: u8, b: u8| lerp(a as Component, b as Component, t).round() as u8;

        Color::new(
            channel(self.from.red, self.to.red),
            channel(self.from.green, self.to.green),
            channel(self.from.blue, self.to.blue),
            channel(self.from.alpha, self.to.alpha),
        )
    }
}
