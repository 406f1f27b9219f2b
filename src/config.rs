//! Configuration of a [`crate::ColorPicker`].

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{blindness::ColorBlindnessMode, color::Color, palette::Palette};

/// The interval used by the drag throttles unless configured otherwise.
pub const DEFAULT_DRAG_INTERVAL: Duration = Duration::from_millis(100);

/// How a picker starts out.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// The color the picker starts with.
    pub initial_color: Color,
    /// The simulation applied to previews.
    pub blindness_mode: ColorBlindnessMode,
    /// Minimum time between two converted pointer samples while dragging.
    /// Zero disables throttling.
    pub drag_interval: Duration,
    /// Colors the palette starts with.
    pub palette: Palette,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: Color::default(),
            blindness_mode: ColorBlindnessMode::default(),
            drag_interval: DEFAULT_DRAG_INTERVAL,
            palette: Palette::default(),
        }
    }
}
