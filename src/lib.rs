//! chromapick is the headless core of a color picker: conversions between
//! sRGB, HSB and CIE-Lab, an sRGB gamut check for Lab coordinates, color
//! vision deficiency previews and a single color state that keeps every
//! representation in sync.
//!
//! ```rust
//! use chromapick::{ColorState, HsbCoord, Color};
//!
//! let state = ColorState::default();
//! state.set_from_hsb(HsbCoord::new(0, 255, 255));
//! assert_eq!(state.color(), Color::opaque(255, 0, 0));
//! ```

#![deny(missing_docs)]

mod blindness;
mod color;
mod config;
mod convert;
mod error;
mod gamma;
mod gamut;
mod hex;
mod math;
pub mod models;
mod palette;
mod picker;
mod state;
mod test;
mod throttle;
mod transition;

pub use blindness::{colour_blindness_transform, ColorBlindnessMode};
pub use color::{Color, Component, Components, HsbCoord, LabCoord};
pub use config::{PickerConfig, DEFAULT_DRAG_INTERVAL};
pub use convert::{hsb_to_rgb, lab_to_rgb, rgb_to_hsb, rgb_to_lab};
pub use error::{HexError, ParseModeError};
pub use gamma::{compand, linearize};
pub use gamut::{is_out_of_gamut, GAMUT_EPSILON};
pub use hex::parse_hex;
pub use picker::ColorPicker;
pub use palette::Palette;
pub use state::{Changed, ColorState, ColorView, Snapshot, Views};
pub use throttle::{DragThrottle, Surface};
pub use transition::Transition;
