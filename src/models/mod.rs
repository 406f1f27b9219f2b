//! Models are structs that represent a color as fractional components in a
//! specific color space or form. They represent a type safe way to convert
//! between the spaces the picker works in.
//!
//! ```rust
//! use chromapick::models::{Lab, Srgb};
//! let blue_in_lab = Lab::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light() // convert to srgb-linear.
//!         .to_xyz(),         // convert to xyz-d65.
//! );
//! ```

mod hsb;
mod lab;
mod rgb;
mod xyz;

pub use hsb::Hsb;
pub use lab::{Lab, Lch};
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::{WhitePoint, XyzD65, D65};
