//! The sRGB companding curve.
//!
//! Values outside [0..1] are mirrored around zero, which keeps the curve
//! monotonic for the slightly out of range values produced by matrix math.

use crate::color::{Component, Components};

/// Convert a gamma encoded sRGB channel to linear light.
#[inline]
pub fn linearize(value: Component) -> Component {
    let abs = value.abs();

    if abs <= 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light channel to sRGB gamma encoding.
#[inline]
pub fn compand(value: Component) -> Component {
    let abs = value.abs();

    if abs <= 0.0031308 {
        12.92 * value
    } else {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

/// Linearize all three components.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(linearize)
}

/// Compand all three components.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(compand)
}
