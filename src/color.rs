//! The canonical [`Color`] and the byte coordinates derived from it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all fractional components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all fractional components are stored as.
pub type Component = f32;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Returns true if every component satisfies the predicate.
    pub fn all(&self, f: impl Fn(Component) -> bool) -> bool {
        f(self.0) && f(self.1) && f(self.2)
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

/// Convert a fraction in [0..1] to a byte, rounding to the nearest value.
#[inline]
pub(crate) fn to_byte(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a byte to a fraction in [0..1].
#[inline]
pub(crate) fn to_fraction(value: u8) -> Component {
    value as Component / 255.0
}

/// The system of record: 8-bit sRGB gamma encoded channels plus alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel, 255 being fully opaque.
    pub alpha: u8,
}

impl Color {
    /// Create a new color from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Return the same color with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// The red, green and blue channels as fractions in [0..1].
    pub fn to_components(&self) -> Components {
        Components(
            to_fraction(self.red),
            to_fraction(self.green),
            to_fraction(self.blue),
        )
    }

    /// Build a color from fractional channels, clamping each into
    /// [0..1] before quantizing.
    pub fn from_components(components: Components, alpha: u8) -> Self {
        Self::new(
            to_byte(components.0),
            to_byte(components.1),
            to_byte(components.2),
            alpha,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0, 162, 232, 255)
    }
}

/// Hue, saturation and brightness, each a fraction of 255. Hue is circular:
/// 255 and 0 are neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HsbCoord {
    /// The hue.
    pub hue: u8,
    /// The saturation.
    pub saturation: u8,
    /// The brightness (value).
    pub brightness: u8,
}

impl HsbCoord {
    /// Create a new coordinate.
    pub const fn new(hue: u8, saturation: u8, brightness: u8) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// The same coordinate with a hue of 255, a full turn, wrapped to 0.
    pub const fn wrapped(self) -> Self {
        Self {
            hue: self.hue % 255,
            ..self
        }
    }
}

/// A CIE L*a*b* coordinate stored in whole units.
///
/// Lightness is within [0..100] and `a`/`b` within [-100..100]. Values are
/// only ever created through [`LabCoord::clamped`], deserialization included,
/// so the ranges hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawLab"))]
pub struct LabCoord {
    lightness: u8,
    a: i8,
    b: i8,
}

impl LabCoord {
    /// Largest stored lightness.
    pub const MAX_LIGHTNESS: Component = 100.0;
    /// Largest magnitude stored on the `a` and `b` axes.
    pub const MAX_AB: Component = 100.0;

    /// Round and clamp real valued L*a*b* units into a stored coordinate.
    /// Out of range or NaN input is clamped silently.
    pub fn clamped(lightness: Component, a: Component, b: Component) -> Self {
        fn clamp(value: Component, min: Component, max: Component) -> Component {
            if value.is_nan() {
                0.0
            } else {
                value.round().clamp(min, max)
            }
        }

        Self {
            lightness: clamp(lightness, 0.0, Self::MAX_LIGHTNESS) as u8,
            a: clamp(a, -Self::MAX_AB, Self::MAX_AB) as i8,
            b: clamp(b, -Self::MAX_AB, Self::MAX_AB) as i8,
        }
    }

    /// The lightness, L*.
    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    /// The green-red axis, a*.
    pub fn a(&self) -> i8 {
        self.a
    }

    /// The blue-yellow axis, b*.
    pub fn b(&self) -> i8 {
        self.b
    }

    /// The coordinate as real valued components.
    pub fn to_components(&self) -> Components {
        Components(
            self.lightness as Component,
            self.a as Component,
            self.b as Component,
        )
    }
}

/// Unchecked L*a*b* units as they appear in serialized data.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLab {
    lightness: Component,
    a: Component,
    b: Component,
}

#[cfg(feature = "serde")]
impl From<RawLab> for LabCoord {
    fn from(raw: RawLab) -> Self {
        Self::clamped(raw.lightness, raw.a, raw.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_the_picker_blue() {
        assert_eq!(Color::default(), Color::new(0, 162, 232, 255));
    }

    #[test]
    fn fractions_are_clamped_before_quantizing() {
        let c = Color::from_components(Components(-0.5, 0.5, 1.5), 10);
        assert_eq!(c, Color::new(0, 128, 255, 10));
    }

    #[test]
    fn lab_coordinates_are_clamped() {
        let lab = LabCoord::clamped(150.0, -120.0, 100.4);
        assert_eq!(lab.lightness(), 100);
        assert_eq!(lab.a(), -100);
        assert_eq!(lab.b(), 100);

        let lab = LabCoord::clamped(-3.0, 12.6, -44.5);
        assert_eq!(lab.lightness(), 0);
        assert_eq!(lab.a(), 13);
        assert_eq!(lab.b(), -45);
    }

    #[test]
    fn nan_lab_units_become_zero() {
        let lab = LabCoord::clamped(Component::NAN, Component::NAN, 1.0);
        assert_eq!(lab, LabCoord::clamped(0.0, 0.0, 1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_lab_coordinates_are_clamped() {
        let lab: LabCoord =
            serde_json::from_str(r#"{"lightness":250,"a":-128,"b":0}"#).unwrap();
        assert_eq!(lab, LabCoord::clamped(100.0, -100.0, 0.0));

        let lab: LabCoord =
            serde_json::from_str(r#"{"lightness":63.4,"a":-10,"b":-44.6}"#).unwrap();
        assert_eq!(lab, LabCoord::clamped(63.0, -10.0, -45.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_lab_coordinates_read_back() {
        let lab = Color::default().to_lab_coord();
        let json = serde_json::to_string(&lab).unwrap();
        assert_eq!(json, r#"{"lightness":63,"a":-10,"b":-45}"#);
        assert_eq!(serde_json::from_str::<LabCoord>(&json).unwrap(), lab);
    }
}
