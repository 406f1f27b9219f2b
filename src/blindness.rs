//! Simulation of color vision deficiencies for preview swatches.
//!
//! Dichromacy is simulated in LMS cone space: the missing cone response is
//! rebuilt from the two that remain, which folds every color onto the plane
//! a dichromat can tell apart. Matrices are from Viénot, Brettel & Mollon,
//! "Digital video colourmaps for checking the legibility of displays by
//! dichromats" (1999).

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Color, Component, Components},
    error::ParseModeError,
    gamma,
    math::{transform, transform_3x3, Transform},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects the filter applied to preview swatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorBlindnessMode {
    /// No simulation.
    #[default]
    Normal,
    /// Missing long wavelength (red) cones.
    Protanopia,
    /// Missing medium wavelength (green) cones.
    Deuteranopia,
    /// Missing short wavelength (blue) cones.
    Tritanopia,
    /// Only short wavelength cones, also known as blue cone monochromacy.
    ConeAchromatopsia,
    /// No functioning cones, vision through rods only.
    RodAchromatopsia,
}

impl ColorBlindnessMode {
    /// Every mode, in the order a selector lists them.
    pub const ALL: [ColorBlindnessMode; 6] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::ConeAchromatopsia,
        Self::RodAchromatopsia,
    ];

    /// The display name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::ConeAchromatopsia => "Cone achromatopsia",
            Self::RodAchromatopsia => "Rod achromatopsia",
        }
    }

    /// Apply the simulation to a single color.
    pub fn apply(&self, color: Color) -> Color {
        colour_blindness_transform(*self)(color)
    }
}

impl fmt::Display for ColorBlindnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorBlindnessMode {
    type Err = ParseModeError;

    /// Parse a mode from its display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_owned()))
    }
}

/// Return the function that simulates `mode`. The function preserves alpha.
pub fn colour_blindness_transform(mode: ColorBlindnessMode) -> fn(Color) -> Color {
    match mode {
        ColorBlindnessMode::Normal => |color| color,
        ColorBlindnessMode::Protanopia => |color| dichromacy(color, &PROTANOPIA),
        ColorBlindnessMode::Deuteranopia => |color| dichromacy(color, &DEUTERANOPIA),
        ColorBlindnessMode::Tritanopia => |color| dichromacy(color, &TRITANOPIA),
        ColorBlindnessMode::ConeAchromatopsia => |color| monochromacy(color, S_CONE_WEIGHTS),
        ColorBlindnessMode::RodAchromatopsia => |color| monochromacy(color, LUMINANCE_WEIGHTS),
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_LMS: Transform = transform_3x3(
    17.8824,  3.45565,  0.0299566,
    43.5161,  27.1554,  0.184309,
    4.11935,  3.86714,  1.46709,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_RGB: Transform = transform_3x3(
     0.0809444479,  -0.0102485335,  -0.000365296938,
    -0.130504409,    0.0540193266,  -0.00412161469,
     0.116721066,   -0.113614708,    0.693511405,
);

// L is rebuilt from M and S.
#[rustfmt::skip]
const PROTANOPIA: Transform = transform_3x3(
     0.0,      0.0, 0.0,
     2.02344,  1.0, 0.0,
    -2.52581,  0.0, 1.0,
);

// M is rebuilt from L and S.
#[rustfmt::skip]
const DEUTERANOPIA: Transform = transform_3x3(
    1.0, 0.494207, 0.0,
    0.0, 0.0,      0.0,
    0.0, 1.24827,  1.0,
);

// S is rebuilt from L and M.
#[rustfmt::skip]
const TRITANOPIA: Transform = transform_3x3(
    1.0, 0.0, -0.395913,
    0.0, 1.0,  0.801109,
    0.0, 0.0,  0.0,
);

/// Photopic luminance of linear sRGB.
const LUMINANCE_WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

const S_CONE_SUM: Component = 0.0299566 + 0.184309 + 1.46709;

/// The S cone row of [`RGB_TO_LMS`], normalized so white stays white.
const S_CONE_WEIGHTS: Components = Components(
    0.0299566 / S_CONE_SUM,
    0.184309 / S_CONE_SUM,
    1.46709 / S_CONE_SUM,
);

fn dichromacy(color: Color, simulation: &Transform) -> Color {
    let linear = gamma::to_linear_light(&color.to_components());
    let lms = transform(simulation, transform(&RGB_TO_LMS, linear));
    let rgb = transform(&LMS_TO_RGB, lms).map(|v| v.clamp(0.0, 1.0));
    Color::from_components(gamma::to_gamma_encoded(&rgb), color.alpha)
}

fn monochromacy(color: Color, weights: Components) -> Color {
    let Components(r, g, b) = gamma::to_linear_light(&color.to_components());
    let grey = gamma::compand((r * weights.0 + g * weights.1 + b * weights.2).clamp(0.0, 1.0));
    Color::from_components(Components(grey, grey, grey), color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_color_near;

    const SAMPLES: [Color; 6] = [
        Color::new(0, 162, 232, 255),
        Color::new(255, 0, 0, 128),
        Color::new(0, 255, 0, 255),
        Color::new(12, 34, 56, 0),
        Color::new(255, 255, 255, 255),
        Color::new(0, 0, 0, 255),
    ];

    #[test]
    fn normal_is_identity() {
        let f = colour_blindness_transform(ColorBlindnessMode::Normal);
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let color = Color::new(r, g, b, r ^ g);
                    assert_eq!(f(color), color);
                }
            }
        }
    }

    #[test]
    fn alpha_is_preserved() {
        for mode in ColorBlindnessMode::ALL {
            for color in SAMPLES {
                assert_eq!(mode.apply(color).alpha, color.alpha, "{mode}");
            }
        }
    }

    #[test]
    fn white_and_black_are_fixed() {
        for mode in ColorBlindnessMode::ALL {
            let white = Color::opaque(255, 255, 255);
            let black = Color::opaque(0, 0, 0);
            assert_color_near!(mode.apply(white), white, 1);
            assert_color_near!(mode.apply(black), black, 1);
        }
    }

    #[test]
    fn achromatopsia_is_grey() {
        for mode in [
            ColorBlindnessMode::ConeAchromatopsia,
            ColorBlindnessMode::RodAchromatopsia,
        ] {
            for color in SAMPLES {
                let grey = mode.apply(color);
                assert_eq!(grey.red, grey.green);
                assert_eq!(grey.green, grey.blue);
            }
        }
    }

    #[test]
    fn rod_achromatopsia_uses_luminance() {
        // Pure green carries about 71.5% of linear luminance.
        let grey = ColorBlindnessMode::RodAchromatopsia.apply(Color::opaque(0, 255, 0));
        assert_eq!(grey, Color::opaque(220, 220, 220));
    }

    #[test]
    fn cone_achromatopsia_favours_blue() {
        let mode = ColorBlindnessMode::ConeAchromatopsia;
        let blue = mode.apply(Color::opaque(0, 0, 255));
        let red = mode.apply(Color::opaque(255, 0, 0));
        assert!(blue.red > red.red);
    }

    #[test]
    fn protanopia_and_deuteranopia_confuse_red_and_green() {
        for mode in [
            ColorBlindnessMode::Protanopia,
            ColorBlindnessMode::Deuteranopia,
        ] {
            let red = mode.apply(Color::opaque(255, 0, 0));
            let green = mode.apply(Color::opaque(0, 255, 0));
            // Both land on the yellow-blue axis, so red and green channels
            // nearly agree within each simulated color.
            assert!(red.red.abs_diff(red.green) < 40, "{mode}: {red:?}");
            assert!(green.red.abs_diff(green.green) < 40, "{mode}: {green:?}");
        }
    }

    #[test]
    fn simulation_changes_saturated_colors() {
        for mode in [
            ColorBlindnessMode::Protanopia,
            ColorBlindnessMode::Deuteranopia,
            ColorBlindnessMode::Tritanopia,
        ] {
            let green = Color::opaque(0, 255, 0);
            assert_ne!(mode.apply(green), green, "{mode}");
        }
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in ColorBlindnessMode::ALL {
            assert_eq!(mode.to_string().parse::<ColorBlindnessMode>(), Ok(mode));
        }
        assert_eq!(
            "rod ACHROMATOPSIA".parse::<ColorBlindnessMode>(),
            Ok(ColorBlindnessMode::RodAchromatopsia)
        );
        assert!("sepia".parse::<ColorBlindnessMode>().is_err());
    }
}
