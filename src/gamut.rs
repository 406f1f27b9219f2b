//! Gamut classification and mapping of CIE-Lab coordinates against sRGB.
//!
//! Classification is closed form and allocation free, so it can run once per
//! pixel of a preview bitmap.

use crate::{
    color::Component,
    models::{Lab, Srgb},
};

/// Linear light components within this distance of [0..1] still count as
/// inside the gamut. Small enough that clipping them never changes the
/// quantized byte.
pub const GAMUT_EPSILON: Component = 1.0e-5;

impl Lab {
    /// Returns true if this color has an sRGB representation that does not
    /// need clipping.
    #[inline]
    pub fn in_srgb_gamut(&self) -> bool {
        self.to_srgb_linear().in_gamut_within(GAMUT_EPSILON)
    }

    /// Find the nearest sRGB color to this one by reducing chroma while
    /// keeping lightness and hue.
    /// <https://drafts.csswg.org/css-color-4/#binsearch>, with CIE-LCh
    /// standing in for Oklch.
    pub fn map_into_gamut(&self) -> Srgb {
        if self.in_srgb_gamut() {
            return self.to_srgb();
        }

        if self.lightness >= 100.0 {
            return Srgb::new(1.0, 1.0, 1.0);
        }

        if self.lightness <= 0.0 {
            return Srgb::new(0.0, 0.0, 0.0);
        }

        // A difference of about 2 ΔE*ab is the smallest most observers see.
        const JND: Component = 2.0;
        const EPSILON: Component = 1.0e-3;

        let origin = self.to_polar();

        // If clipping is already close enough, skip the search.
        let clipped = self.to_srgb();
        if self.delta_e(&clipped.to_lab()) < JND {
            return clipped;
        }

        let mut min = 0.0;
        let mut max = origin.chroma;
        let mut min_in_gamut = true;

        let mut current = origin;
        let mut current_lab = *self;

        while max - min > EPSILON {
            let chroma = (min + max) / 2.0;
            current.chroma = chroma;
            current_lab = current.to_rectangular();

            if min_in_gamut && current_lab.in_srgb_gamut() {
                min = chroma;
                continue;
            }

            let clipped = current_lab.to_srgb();
            let e = current_lab.delta_e(&clipped.to_lab());

            if e < JND {
                if JND - e < EPSILON {
                    return clipped;
                }

                min_in_gamut = false;
                min = chroma;
            } else {
                max = chroma;
            }
        }

        current_lab.to_srgb()
    }
}

/// Returns true if the L*a*b* coordinate has no sRGB representation without
/// clipping. Lightness is in [0..100], `a` and `b` in real units.
///
/// The linear sRGB channels before clipping may exceed [0..1] by up to
/// [`GAMUT_EPSILON`] on either side.
/// A coordinate inside that margin counts as in gamut; clipping it never
/// moves a channel by a full byte step.
#[inline]
pub fn is_out_of_gamut(lightness: Component, a: Component, b: Component) -> bool {
    !Lab::new(lightness, a, b).in_srgb_gamut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::convert::{lab_to_rgb, rgb_to_lab};

    #[test]
    fn primaries_and_greys_are_in_gamut() {
        for color in [
            Color::opaque(255, 255, 255),
            Color::opaque(0, 0, 0),
            Color::opaque(255, 0, 0),
            Color::opaque(0, 255, 0),
            Color::opaque(0, 0, 255),
            Color::opaque(128, 128, 128),
            Color::default(),
        ] {
            assert!(rgb_to_lab(color).in_srgb_gamut(), "{color:?}");
        }
    }

    #[test]
    fn saturated_lab_is_out_of_gamut() {
        assert!(is_out_of_gamut(50.0, 100.0, -100.0));
        assert!(is_out_of_gamut(90.0, -80.0, 0.0));
        assert!(is_out_of_gamut(10.0, 0.0, 60.0));
        assert!(!is_out_of_gamut(50.0, 0.0, 0.0));
        assert!(!is_out_of_gamut(100.0, 0.0, 0.0));
        assert!(!is_out_of_gamut(0.0, 0.0, 0.0));
    }

    #[test]
    fn tolerance_applies_at_the_boundary() {
        // Y grows by about 0.026 per unit of lightness near white.
        assert!(!is_out_of_gamut(100.0001, 0.0, 0.0));
        assert!(is_out_of_gamut(100.001, 0.0, 0.0));

        let linear = Lab::new(100.0001, 0.0, 0.0).to_srgb_linear();
        assert!(!linear.in_gamut());
        assert!(linear.in_gamut_within(GAMUT_EPSILON));
        assert_eq!(
            lab_to_rgb(Lab::new(100.0001, 0.0, 0.0), 255),
            Color::opaque(255, 255, 255)
        );
    }

    #[test]
    fn lightness_beyond_white_is_out_of_gamut() {
        assert!(is_out_of_gamut(101.0, 0.0, 0.0));
        assert!(is_out_of_gamut(-1.0, 0.0, 0.0));
    }

    #[test]
    fn in_gamut_never_needs_clipping() {
        for l in (0..=100).step_by(5) {
            for a in (-100..=100).step_by(10) {
                for b in (-100..=100).step_by(10) {
                    let lab = Lab::new(l as Component, a as Component, b as Component);
                    if lab.in_srgb_gamut() {
                        let unclipped = lab.to_srgb_linear().to_gamma_encoded();
                        assert_eq!(unclipped.to_color(255), lab.to_srgb().to_color(255));
                    }
                }
            }
        }
    }

    #[test]
    fn mapped_colors_are_in_gamut_and_keep_lightness() {
        for lab in [
            Lab::new(50.0, 100.0, -100.0),
            Lab::new(90.0, -80.0, 0.0),
            Lab::new(30.0, 60.0, 90.0),
        ] {
            let mapped = lab.map_into_gamut();
            assert!(mapped.in_gamut_within(GAMUT_EPSILON));
            let mapped_lab = mapped.to_lab();
            assert!(
                (mapped_lab.lightness - lab.lightness).abs() < 5.0,
                "{lab:?} -> {mapped_lab:?}"
            );
        }
    }

    #[test]
    fn mapping_an_in_gamut_color_is_a_no_op() {
        let lab = rgb_to_lab(Color::default());
        assert_eq!(lab.map_into_gamut().to_color(255), Color::default());
    }

    #[test]
    fn mapping_extreme_lightness() {
        assert_eq!(
            Lab::new(120.0, 10.0, 10.0).map_into_gamut(),
            Srgb::new(1.0, 1.0, 1.0)
        );
        assert_eq!(
            Lab::new(-5.0, 10.0, 10.0).map_into_gamut(),
            Srgb::new(0.0, 0.0, 0.0)
        );
    }
}
