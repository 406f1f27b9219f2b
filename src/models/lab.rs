//! Models for the CIE-Lab color space in rectangular and polar form.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue},
    models::xyz::{Xyz, XyzD65},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

chromapick_macros::gen_model! {
    /// A color in the CIE-Lab color space, referenced to D65. Lightness is in
    /// [0..100]; `a` and `b` are unbounded but within about ±128 for colors
    /// inside the sRGB gamut.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The green-red axis.
        pub a: Component,
        /// The blue-yellow axis.
        pub b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> XyzD65 {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::from_relative(Components(x, y, z))
    }

    /// The Euclidean distance between two colors (CIE76 ΔE*ab).
    pub fn delta_e(&self, other: &Lab) -> Component {
        let Components(dl, da, db) = self.to_components() - other.to_components();
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let Components(f0, f1, f2) = value.relative_to_white().map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

chromapick_macros::gen_model! {
    /// The CIE-Lab color space in cylindrical polar form.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component in degrees.
        pub hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Srgb;

    #[test]
    fn white_and_black() {
        let white = Lab::from(Srgb::new(1.0, 1.0, 1.0).to_linear_light().to_xyz());
        assert_component_eq!(white.lightness, 100.0);
        assert_component_eq!(white.a, 0.0);
        assert_component_eq!(white.b, 0.0);

        let black = Lab::from(Srgb::new(0.0, 0.0, 0.0).to_linear_light().to_xyz());
        assert_component_eq!(black.lightness, 0.0);
        assert_component_eq!(black.a, 0.0);
        assert_component_eq!(black.b, 0.0);
    }

    #[test]
    fn lab_to_xyz_inverts_xyz_to_lab() {
        for lab in [
            Lab::new(63.065, -10.161, -44.895),
            Lab::new(5.0, 20.0, -30.0),
            Lab::new(95.0, -2.0, 4.0),
        ] {
            let back = Lab::from(lab.to_xyz());
            assert_component_eq!(back.lightness, lab.lightness);
            assert_component_eq!(back.a, lab.a);
            assert_component_eq!(back.b, lab.b);
        }
    }

    #[test]
    fn polar_form() {
        let lch = Lab::new(50.0, 0.0, 10.0).to_polar();
        assert_component_eq!(lch.chroma, 10.0);
        assert_component_eq!(lch.hue, 90.0);

        let lab = lch.to_rectangular();
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 10.0);
    }

    #[test]
    fn achromatic_polar_hue_is_zero() {
        let lch = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(lch.chroma, 0.0);
        assert_eq!(lch.hue, 0.0);
    }

    #[test]
    fn delta_e_is_euclidean() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(53.0, 4.0, 0.0);
        assert_component_eq!(a.delta_e(&b), 5.0);
    }
}
