//! Model a color in the sRGB color space.

use crate::{
    color::{Color, Component},
    gamma,
    math::{transform, transform_3x3, Transform},
    models::xyz::XyzD65,
};

/// Tags that specify how the components of an [`Rgb`] model are encoded.
pub mod encoding {
    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Components are sRGB gamma encoded, as stored in a byte.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

chromapick_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl<E: encoding::Encoding> Rgb<E> {
    /// Check whether this color is within gamut limits.
    #[inline]
    pub fn in_gamut(&self) -> bool {
        self.in_gamut_within(0.0)
    }

    /// Check whether every component is within [0..1], allowing for
    /// `tolerance` on either side.
    #[inline]
    pub fn in_gamut_within(&self, tolerance: Component) -> bool {
        self.to_components()
            .all(|v| v >= -tolerance && v <= 1.0 + tolerance)
    }

    /// Clip the components of the color into [0..1].
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        gamma::to_linear_light(&self.to_components()).into()
    }

    /// Quantize into a byte [`Color`] with the given alpha. Components are
    /// clipped first.
    pub fn to_color(&self, alpha: u8) -> Color {
        Color::from_components(self.to_components(), alpha)
    }
}

impl From<Color> for Srgb {
    fn from(value: Color) -> Self {
        value.to_components().into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        gamma::to_gamma_encoded(&self.to_components()).into()
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> XyzD65 {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}
