//! Conversions between the sRGB, HSB and CIE-Lab models, and the byte level
//! functions the picker controls call.
//!
//! Conversions only operate on the 3 color components. Alpha is carried by
//! the byte level [`Color`] and never touched here.
//!
//! ```rust
//! use chromapick::{hsb_to_rgb, rgb_to_hsb, Color};
//! let hsb = rgb_to_hsb(Color::opaque(255, 0, 0));
//! assert_eq!(hsb_to_rgb(hsb, 255), Color::opaque(255, 0, 0));
//! ```

use crate::{
    color::{to_byte, to_fraction, Color, Components, HsbCoord, LabCoord},
    models::{Hsb, Lab, Srgb, SrgbLinear},
};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        util::rgb_to_hsb(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_linear_light().to_xyz())
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsb_to_rgb(&self.to_components()).into()
    }
}

impl Lab {
    /// Convert this color to linear sRGB without clipping. Components outside
    /// [0..1] mean the color is outside the sRGB gamut.
    pub fn to_srgb_linear(&self) -> SrgbLinear {
        SrgbLinear::from(self.to_xyz())
    }

    /// Convert this color to gamma encoded sRGB, clipping into gamut.
    pub fn to_srgb(&self) -> Srgb {
        self.to_srgb_linear().clip().to_gamma_encoded()
    }
}

/// Convert a byte color to fractional HSB.
pub fn rgb_to_hsb(color: Color) -> Hsb {
    Srgb::from(color).to_hsb()
}

/// Convert fractional HSB to a byte color with the given alpha.
pub fn hsb_to_rgb(hsb: Hsb, alpha: u8) -> Color {
    hsb.to_srgb().to_color(alpha)
}

/// Convert a byte color to real valued CIE-Lab.
pub fn rgb_to_lab(color: Color) -> Lab {
    Srgb::from(color).to_lab()
}

/// Convert real valued CIE-Lab to a byte color with the given alpha. Colors
/// outside the sRGB gamut are clipped; see [`crate::is_out_of_gamut`].
pub fn lab_to_rgb(lab: Lab, alpha: u8) -> Color {
    lab.to_srgb().to_color(alpha)
}

impl Color {
    /// Derive the byte HSB coordinate of this color.
    pub fn to_hsb_coord(&self) -> HsbCoord {
        let Components(hue, saturation, brightness) = rgb_to_hsb(*self).to_components();
        // A hue that rounds to a full turn wraps around to zero.
        HsbCoord::new(to_byte(hue), to_byte(saturation), to_byte(brightness)).wrapped()
    }

    /// Derive the byte Lab coordinate of this color, clamped into the stored
    /// ranges.
    pub fn to_lab_coord(&self) -> LabCoord {
        let Lab { lightness, a, b } = rgb_to_lab(*self);
        LabCoord::clamped(lightness, a, b)
    }
}

impl HsbCoord {
    /// This coordinate as fractional HSB.
    pub fn to_model(&self) -> Hsb {
        Hsb::new(
            to_fraction(self.hue),
            to_fraction(self.saturation),
            to_fraction(self.brightness),
        )
    }

    /// Convert to a byte color with the given alpha.
    pub fn to_color(&self, alpha: u8) -> Color {
        hsb_to_rgb(self.to_model(), alpha)
    }
}

impl LabCoord {
    /// This coordinate as real valued CIE-Lab.
    pub fn to_model(&self) -> Lab {
        self.to_components().into()
    }

    /// Convert to a byte color with the given alpha, clipping into the sRGB
    /// gamut.
    pub fn to_color(&self, alpha: u8) -> Color {
        lab_to_rgb(self.to_model(), alpha)
    }
}

mod util {
    use crate::color::Components;

    /// Convert from RGB notation to HSB notation. Hue is a fraction of a turn
    /// in [0..1) and is 0 when the color has no chroma.
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;

        let saturation = if max > 0.0 { chroma / max } else { 0.0 };

        let hue = if chroma > 0.0 {
            let sector = if max == red {
                (green - blue) / chroma + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / chroma + 2.0
            } else {
                (red - green) / chroma + 4.0
            };
            (sector / 6.0).rem_euclid(1.0)
        } else {
            0.0
        };

        Components(hue, saturation, max)
    }

    /// Convert from HSB notation to RGB notation.
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;

        if saturation <= 0.0 {
            return Components(brightness, brightness, brightness);
        }

        let scaled = hue.rem_euclid(1.0) * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;

        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let v = brightness;

        match sector as u8 {
            0 => Components(v, t, p),
            1 => Components(q, v, p),
            2 => Components(p, v, t),
            3 => Components(p, q, v),
            4 => Components(t, p, v),
            _ => Components(v, p, q),
        }
    }
}
