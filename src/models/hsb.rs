//! Model a color with the HSB (HSV) notation in the sRGB color space.

use crate::color::Component;

chromapick_macros::gen_model! {
    /// A color specified with the HSB notation in the sRGB color space. All
    /// three components are fractions in [0..1], hue included.
    pub struct Hsb {
        /// The hue component of the color, a fraction of a full turn.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The brightness (value) component of the color.
        pub brightness: Component,
    }
}
