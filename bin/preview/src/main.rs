//! Render the a*/b* plane of CIE-Lab at a fixed lightness, the way the picker
//! canvas shows it, followed by a hue sweep seen through every color
//! blindness simulation.
//!
//! Usage: chromapick-preview [LIGHTNESS] [OUTPUT]

use chromapick::{
    is_out_of_gamut, lab_to_rgb, models::Lab, Color, ColorBlindnessMode, Component, HsbCoord,
};
use image::{Rgba, RgbaImage};

const PLANE: u32 = 256;
const STRIP_HEIGHT: u32 = 24;
const CHECKER: u32 = 8;

fn checker(x: u32, y: u32) -> Rgba<u8> {
    if (x / CHECKER + y / CHECKER) % 2 == 0 {
        Rgba([204, 204, 204, 255])
    } else {
        Rgba([255, 255, 255, 255])
    }
}

fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, color.alpha])
}

fn main() {
    let mut args = std::env::args().skip(1);
    let lightness: Component = args
        .next()
        .map(|arg| arg.parse().expect("lightness must be a number"))
        .unwrap_or(50.0);
    let output = args.next().unwrap_or_else(|| "preview.png".to_owned());

    let modes = ColorBlindnessMode::ALL;
    let height = PLANE + modes.len() as u32 * STRIP_HEIGHT;
    let mut img = RgbaImage::new(PLANE, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if y < PLANE {
            // a* grows to the right and b* grows upwards, both over [-128..128).
            let a = x as Component - 128.0;
            let b = 127.0 - y as Component;

            *pixel = if is_out_of_gamut(lightness, a, b) {
                checker(x, y)
            } else {
                rgba(lab_to_rgb(Lab::new(lightness, a, b), 255))
            };
        } else {
            let mode = modes[((y - PLANE) / STRIP_HEIGHT) as usize];
            let hue = (x * 255 / PLANE) as u8;
            let color = HsbCoord::new(hue, 255, 255).to_color(255);
            *pixel = rgba(mode.apply(color));
        }
    }

    img.save(&output)
        .unwrap_or_else(|err| panic!("could not write image to {output}: {err}"));

    println!("L* = {lightness}, strips: {modes:?}, written to {output}");
}
