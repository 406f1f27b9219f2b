//! The picker coordinator: one [`ColorState`] plus the display state that
//! hangs off it.

use std::time::Instant;

use log::debug;

use crate::{
    blindness::ColorBlindnessMode,
    color::{Color, Components},
    config::PickerConfig,
    gamut::is_out_of_gamut,
    palette::Palette,
    state::{ColorState, Snapshot, Views},
    throttle::{DragThrottle, Surface},
};

/// A headless color picker.
#[derive(Debug)]
pub struct ColorPicker {
    state: ColorState,
    palette: Palette,
    blindness_mode: ColorBlindnessMode,
    canvas_throttle: DragThrottle,
    slider_throttle: DragThrottle,
    alpha_throttle: DragThrottle,
}

impl ColorPicker {
    /// Create a picker with no views.
    pub fn new(config: PickerConfig) -> Self {
        Self::with_views(config, Views::default())
    }

    /// Create a picker whose state notifies `views`.
    pub fn with_views(config: PickerConfig, views: Views) -> Self {
        let throttle = DragThrottle::new(config.drag_interval);
        Self {
            state: ColorState::with_views(config.initial_color, views),
            palette: config.palette,
            blindness_mode: config.blindness_mode,
            canvas_throttle: throttle.clone(),
            slider_throttle: throttle.clone(),
            alpha_throttle: throttle,
        }
    }

    /// The color state. Transitions go through its setters.
    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Mutable access to the state, for registering views.
    pub fn state_mut(&mut self) -> &mut ColorState {
        &mut self.state
    }

    /// The palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Save the current color, alpha included, to the end of the palette.
    pub fn add_current_to_palette(&mut self) -> Color {
        let color = self.state.color();
        self.palette.push(color);
        debug!("added {color} to the palette");
        color
    }

    /// Remove a saved color.
    pub fn remove_from_palette(&mut self, index: usize) -> Option<Color> {
        self.palette.remove(index)
    }

    /// Make a saved color the current one.
    pub fn select_from_palette(&self, index: usize) -> Option<Color> {
        let color = self.palette.get(index)?;
        self.state.set_from_rgb(color)?;
        Some(color)
    }

    /// The selected color blindness simulation.
    pub fn blindness_mode(&self) -> ColorBlindnessMode {
        self.blindness_mode
    }

    /// Select a color blindness simulation. Only previews are affected.
    pub fn set_blindness_mode(&mut self, mode: ColorBlindnessMode) {
        self.blindness_mode = mode;
    }

    /// The current color as seen through the selected simulation.
    pub fn preview(&self) -> Color {
        self.blindness_mode.apply(self.state.color())
    }

    /// The palette as seen through the selected simulation.
    pub fn palette_previews(&self) -> Vec<Color> {
        self.palette.previews(self.blindness_mode).collect()
    }

    /// True if the stored Lab coordinate has no sRGB color, which means the
    /// displayed color is a clipped approximation.
    ///
    /// A coordinate that the current color converts back to exactly is never
    /// flagged, even when rounding to whole units nudged it just past the
    /// gamut boundary. Colors set through RGB, HSB or hex always qualify.
    pub fn lab_warning(&self) -> bool {
        let Snapshot { color, lab, .. } = self.state.snapshot();
        if color.to_lab_coord() == lab {
            return false;
        }

        let Components(lightness, a, b) = lab.to_components();
        is_out_of_gamut(lightness, a, b)
    }

    fn throttle_mut(&mut self, surface: Surface) -> &mut DragThrottle {
        match surface {
            Surface::Canvas => &mut self.canvas_throttle,
            Surface::Slider => &mut self.slider_throttle,
            Surface::Alpha => &mut self.alpha_throttle,
        }
    }

    /// Returns true if a pointer move on `surface` at `now` should be
    /// converted and applied.
    pub fn drag(&mut self, surface: Surface, now: Instant) -> bool {
        self.throttle_mut(surface).sample(now)
    }

    /// The pointer was released on `surface`.
    pub fn release(&mut self, surface: Surface) {
        self.throttle_mut(surface).release();
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::color::{HsbCoord, LabCoord};

    #[test]
    fn starts_from_the_config() {
        let config = PickerConfig {
            initial_color: Color::new(1, 2, 3, 4),
            blindness_mode: ColorBlindnessMode::Tritanopia,
            palette: [Color::opaque(9, 9, 9)].into_iter().collect(),
            ..Default::default()
        };
        let picker = ColorPicker::new(config);
        assert_eq!(picker.state().color(), Color::new(1, 2, 3, 4));
        assert_eq!(picker.blindness_mode(), ColorBlindnessMode::Tritanopia);
        assert_eq!(picker.palette().len(), 1);
    }

    #[test]
    fn palette_round_trip() {
        let mut picker = ColorPicker::default();
        picker.state().set_alpha(100);
        assert_eq!(picker.add_current_to_palette(), Color::new(0, 162, 232, 100));

        picker.state().set_from_hsb(HsbCoord::new(0, 255, 255));
        picker.add_current_to_palette();
        assert_eq!(picker.palette().len(), 2);

        assert_eq!(picker.select_from_palette(0), Some(Color::new(0, 162, 232, 100)));
        assert_eq!(picker.state().color(), Color::new(0, 162, 232, 100));
        assert_eq!(picker.select_from_palette(7), None);

        assert_eq!(picker.remove_from_palette(0), Some(Color::new(0, 162, 232, 100)));
        assert_eq!(picker.palette().get(0), Some(Color::new(255, 0, 0, 100)));
    }

    #[test]
    fn previews_do_not_change_the_color() {
        let mut picker = ColorPicker::default();
        picker.set_blindness_mode(ColorBlindnessMode::RodAchromatopsia);
        let preview = picker.preview();
        assert_eq!(preview.red, preview.green);
        assert_eq!(picker.state().color(), Color::default());
    }

    #[test]
    fn lab_warning_follows_the_stored_coordinate() {
        let picker = ColorPicker::default();
        assert!(!picker.lab_warning());

        picker.state().set_from_lab(50.0, 100.0, -100.0);
        assert!(picker.lab_warning());

        picker.state().set_from_lab(50.0, 0.0, 0.0);
        assert!(!picker.lab_warning());

        // Rounds to a hair outside the gamut, but (254, 0, 0) converts back
        // to exactly this coordinate.
        picker.state().set_from_lab(53.0, 80.0, 67.0);
        assert_eq!(picker.state().color(), Color::opaque(254, 0, 0));
        assert!(!picker.lab_warning());
    }

    #[test]
    fn colors_picked_outside_lab_never_warn() {
        let picker = ColorPicker::default();

        picker.state().set_from_rgb(Color::opaque(255, 0, 0));
        assert_eq!(picker.state().lab(), LabCoord::clamped(53.0, 80.0, 67.0));
        assert!(!picker.lab_warning());

        picker.state().set_from_hsb(HsbCoord::new(85, 255, 255));
        assert!(!picker.lab_warning());

        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    picker.state().set_from_rgb(Color::opaque(r, g, b));
                    assert!(!picker.lab_warning(), "{:?}", picker.state().snapshot());
                }
            }
        }
    }

    #[test]
    fn surfaces_are_throttled_independently() {
        let start = Instant::now();
        let mut picker = ColorPicker::default();
        assert!(picker.drag(Surface::Canvas, start));
        assert!(!picker.drag(Surface::Canvas, start + Duration::from_millis(10)));
        assert!(picker.drag(Surface::Slider, start + Duration::from_millis(10)));
        picker.release(Surface::Canvas);
        assert!(picker.drag(Surface::Canvas, start + Duration::from_millis(20)));
    }
}
