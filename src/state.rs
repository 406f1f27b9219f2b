//! The single source of truth for the picked color.
//!
//! [`ColorState`] holds the canonical [`Color`] together with the HSB and
//! Lab coordinates derived from it. Every transition re-derives the other
//! spaces and then notifies the registered [`ColorView`]s synchronously.
//! Views receive a shared reference to the state; a mutation they request
//! while a notification is still running is ignored, which stops two views
//! of the same value from updating each other forever.

use std::cell::{Cell, RefCell};

use bitflags::bitflags;
use log::{debug, trace};

use crate::{
    color::{Color, Component, HsbCoord, LabCoord},
    hex::parse_hex,
};

bitflags! {
    /// The representations that differ after a transition.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changed : u8 {
        /// Red, green or blue changed.
        const RGB = 1 << 0;
        /// The stored HSB coordinate changed.
        const HSB = 1 << 1;
        /// The stored Lab coordinate changed.
        const LAB = 1 << 2;
        /// Alpha changed.
        const ALPHA = 1 << 3;
    }
}

/// All three views of the color at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// The canonical color.
    pub color: Color,
    /// The HSB coordinate of `color`.
    pub hsb: HsbCoord,
    /// The Lab coordinate of `color`.
    pub lab: LabCoord,
}

impl Snapshot {
    /// Derive both coordinates from a canonical color.
    pub fn from_color(color: Color) -> Self {
        Self {
            color,
            hsb: color.to_hsb_coord(),
            lab: color.to_lab_coord(),
        }
    }

    fn changes_from(&self, previous: &Snapshot) -> Changed {
        let mut changed = Changed::empty();
        let (a, b) = (&self.color, &previous.color);
        changed.set(
            Changed::RGB,
            (a.red, a.green, a.blue) != (b.red, b.green, b.blue),
        );
        changed.set(Changed::ALPHA, a.alpha != b.alpha);
        changed.set(Changed::HSB, self.hsb != previous.hsb);
        changed.set(Changed::LAB, self.lab != previous.lab);
        changed
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_color(Color::default())
    }
}

/// Anything that displays or reacts to the picked color.
pub trait ColorView {
    /// Called after every transition that changed something. `state`
    /// already holds the new values.
    fn color_changed(&mut self, state: &ColorState, changed: Changed);
}

impl<F> ColorView for F
where
    F: FnMut(&ColorState, Changed),
{
    fn color_changed(&mut self, state: &ColorState, changed: Changed) {
        self(state, changed)
    }
}

/// The collaborators of a picker, one optional slot per capability. Views
/// are notified in field order, `extra` last.
#[derive(Default)]
pub struct Views {
    /// The 2D canvas and the 1D slider next to it.
    pub canvas: Option<Box<dyn ColorView>>,
    /// Numeric red, green and blue boxes.
    pub rgb: Option<Box<dyn ColorView>>,
    /// Numeric hue, saturation and brightness boxes.
    pub hsb: Option<Box<dyn ColorView>>,
    /// Numeric L*, a* and b* boxes.
    pub lab: Option<Box<dyn ColorView>>,
    /// The alpha box and strip.
    pub alpha: Option<Box<dyn ColorView>>,
    /// The hex text box.
    pub hex: Option<Box<dyn ColorView>>,
    /// The palette.
    pub palette: Option<Box<dyn ColorView>>,
    /// The color blindness preview.
    pub blindness: Option<Box<dyn ColorView>>,
    /// Any other observers.
    pub extra: Vec<Box<dyn ColorView>>,
}

impl Views {
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ColorView>> {
        [
            &mut self.canvas,
            &mut self.rgb,
            &mut self.hsb,
            &mut self.lab,
            &mut self.alpha,
            &mut self.hex,
            &mut self.palette,
            &mut self.blindness,
        ]
        .into_iter()
        .flatten()
        .chain(self.extra.iter_mut())
    }
}

/// Sets the propagation flag for as long as it lives.
struct PropagationGuard<'a>(&'a Cell<bool>);

impl<'a> PropagationGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for PropagationGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// The picked color and the views that display it.
pub struct ColorState {
    snapshot: Cell<Snapshot>,
    propagating: Cell<bool>,
    views: RefCell<Views>,
}

impl ColorState {
    /// Create a state holding `initial` with no views.
    pub fn new(initial: Color) -> Self {
        Self::with_views(initial, Views::default())
    }

    /// Create a state holding `initial` that notifies `views`.
    pub fn with_views(initial: Color, views: Views) -> Self {
        Self {
            snapshot: Cell::new(Snapshot::from_color(initial)),
            propagating: Cell::new(false),
            views: RefCell::new(views),
        }
    }

    /// Access the views, for wiring that happens after construction.
    pub fn views_mut(&mut self) -> &mut Views {
        self.views.get_mut()
    }

    /// Register an extra view.
    pub fn add_view(&mut self, view: impl ColorView + 'static) {
        self.views.get_mut().extra.push(Box::new(view));
    }

    /// The current values.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.get()
    }

    /// The canonical color.
    pub fn color(&self) -> Color {
        self.snapshot.get().color
    }

    /// The stored HSB coordinate.
    pub fn hsb(&self) -> HsbCoord {
        self.snapshot.get().hsb
    }

    /// The stored Lab coordinate.
    pub fn lab(&self) -> LabCoord {
        self.snapshot.get().lab
    }

    /// True while views are being notified.
    pub fn is_propagating(&self) -> bool {
        self.propagating.get()
    }

    /// Set red, green, blue and alpha. HSB and Lab are derived.
    pub fn set_from_rgb(&self, color: Color) -> Option<Changed> {
        self.transition("rgb", |_| Snapshot::from_color(color))
    }

    /// Set the HSB coordinate. The coordinate is kept as given, apart from a
    /// hue of 255 which wraps to 0. RGB is derived from it and Lab from RGB.
    /// Alpha is unchanged.
    pub fn set_from_hsb(&self, hsb: HsbCoord) -> Option<Changed> {
        let hsb = hsb.wrapped();
        self.transition("hsb", |previous| {
            let color = hsb.to_color(previous.color.alpha);
            Snapshot {
                color,
                hsb,
                lab: color.to_lab_coord(),
            }
        })
    }

    /// Set the Lab coordinate from real valued units. The values are clamped
    /// into the stored ranges and kept; RGB is derived from them, clipping
    /// into the sRGB gamut, and HSB from RGB. Alpha is unchanged.
    pub fn set_from_lab(
        &self,
        lightness: Component,
        a: Component,
        b: Component,
    ) -> Option<Changed> {
        self.transition("lab", |previous| {
            let lab = LabCoord::clamped(lightness, a, b);
            let color = lab.to_color(previous.color.alpha);
            Snapshot {
                color,
                hsb: color.to_hsb_coord(),
                lab,
            }
        })
    }

    /// Set alpha only.
    pub fn set_alpha(&self, alpha: u8) -> Option<Changed> {
        self.transition("alpha", |previous| Snapshot {
            color: previous.color.with_alpha(alpha),
            ..previous
        })
    }

    /// Set the color from hex text. Malformed text is ignored and leaves the
    /// color unchanged.
    pub fn set_from_hex(&self, text: &str) -> Option<Changed> {
        match parse_hex(text) {
            Ok(color) => self.set_from_rgb(color),
            Err(err) => {
                debug!("ignoring hex text {text:?}: {err}");
                None
            }
        }
    }

    /// Apply a transition and notify views. Returns `None` if the transition
    /// was rejected because views are still being notified of an earlier
    /// one.
    fn transition(
        &self,
        name: &str,
        next: impl FnOnce(Snapshot) -> Snapshot,
    ) -> Option<Changed> {
        if self.propagating.get() {
            debug!("ignoring {name} change requested while views are updating");
            return None;
        }

        let previous = self.snapshot.get();
        let current = next(previous);
        let changed = current.changes_from(&previous);
        self.snapshot.set(current);

        trace!("{name} change {previous:?} -> {current:?} ({changed:?})");

        if !changed.is_empty() {
            self.notify(changed);
        }

        Some(changed)
    }

    fn notify(&self, changed: Changed) {
        let _guard = PropagationGuard::enter(&self.propagating);

        let Ok(mut views) = self.views.try_borrow_mut() else {
            debug!("views are already being notified");
            return;
        };

        for view in views.iter_mut() {
            view.color_changed(self, changed);
        }
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl std::fmt::Debug for ColorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorState")
            .field("snapshot", &self.snapshot.get())
            .field("propagating", &self.propagating.get())
            .finish_non_exhaustive()
    }
}
