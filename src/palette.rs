//! An ordered collection of saved colors.

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{blindness::ColorBlindnessMode, color::Color};

/// Saved colors in the order they were added. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Remove and return the color at `index`, shifting later colors down.
    /// Returns `None` if there is no such color.
    pub fn remove(&mut self, index: usize) -> Option<Color> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            warn!(
                "palette has {} colors, cannot remove index {index}",
                self.colors.len()
            );
            None
        }
    }

    /// The color at `index`.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// The number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// The colors as they should be displayed with the given simulation.
    pub fn previews(&self, mode: ColorBlindnessMode) -> impl Iterator<Item = Color> + '_ {
        self.iter().map(move |color| mode.apply(color))
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
