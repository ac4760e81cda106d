//! The color palette: six named colors plus bitmask sets over them.
//!
//! Each color carries a distinct bit flag. Bit-disjointness is what lets
//! the scoring path count shared colors with a single mask intersection
//! instead of a nested scan; see [`ColorSet`].
//!
//! An empty slot is not a palette member. The in-progress step stores
//! `Option<Color>`, so finalized records cannot contain an empty value
//! by construction.

use serde::{Deserialize, Serialize};

/// One of the six slot-fillable colors.
///
/// Discriminants are the wire-stable bit flags. Every color owns exactly
/// one bit, so a set of colors fits in a `u8` mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0x01,
    Green = 0x02,
    Blue = 0x04,
    Brown = 0x08,
    Yellow = 0x10,
    Black = 0x20,
}

impl Color {
    /// All palette colors, in declaration order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Brown,
        Color::Yellow,
        Color::Black,
    ];

    /// The bit flag for this color.
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Brown => "Brown",
            Color::Yellow => "Yellow",
            Color::Black => "Black",
        };
        write!(f, "{name}")
    }
}

/// A set of palette colors, stored as a bit mask.
///
/// ```
/// use codebreak::core::{Color, ColorSet};
///
/// let mut set = ColorSet::new();
/// assert!(set.insert(Color::Red));
/// assert!(!set.insert(Color::Red)); // already present
/// assert!(set.contains(Color::Red));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a color. Returns false if it was already present.
    pub fn insert(&mut self, color: Color) -> bool {
        let fresh = self.0 & color.bit() == 0;
        self.0 |= color.bit();
        fresh
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Number of colors in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Colors present in both sets.
    #[must_use]
    pub const fn intersection(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 & other.0)
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}
