//! Peg colors
//!
//! Colors are small integers (0-5). A `ColorSet` is a bit set over them, used both
//! for the colors of a sequence and for the per-position domains of the solver.

use std::fmt;

/// Number of distinct peg colors
pub const COLORS: u8 = 6;

/// Display names, indexed by color value
pub const COLOR_NAMES: [&str; COLORS as usize] =
    ["blue", "green", "purple", "orange", "yellow", "pink"];

/// Name of a color, or `"?"` when out of range
#[must_use]
pub fn color_name(color: u8) -> &'static str {
    COLOR_NAMES.get(usize::from(color)).copied().unwrap_or("?")
}

/// Look up a color by (case-insensitive) name or single digit
#[must_use]
pub fn parse_color(token: &str) -> Option<u8> {
    let token = token.trim().to_lowercase();
    if let Ok(value) = token.parse::<u8>() {
        return (value < COLORS).then_some(value);
    }
    COLOR_NAMES
        .iter()
        .position(|&name| name == token)
        .map(|idx| idx as u8)
}

/// A set of colors stored as a bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every color
    pub const FULL: Self = Self((1 << COLORS) - 1);

    /// A set holding exactly one color
    #[inline]
    #[must_use]
    pub const fn single(color: u8) -> Self {
        debug_assert!(color < COLORS, "color out of range");
        Self(1 << color)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, color: u8) -> bool {
        color < COLORS && self.0 & (1 << color) != 0
    }

    #[inline]
    pub fn insert(&mut self, color: u8) {
        self.0 |= Self::single(color).0;
    }

    #[inline]
    pub fn remove(&mut self, color: u8) {
        self.0 &= !Self::single(color).0;
    }

    /// Keep `color` only (if it was present)
    #[inline]
    pub fn retain_only(&mut self, color: u8) {
        self.0 &= Self::single(color).0;
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every color of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Colors in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate colors in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..COLORS).filter(move |&color| self.contains(color))
    }
}

impl FromIterator<u8> for ColorSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "}}")
    }
}
