//! Disease colors, color sets and per-color maps.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four diseases. There are exactly four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiseaseColor {
    Black,
    Blue,
    Red,
    Yellow,
}

impl DiseaseColor {
    pub const ALL: [DiseaseColor; 4] = [
        DiseaseColor::Black,
        DiseaseColor::Blue,
        DiseaseColor::Red,
        DiseaseColor::Yellow,
    ];

    pub const COUNT: usize = 4;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DiseaseColor::Black => "black",
            DiseaseColor::Blue => "blue",
            DiseaseColor::Red => "red",
            DiseaseColor::Yellow => "yellow",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::fmt::Display for DiseaseColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of disease colors stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    #[must_use]
    pub const fn contains(self, color: DiseaseColor) -> bool {
        self.0 & color.bit() != 0
    }

    pub fn insert(&mut self, color: DiseaseColor) {
        self.0 |= color.bit();
    }

    pub fn remove(&mut self, color: DiseaseColor) {
        self.0 &= !color.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = DiseaseColor> {
        DiseaseColor::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<DiseaseColor> for ColorSet {
    fn from_iter<I: IntoIterator<Item = DiseaseColor>>(iter: I) -> Self {
        let mut set = ColorSet::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

/// One value per disease color.
///
/// ```
/// use pandemic_engine::disease::{ColorMap, DiseaseColor};
///
/// let mut cubes: ColorMap<u8> = ColorMap::default();
/// cubes[DiseaseColor::Red] += 2;
/// assert_eq!(cubes[DiseaseColor::Red], 2);
/// assert_eq!(cubes.iter().map(|(_, n)| *n).sum::<u8>(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    pub fn new(factory: impl Fn(DiseaseColor) -> T) -> Self {
        Self {
            data: DiseaseColor::ALL.map(factory),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DiseaseColor, &T)> {
        DiseaseColor::ALL.into_iter().zip(self.data.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<DiseaseColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: DiseaseColor) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<DiseaseColor> for ColorMap<T> {
    fn index_mut(&mut self, color: DiseaseColor) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
