//! # Indicator Lights
//!
//! Fixed-width bit-vectors for a machine's light panel. Bit `i` is light `i`,
//! and pressing a button XORs the panel with the button's wiring. The width
//! is chosen per machine, so the storage is a vector of 64-bit words rather
//! than a single integer.

use itertools::Itertools;
use std::fmt;
use std::ops::BitXorAssign;

const WORD_BITS: usize = 64;

/// A configuration of `width` lights.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lights {
    width: usize,
    words: Vec<u64>,
}

impl Lights {
    /// All lights off.
    pub fn off(width: usize) -> Self {
        Self {
            width,
            words: vec![0; width.div_ceil(WORD_BITS)],
        }
    }

    /// Lights with exactly the given indices on. Repeated indices are
    /// harmless.
    ///
    /// # Panics
    /// If an index is not below `width`.
    pub fn from_indices<I: IntoIterator<Item = usize>>(width: usize, indices: I) -> Self {
        let mut lights = Self::off(width);
        for i in indices {
            lights.set(i, true);
        }
        lights
    }

    /// Number of lights on the panel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether light `i` is on.
    ///
    /// # Panics
    /// If `i` is not below the width.
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.width, "light {} out of {}", i, self.width);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Switches light `i` on or off.
    ///
    /// # Panics
    /// If `i` is not below the width.
    pub fn set(&mut self, i: usize, on: bool) {
        assert!(i < self.width, "light {} out of {}", i, self.width);
        let mask = 1u64 << (i % WORD_BITS);
        if on {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    /// True when every light is off.
    pub fn is_off(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of lights that are on.
    pub fn count_on(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of the lights that are on, in increasing order.
    pub fn iter_on(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&i| self.get(i))
    }

    /// The configuration after flipping every light `toggle` has on.
    pub fn apply(&self, toggle: &Lights) -> Lights {
        let mut next = self.clone();
        next ^= toggle;
        next
    }

    /// The whole panel packed in one word, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        (self.width <= WORD_BITS).then(|| self.words.first().copied().unwrap_or(0))
    }
}

impl BitXorAssign<&Lights> for Lights {
    fn bitxor_assign(&mut self, rhs: &Lights) {
        assert_eq!(self.width, rhs.width, "light panels differ in width");
        for (a, b) in self.words.iter_mut().zip(&rhs.words) {
            *a ^= b;
        }
    }
}

impl fmt::Display for Lights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagram: String = (0..self.width)
            .map(|i| if self.get(i) { '#' } else { '.' })
            .collect();
        write!(f, "[{}]", diagram)
    }
}

impl fmt::Debug for Lights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Wiring of one button: the lights a single press flips.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Button {
    flips: Lights,
}

impl Button {
    pub fn new(flips: Lights) -> Self {
        Self { flips }
    }

    /// # Panics
    /// If an index is not below `width`.
    pub fn from_indices<I: IntoIterator<Item = usize>>(width: usize, indices: I) -> Self {
        Self::new(Lights::from_indices(width, indices))
    }

    pub fn flips(&self) -> &Lights {
        &self.flips
    }

    pub fn width(&self) -> usize {
        self.flips.width()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.flips.iter_on().join(","))
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
