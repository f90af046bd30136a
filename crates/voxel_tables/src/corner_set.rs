//! Bitset over the 8 cube corners.
//!
//! A corner set is the same 8-bit value as a case mask: bit `i` set means
//! corner `i` is a member.

use std::fmt;

use crate::constants::CORNER_COUNT;

/// Corner identifier (0..8).
pub type Corner = u8;

/// Set of cube corners stored as an 8-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
  /// Empty set.
  pub const EMPTY: Self = Self(0);

  /// All 8 corners.
  pub const ALL: Self = Self(u8::MAX);

  /// Build a set from a raw case mask.
  #[inline]
  pub const fn from_mask(mask: u8) -> Self {
    Self(mask)
  }

  /// Build a set from a list of corners.
  pub fn from_corners(corners: &[Corner]) -> Self {
    corners.iter().fold(Self::EMPTY, |mut set, &c| {
      set.insert(c);
      set
    })
  }

  /// Raw 8-bit mask.
  #[inline]
  pub const fn mask(self) -> u8 {
    self.0
  }

  #[inline]
  pub const fn contains(self, corner: Corner) -> bool {
    corner < CORNER_COUNT as u8 && (self.0 >> corner) & 1 == 1
  }

  #[inline]
  pub fn insert(&mut self, corner: Corner) {
    debug_assert!((corner as usize) < CORNER_COUNT);
    self.0 |= 1 << corner;
  }

  #[inline]
  pub fn remove(&mut self, corner: Corner) {
    debug_assert!((corner as usize) < CORNER_COUNT);
    self.0 &= !(1 << corner);
  }

  /// Number of member corners.
  #[inline]
  pub const fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  #[inline]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Corners not in this set.
  #[inline]
  pub const fn complement(self) -> Self {
    Self(!self.0)
  }

  #[inline]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  #[inline]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Lowest member corner.
  #[inline]
  pub const fn first(self) -> Option<Corner> {
    if self.0 == 0 {
      None
    } else {
      Some(self.0.trailing_zeros() as Corner)
    }
  }

  /// Iterate members in ascending corner order.
  pub fn iter(self) -> impl Iterator<Item = Corner> {
    let mask = self.0;
    (0..CORNER_COUNT as Corner).filter(move |&c| (mask >> c) & 1 == 1)
  }

  /// Collect members in ascending order.
  pub fn to_vec(self) -> Vec<Corner> {
    self.iter().collect()
  }
}

impl fmt::Debug for CornerSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl fmt::Display for CornerSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

impl FromIterator<Corner> for CornerSet {
  fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
    let mut set = Self::EMPTY;
    for corner in iter {
      set.insert(corner);
    }
    set
  }
}

#[cfg(test)]
#[path = "corner_set_test.rs"]
mod corner_set_test;
