//! Fixed geometry of the unit cube cell.
//!
//! Corner positions, corner adjacency, the canonical edge numbering and the
//! face canonicalization used by the case classifier.
//!
//! # Edge Layout
//!
//! Edges are the corner pairs at Hamming distance 1, numbered by sorting the
//! `(min, max)` pairs lexicographically:
//!
//! ```text
//!        .--11---.
//!       /|      /|
//!      9 6    10 7
//!     .--8----.  |
//!     |  |    |  |
//!     2  |    4  |
//!     |  .--5-|--.
//!     | /     | /
//!     |1      |3
//!     .--0----.
//!
//! Edge  Axis  Corners
//! ────  ────  ───────
//!   0    X    [0, 1]
//!   1    Y    [0, 2]
//!   2    Z    [0, 4]
//!   3    Y    [1, 3]
//!   4    Z    [1, 5]
//!   5    X    [2, 3]
//!   6    Z    [2, 6]
//!   7    Z    [3, 7]
//!   8    X    [4, 5]
//!   9    Y    [4, 6]
//!  10    Y    [5, 7]
//!  11    X    [6, 7]
//! ```
//!
//! # Crossing Table
//!
//! `CROSSING_TABLE[mask]` is a 12-bit edge mask; bit `e` is set when exactly
//! one endpoint of edge `e` is active in `mask`. It ships with the baked
//! tables: a kernel skips cells whose entry is zero and uses the popcount to
//! size its vertex buffer before reading `edges`.

use glam::IVec3;

use crate::constants::{CASE_COUNT, CORNER_COUNT, EDGE_COUNT};
use crate::corner_set::{Corner, CornerSet};

/// Edge identifier (0..12).
pub type EdgeId = u8;

/// Edge endpoint corner indices, sorted lexicographically.
pub const EDGE_CORNERS: [[Corner; 2]; EDGE_COUNT] = generate_edge_corners();

/// Inverse of `EDGE_CORNERS`: edge id for each corner pair, -1 if the corners
/// are not adjacent.
const EDGE_INDEX: [[i8; CORNER_COUNT]; CORNER_COUNT] = generate_edge_index();

/// `crossing_mask` for every case.
/// Index: 8-bit corner mask. Value: 12-bit mask of edges with a crossing.
pub const CROSSING_TABLE: [u16; CASE_COUNT] = generate_crossing_table();

const fn generate_edge_corners() -> [[Corner; 2]; EDGE_COUNT] {
  let mut edges = [[0; 2]; EDGE_COUNT];
  let mut next = 0;
  let mut a = 0;

  while a < CORNER_COUNT {
    let mut b = a + 1;
    while b < CORNER_COUNT {
      if (a ^ b).count_ones() == 1 {
        edges[next] = [a as Corner, b as Corner];
        next += 1;
      }
      b += 1;
    }
    a += 1;
  }

  assert!(next == EDGE_COUNT);
  edges
}

const fn generate_edge_index() -> [[i8; CORNER_COUNT]; CORNER_COUNT] {
  let mut index = [[-1i8; CORNER_COUNT]; CORNER_COUNT];
  let mut edge = 0;

  while edge < EDGE_COUNT {
    let [a, b] = EDGE_CORNERS[edge];
    index[a as usize][b as usize] = edge as i8;
    index[b as usize][a as usize] = edge as i8;
    edge += 1;
  }

  index
}

const fn generate_crossing_table() -> [u16; CASE_COUNT] {
  let mut table = [0u16; CASE_COUNT];
  let mut mask = 0;

  while mask < CASE_COUNT {
    table[mask] = crossing_mask(mask as u8);
    mask += 1;
  }

  table
}

/// Edges whose two endpoints disagree in `mask`.
#[inline]
pub const fn crossing_mask(mask: u8) -> u16 {
  let mut crossings = 0u16;
  let mut edge = 0;

  while edge < EDGE_COUNT {
    let [a, b] = EDGE_CORNERS[edge];
    crossings |= ((((mask >> a) ^ (mask >> b)) & 1) as u16) << edge;
    edge += 1;
  }

  crossings
}

/// Corner position on the [-1, +1]³ cube. Bit `j` of the id selects +1 on
/// axis `j`.
#[inline(always)]
pub const fn position(corner: Corner) -> IVec3 {
  IVec3::new(
    sign_of_bit(corner, 0),
    sign_of_bit(corner, 1),
    sign_of_bit(corner, 2),
  )
}

#[inline(always)]
const fn sign_of_bit(corner: Corner, bit: u32) -> i32 {
  if (corner >> bit) & 1 == 1 {
    1
  } else {
    -1
  }
}

/// Corners at Hamming distance 1.
#[inline]
pub const fn adjacent(corner: Corner) -> CornerSet {
  CornerSet::from_mask((1 << (corner ^ 1)) | (1 << (corner ^ 2)) | (1 << (corner ^ 4)))
}

/// Edge id connecting `a` and `b`, or `None` if they are not adjacent.
#[inline]
pub fn edge_id(a: Corner, b: Corner) -> Option<EdgeId> {
  let row = EDGE_INDEX.get(a as usize)?;
  let id = *row.get(b as usize)?;
  (id >= 0).then_some(id as EdgeId)
}

/// Axis (0 = X, 1 = Y, 2 = Z) an edge runs along.
#[inline]
pub const fn edge_axis(edge: EdgeId) -> usize {
  let [a, b] = EDGE_CORNERS[edge as usize];
  (a ^ b).trailing_zeros() as usize
}

/// The six cube faces, numbered by axis then side.
///
/// ```text
///        5     3
///     .-------.
///    /|      /|
///   / |     / |
///  .-------.  |
///  |  |    |  |
/// 0|  |    |  |1
///  |  .----|--.
///  | /     | /
///  |/      |/
///  .-------.
/// 2     4
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
  NegX = 0,
  PosX = 1,
  NegY = 2,
  PosY = 3,
  NegZ = 4,
  PosZ = 5,
}

impl Face {
  pub const ALL: [Face; 6] = [
    Face::NegX,
    Face::PosX,
    Face::NegY,
    Face::PosY,
    Face::NegZ,
    Face::PosZ,
  ];

  #[inline]
  pub const fn index(self) -> u8 {
    self as u8
  }

  /// The four corners lying on this face.
  pub fn corners(self) -> CornerSet {
    let axis = self.index() as usize / 2;
    let side = if self.index() % 2 == 0 { -1 } else { 1 };
    (0..CORNER_COUNT as Corner)
      .filter(|&c| position(c)[axis] == side)
      .collect()
  }
}

/// Canonical face shared by three corners, or `None` if no face contains all
/// three.
///
/// Checked strictly in the order -X, +X, -Y, +Y, -Z, +Z.
pub fn face_id(a: Corner, b: Corner, c: Corner) -> Option<Face> {
  let points = [position(a), position(b), position(c)];

  for axis in 0..3 {
    if points.iter().all(|p| p[axis] == -1) {
      return Some(Face::ALL[2 * axis]);
    }
    if points.iter().all(|p| p[axis] == 1) {
      return Some(Face::ALL[2 * axis + 1]);
    }
  }

  None
}

#[cfg(test)]
#[path = "topology_test.rs"]
mod topology_test;
