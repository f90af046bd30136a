//! Fixed fans for the star pattern.
//!
//! A star is a corner with all three neighbors active. Its cut is a 4-triangle
//! fan over the 6 edges leaving the star. The sequences are literal and
//! not derived from the other rules; row `i` belongs to star center `i`.

use crate::constants::{CORNER_COUNT, MAX_TRIANGLES};
use crate::topology::EdgeId;

pub const STAR_FANS: [[EdgeId; 3 * MAX_TRIANGLES]; CORNER_COUNT] = [
  [4, 9, 8, 4, 6, 9, 3, 6, 4, 3, 5, 6],
  [7, 8, 10, 7, 2, 8, 5, 2, 7, 5, 1, 2],
  [2, 11, 9, 2, 7, 11, 0, 7, 2, 0, 3, 7],
  [6, 10, 11, 6, 4, 10, 1, 4, 6, 1, 0, 4],
  [4, 11, 10, 4, 6, 11, 0, 6, 4, 0, 1, 6],
  [7, 9, 11, 7, 2, 9, 3, 2, 7, 3, 0, 2],
  [2, 10, 8, 2, 7, 10, 1, 7, 2, 1, 5, 7],
  [6, 8, 9, 6, 4, 8, 5, 4, 6, 5, 3, 4],
];
