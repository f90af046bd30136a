//! Case classification: corner mask → triangles named by cube edges.
//!
//! # Algorithm Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STEP 1: Normalize                            │
//! │  active = corners set in the case mask                          │
//! │  more than 4 active → invert (mirror of the ≤4 case)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STEP 2: Isolated corners                     │
//! │  active corner with no active neighbor → 1 triangle             │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STEP 3: Adjacent pairs                       │
//! │  two adjacent corners, each with exactly one active neighbor    │
//! │  → 2 triangles                                                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STEP 4: Remainder (0, 3 or 4 corners)        │
//! │  3 on one face        → FaceTriangle (3 triangles)              │
//! │  4 on one face        → FaceBand     (2 triangles)              │
//! │  4 with one star      → Star         (4 triangles)              │
//! │  otherwise            → unresolved, reported, no triangles      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Triangles are concatenated in resolution order: isolated corners, then
//! pairs, then the remainder.

mod patterns;
mod star_table;

pub use patterns::{SubPattern, Triangle, TriangleList};
pub use star_table::STAR_FANS;

use smallvec::SmallVec;

use crate::constants::INVERSION_THRESHOLD;
use crate::corner_set::{Corner, CornerSet};
use crate::error::ClassifyError;
use crate::topology::{adjacent, face_id};

/// Result of classifying one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
  /// Case mask as given.
  pub case: u8,
  /// Whether the mask was complemented before classification.
  pub inverted: bool,
  /// Active corners after normalization.
  pub active: CornerSet,
  /// Sub-patterns in the order they were resolved.
  pub patterns: SmallVec<[SubPattern; 4]>,
  /// Emitted triangles, in pattern order.
  pub triangles: TriangleList,
  /// Remainder no rule could resolve.
  pub unresolved: Option<CornerSet>,
}

impl Classification {
  #[inline]
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  #[inline]
  pub fn is_unresolved(&self) -> bool {
    self.unresolved.is_some()
  }

  /// 12-bit mask of every edge referenced by a triangle.
  pub fn edge_mask(&self) -> u16 {
    self
      .triangles
      .iter()
      .flatten()
      .fold(0, |mask, &e| mask | (1 << e))
  }
}

/// Active neighbors of `corner` within `active`.
#[inline]
fn degree(corner: Corner, active: CornerSet) -> usize {
  adjacent(corner).intersection(active).len()
}

/// Classify a case mask into sub-patterns and triangles.
///
/// Pure function of the mask. Returns an error only for broken topology
/// invariants; an unresolvable remainder yields `unresolved: Some(..)`.
pub fn classify(case: u8) -> Result<Classification, ClassifyError> {
  let mut active = CornerSet::from_mask(case);
  let inverted = active.len() > INVERSION_THRESHOLD;
  if inverted {
    active = active.complement();
  }
  let normalized = active;

  let (patterns, unresolved) = decompose(active)?;

  let mut triangles = TriangleList::new();
  for pattern in &patterns {
    pattern.triangulate(&mut triangles)?;
  }

  Ok(Classification {
    case,
    inverted,
    active: normalized,
    patterns,
    triangles,
    unresolved,
  })
}

/// Split a normalized active set (at most 4 corners) into sub-patterns.
pub fn decompose(
  mut active: CornerSet,
) -> Result<(SmallVec<[SubPattern; 4]>, Option<CornerSet>), ClassifyError> {
  let mut patterns: SmallVec<[SubPattern; 4]> = SmallVec::new();

  // Isolated corners
  let isolated: CornerSet = active.iter().filter(|&v| degree(v, active) == 0).collect();
  for corner in isolated.iter() {
    patterns.push(SubPattern::Isolated { corner });
  }
  active = active.difference(isolated);

  // Adjacent pairs; one pass over ascending (i, j), removed together after
  let mut paired = CornerSet::EMPTY;
  for i in active.iter() {
    for j in active.iter().filter(|&j| j > i) {
      if adjacent(i).contains(j) && degree(i, active) == 1 && degree(j, active) == 1 {
        patterns.push(SubPattern::Pair { first: i, second: j });
        paired.insert(i);
        paired.insert(j);
      }
    }
  }
  active = active.difference(paired);

  let remaining = active.to_vec();
  let mut unresolved = None;

  match *remaining.as_slice() {
    [] => {}
    [a, b, c] => {
      if face_id(a, b, c).is_none() {
        return Err(ClassifyError::NotCoplanar { corners: active });
      }
      patterns.push(SubPattern::FaceTriangle { corners: [a, b, c] });
    }
    [a, b, c, d] => {
      let face = face_id(a, b, c);
      if face.is_some() && face == face_id(b, c, d) {
        patterns.push(SubPattern::FaceBand {
          corners: [a, b, c, d],
        });
      } else {
        let mut stars = remaining.iter().copied().filter(|&v| degree(v, active) == 3);
        match (stars.next(), stars.next()) {
          (Some(center), None) => patterns.push(SubPattern::Star { center }),
          _ => unresolved = Some(active),
        }
      }
    }
    _ => {
      return Err(ClassifyError::DanglingCorners {
        remaining: remaining.len(),
        corners: active,
      })
    }
  }

  Ok((patterns, unresolved))
}
