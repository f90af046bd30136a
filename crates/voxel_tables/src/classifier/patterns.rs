//! Triangulation rules for each geometric sub-pattern.
//!
//! The edge orders below are part of the table format: consumers compare
//! rows byte for byte, so every neighbor lookup walks corners in ascending
//! order.

use std::fmt;

use smallvec::SmallVec;

use super::star_table::STAR_FANS;
use crate::constants::MAX_TRIANGLES;
use crate::corner_set::{Corner, CornerSet};
use crate::error::ClassifyError;
use crate::topology::{adjacent, edge_id, EdgeId};

/// Three edge ids; each vertex lies somewhere along the named edge.
pub type Triangle = [EdgeId; 3];

/// Triangles of one case. Inline up to the table capacity.
pub type TriangleList = SmallVec<[Triangle; MAX_TRIANGLES]>;

/// Independent piece of an active-corner set, resolved by one rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubPattern {
  /// Active corner with no active neighbor.
  Isolated { corner: Corner },

  /// Two adjacent corners, each with no other active neighbor.
  Pair { first: Corner, second: Corner },

  /// Three corners forming an L on one face.
  FaceTriangle { corners: [Corner; 3] },

  /// All four corners of one face.
  FaceBand { corners: [Corner; 4] },

  /// A corner together with its three neighbors.
  Star { center: Corner },
}

impl SubPattern {
  /// Corners covered by this pattern.
  pub fn corners(&self) -> CornerSet {
    match *self {
      SubPattern::Isolated { corner } => CornerSet::from_corners(&[corner]),
      SubPattern::Pair { first, second } => CornerSet::from_corners(&[first, second]),
      SubPattern::FaceTriangle { corners } => CornerSet::from_corners(&corners),
      SubPattern::FaceBand { corners } => CornerSet::from_corners(&corners),
      SubPattern::Star { center } => {
        let mut set = adjacent(center);
        set.insert(center);
        set
      }
    }
  }

  /// Number of triangles the rule emits.
  pub const fn triangle_count(&self) -> usize {
    match self {
      SubPattern::Isolated { .. } => 1,
      SubPattern::Pair { .. } => 2,
      SubPattern::FaceTriangle { .. } => 3,
      SubPattern::FaceBand { .. } => 2,
      SubPattern::Star { .. } => 4,
    }
  }

  /// Append this pattern's triangles to `out`.
  pub fn triangulate(&self, out: &mut TriangleList) -> Result<(), ClassifyError> {
    match *self {
      SubPattern::Isolated { corner } => {
        let [a, b, c] = outward_edges::<3>(corner, CornerSet::EMPTY)?;
        out.push([a, b, c]);
      }
      SubPattern::Pair { first, second } => {
        let [a, b] = outward_edges::<2>(first, CornerSet::from_corners(&[second]))?;
        let [c, d] = outward_edges::<2>(second, CornerSet::from_corners(&[first]))?;
        out.push([a, b, c]);
        out.push([b, c, d]);
      }
      SubPattern::FaceTriangle { corners } => face_triangle(corners, out)?,
      SubPattern::FaceBand { corners } => face_band(corners, out)?,
      SubPattern::Star { center } => {
        for tri in STAR_FANS[center as usize].chunks_exact(3) {
          out.push([tri[0], tri[1], tri[2]]);
        }
      }
    }
    Ok(())
  }
}

impl fmt::Display for SubPattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SubPattern::Isolated { corner } => write!(f, "1 triangle around {}, isolated", corner),
      SubPattern::Pair { first, second } => {
        write!(f, "2 triangles around {} and {}, adjacent", first, second)
      }
      SubPattern::FaceTriangle { corners: [a, b, c] } => {
        write!(f, "3 triangles around {}, {} and {}, one face", a, b, c)
      }
      SubPattern::FaceBand {
        corners: [a, b, c, d],
      } => write!(f, "2 triangles around {}, {}, {} and {}, one face", a, b, c, d),
      SubPattern::Star { center } => write!(f, "4 triangles around {}, star", center),
    }
  }
}

/// Edge between two corners that must be adjacent.
#[inline]
fn edge(a: Corner, b: Corner) -> Result<EdgeId, ClassifyError> {
  edge_id(a, b).ok_or(ClassifyError::NotAdjacent { a, b })
}

/// Lowest corner of `candidates`.
#[inline]
fn first_of(candidates: CornerSet, context: CornerSet) -> Result<Corner, ClassifyError> {
  candidates
    .first()
    .ok_or(ClassifyError::MissingNeighbor { corners: context })
}

/// Edges from `corner` to each neighbor outside `exclude`, ascending.
fn outward_edges<const N: usize>(
  corner: Corner,
  exclude: CornerSet,
) -> Result<[EdgeId; N], ClassifyError> {
  let targets = adjacent(corner).difference(exclude);
  if targets.len() != N {
    let mut context = exclude;
    context.insert(corner);
    return Err(ClassifyError::MissingNeighbor { corners: context });
  }

  let mut edges = [0; N];
  for (slot, target) in edges.iter_mut().zip(targets.iter()) {
    *slot = edge(corner, target)?;
  }
  Ok(edges)
}

/// L-shaped cut: hub `m` with arms `l` and `r`, `o` the face corner opposite
/// the hub.
fn face_triangle(corners: [Corner; 3], out: &mut TriangleList) -> Result<(), ClassifyError> {
  let active = CornerSet::from_corners(&corners);

  // First corner with the most active neighbors
  let mut m = corners[0];
  let mut best = 0;
  for &v in &corners {
    let degree = adjacent(v).intersection(active).len();
    if degree > best {
      best = degree;
      m = v;
    }
  }

  let mut arms = corners.iter().copied().filter(|&v| v != m);
  let (Some(l), Some(r)) = (arms.next(), arms.next()) else {
    return Err(ClassifyError::MissingNeighbor { corners: active });
  };

  let mt = edge(m, first_of(adjacent(m).difference(active), active)?)?;

  let mut hub = CornerSet::EMPTY;
  hub.insert(m);
  let o = first_of(
    adjacent(l).intersection(adjacent(r)).difference(hub),
    active,
  )?;

  let mut face_inner = hub;
  face_inner.insert(o);
  let lt = edge(l, first_of(adjacent(l).difference(face_inner), active)?)?;
  let rt = edge(r, first_of(adjacent(r).difference(face_inner), active)?)?;
  let lo = edge(l, o)?;
  let ro = edge(r, o)?;

  out.push([lt, rt, mt]);
  out.push([lt, rt, lo]);
  out.push([rt, lo, ro]);
  Ok(())
}

/// Whole-face cut: `v1` is the lowest corner, `v3` its diagonal, `v2` and
/// `v4` the remaining two in ascending order.
fn face_band(corners: [Corner; 4], out: &mut TriangleList) -> Result<(), ClassifyError> {
  let active = CornerSet::from_corners(&corners);
  let v1 = corners[0];

  let mut diagonal = active.difference(adjacent(v1));
  diagonal.remove(v1);
  let v3 = first_of(diagonal, active)?;

  let mut sides = corners[1..].iter().copied().filter(|&v| v != v3);
  let (Some(v2), Some(v4)) = (sides.next(), sides.next()) else {
    return Err(ClassifyError::MissingNeighbor { corners: active });
  };

  let [v1t] = outward_edges::<1>(v1, CornerSet::from_corners(&[v2, v4]))?;
  let [v2t] = outward_edges::<1>(v2, CornerSet::from_corners(&[v3, v1]))?;
  let [v3t] = outward_edges::<1>(v3, CornerSet::from_corners(&[v4, v2]))?;
  let [v4t] = outward_edges::<1>(v4, CornerSet::from_corners(&[v1, v3]))?;

  out.push([v1t, v2t, v4t]);
  out.push([v2t, v4t, v3t]);
  Ok(())
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod patterns_test;
