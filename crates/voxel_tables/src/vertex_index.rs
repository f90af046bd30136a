//! Edge id → sample index resolution for the isosurface kernel.
//!
//! The kernel stores one value per grid point and axis: channel 0 belongs to
//! the X edge leaving that point, channel 1 to the Y edge, channel 2 to the Z
//! edge. A cube edge is therefore addressed by the grid point of its lower
//! corner plus the axis it runs along.
//!
//! # Memory Layout
//!
//! ```text
//! point_id = x + y * (n + 1) + z * (n + 1) * (m + 1)
//! index    = (point_id + corner_offset) * 3 + axis
//!
//! corner_offset = [x bit] * 1 + [y bit] * (n + 1) + [z bit] * (n + 1)(m + 1)
//! ```

use glam::IVec3;

use crate::constants::{EDGE_COUNT, SAMPLE_CHANNELS, VERTEX_SENTINEL};
use crate::topology::{edge_axis, EdgeId, EDGE_CORNERS};

/// Grid size in cells per axis; the field has `(n+1)×(m+1)×(k+1)` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
  pub n: i32,
  pub m: i32,
  pub k: i32,
}

impl GridDims {
  pub const fn new(n: i32, m: i32, k: i32) -> Self {
    Self { n, m, k }
  }

  /// Points along one X line, or `None` for a negative or overflowing size.
  #[inline]
  pub const fn line_stride(self) -> Option<i32> {
    if self.n < 0 {
      return None;
    }
    self.n.checked_add(1)
  }

  /// Points in one XY plane.
  #[inline]
  pub const fn plane_stride(self) -> Option<i32> {
    if self.m < 0 {
      return None;
    }
    match (self.line_stride(), self.m.checked_add(1)) {
      (Some(line), Some(rows)) => line.checked_mul(rows),
      _ => None,
    }
  }

  /// Total field samples.
  #[inline]
  pub const fn point_count(self) -> Option<usize> {
    if self.k < 0 {
      return None;
    }
    let count = match (self.plane_stride(), self.k.checked_add(1)) {
      (Some(plane), Some(layers)) => plane.checked_mul(layers),
      _ => None,
    };
    match count {
      Some(count) => Some(count as usize),
      None => None,
    }
  }

  /// Length of the per-point, per-axis sample array.
  #[inline]
  pub const fn sample_len(self) -> Option<usize> {
    match self.point_count() {
      Some(count) => count.checked_mul(SAMPLE_CHANNELS),
      None => None,
    }
  }

  /// Flat point id of grid coordinate `p`.
  #[inline]
  pub fn point_id(self, p: IVec3) -> Option<i32> {
    let y = p.y.checked_mul(self.line_stride()?)?;
    let z = p.z.checked_mul(self.plane_stride()?)?;
    p.x.checked_add(y)?.checked_add(z)
  }
}

/// Where an edge's samples live relative to the cube's minimum corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSample {
  /// Grid offset (0 or 1 per axis) of the edge's lower corner.
  pub corner: IVec3,
  /// Channel of the axis the edge runs along.
  pub axis: usize,
}

impl EdgeSample {
  /// Point offset of the lower corner for a grid of `dims`.
  #[inline]
  pub fn corner_offset(self, dims: GridDims) -> Option<i32> {
    dims.point_id(self.corner)
  }
}

/// Sample addressing for every edge.
pub const EDGE_SAMPLES: [EdgeSample; EDGE_COUNT] = generate_edge_samples();

const fn generate_edge_samples() -> [EdgeSample; EDGE_COUNT] {
  let mut samples = [EdgeSample {
    corner: IVec3::ZERO,
    axis: 0,
  }; EDGE_COUNT];
  let mut edge = 0;

  while edge < EDGE_COUNT {
    let lower = EDGE_CORNERS[edge][0];
    samples[edge] = EdgeSample {
      corner: IVec3::new(
        (lower & 1) as i32,
        ((lower >> 1) & 1) as i32,
        ((lower >> 2) & 1) as i32,
      ),
      axis: edge_axis(edge as EdgeId),
    };
    edge += 1;
  }

  samples
}

/// Sample-array index of edge `edge_id` for the cube whose minimum corner is
/// `point_id`.
///
/// Returns `VERTEX_SENTINEL` when `edge_id` is outside 0..12, when `dims` is
/// negative, or when the index would be negative or overflow `i32`.
pub fn resolve(edge_id: i32, point_id: i32, dims: GridDims) -> i32 {
  sample_index(edge_id, point_id, dims).unwrap_or(VERTEX_SENTINEL)
}

fn sample_index(edge_id: i32, point_id: i32, dims: GridDims) -> Option<i32> {
  let sample = EDGE_SAMPLES.get(usize::try_from(edge_id).ok()?)?;
  let index = point_id
    .checked_add(sample.corner_offset(dims)?)?
    .checked_mul(SAMPLE_CHANNELS as i32)?
    .checked_add(sample.axis as i32)?;
  (index >= 0).then_some(index)
}

/// Kernel-side lookup: read the value stored for `edge_id` of the cube at
/// `point_id`.
///
/// Returns `VERTEX_SENTINEL` wherever `resolve` does, and for an index past
/// the end of `samples`.
pub fn vertex_by_edge(dims: GridDims, point_id: i32, edge_id: i32, samples: &[i32]) -> i32 {
  sample_index(edge_id, point_id, dims)
    .and_then(|index| samples.get(index as usize))
    .copied()
    .unwrap_or(VERTEX_SENTINEL)
}

#[cfg(test)]
#[path = "vertex_index_test.rs"]
mod vertex_index_test;
