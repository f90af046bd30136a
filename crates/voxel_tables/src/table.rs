//! Flattened lookup tables for the isosurface kernel.
//!
//! `edges` holds one fixed-width row per case: up to `MAX_TRIANGLES`
//! triangles of 3 edge ids, padded with `EDGE_SENTINEL`. `case_sizes` holds
//! the number of triangles actually used by each row.

use rayon::prelude::*;
use web_time::Instant;

use crate::classifier::{classify, Classification};
use crate::constants::{CASE_COUNT, EDGE_SENTINEL, EDGE_TABLE_LEN, MAX_TRIANGLES, TABLE_STRIDE};
use crate::corner_set::CornerSet;
use crate::error::{ClassifyError, TableError};

/// One padded case row.
pub type CaseRow = [i8; TABLE_STRIDE];

/// Padded row and triangle count for one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedCase {
  pub row: CaseRow,
  pub count: u8,
  /// Remainder the classifier could not resolve, if any.
  pub unresolved: Option<CornerSet>,
}

/// Classify `case` and pad its triangles into a table row.
pub fn emit(case: u8) -> Result<EmittedCase, ClassifyError> {
  emit_classification(&classify(case)?)
}

/// Pad an existing classification into a table row.
pub fn emit_classification(classification: &Classification) -> Result<EmittedCase, ClassifyError> {
  let count = classification.triangle_count();
  if count > MAX_TRIANGLES {
    return Err(ClassifyError::TooManyTriangles {
      count,
      max: MAX_TRIANGLES,
    });
  }

  let mut row = [EDGE_SENTINEL; TABLE_STRIDE];
  for (slot, &edge) in row.iter_mut().zip(classification.triangles.iter().flatten()) {
    *slot = edge as i8;
  }

  Ok(EmittedCase {
    row,
    count: count as u8,
    unresolved: classification.unresolved,
  })
}

/// Diagnostics gathered while building the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// Case indices the rule set could not resolve, ascending.
  pub unhandled: Vec<u8>,
  /// Wall time of the build in microseconds.
  pub build_time_us: u64,
}

/// The two parallel lookup tables plus build diagnostics.
#[derive(Clone, Debug)]
pub struct CaseTable {
  edges: Box<[i8; EDGE_TABLE_LEN]>,
  case_sizes: [u8; CASE_COUNT],
  report: BuildReport,
}

impl CaseTable {
  /// Build all 256 cases, classifying them in parallel.
  ///
  /// Rows are assembled in ascending case order, so the result is identical
  /// to [`CaseTable::build_sequential`].
  #[cfg_attr(feature = "tracing", tracing::instrument(name = "case_table::build"))]
  pub fn build() -> Result<Self, TableError> {
    let start = Instant::now();
    let rows = (0..CASE_COUNT)
      .into_par_iter()
      .map(|case| emit_case(case as u8))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self::assemble(rows, start))
  }

  /// Build all 256 cases on the calling thread.
  #[cfg_attr(feature = "tracing", tracing::instrument(name = "case_table::build_sequential"))]
  pub fn build_sequential() -> Result<Self, TableError> {
    let start = Instant::now();
    let rows = (0..CASE_COUNT)
      .map(|case| emit_case(case as u8))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self::assemble(rows, start))
  }

  fn assemble(rows: Vec<EmittedCase>, start: Instant) -> Self {
    let mut edges = Box::new([EDGE_SENTINEL; EDGE_TABLE_LEN]);
    let mut case_sizes = [0u8; CASE_COUNT];
    let mut unhandled = Vec::new();

    for (case, emitted) in rows.into_iter().enumerate() {
      edges[case * TABLE_STRIDE..(case + 1) * TABLE_STRIDE].copy_from_slice(&emitted.row);
      case_sizes[case] = emitted.count;

      if let Some(_corners) = emitted.unresolved {
        #[cfg(feature = "tracing")]
        tracing::warn!(case, corners = %_corners, "unhandled case");
        unhandled.push(case as u8);
      }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(unhandled = unhandled.len(), "case table built");

    Self {
      edges,
      case_sizes,
      report: BuildReport {
        unhandled,
        build_time_us: start.elapsed().as_micros() as u64,
      },
    }
  }

  /// Flattened edge table, `CASE_COUNT * TABLE_STRIDE` entries.
  #[inline]
  pub fn edges(&self) -> &[i8; EDGE_TABLE_LEN] {
    &self.edges
  }

  /// Triangle count per case.
  #[inline]
  pub fn case_sizes(&self) -> &[u8; CASE_COUNT] {
    &self.case_sizes
  }

  /// Padded row for one case.
  #[inline]
  pub fn row(&self, case: u8) -> &[i8] {
    let start = case as usize * TABLE_STRIDE;
    &self.edges[start..start + TABLE_STRIDE]
  }

  /// Used triangles of one case.
  pub fn triangles(&self, case: u8) -> impl Iterator<Item = [i8; 3]> + '_ {
    self
      .row(case)
      .chunks_exact(3)
      .take(self.case_sizes[case as usize] as usize)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }

  #[inline]
  pub fn report(&self) -> &BuildReport {
    &self.report
  }

  #[inline]
  pub fn unhandled(&self) -> &[u8] {
    &self.report.unhandled
  }

  /// Tables match cell for cell, ignoring build diagnostics.
  pub fn same_tables(&self, other: &CaseTable) -> bool {
    self.edges[..] == other.edges[..] && self.case_sizes == other.case_sizes
  }
}

fn emit_case(case: u8) -> Result<EmittedCase, TableError> {
  emit(case).map_err(|source| TableError::Case { case, source })
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
