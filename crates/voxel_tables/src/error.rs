//! Error types for case classification and table emission.
//!
//! Every variant here is a broken cube-topology invariant: a correct build
//! never produces one. Cases the rule set cannot resolve are reported through
//! [`Classification::unresolved`](crate::Classification) instead.

use thiserror::Error;

use crate::corner_set::{Corner, CornerSet};

/// Invariant violations raised while classifying a single case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
  #[error("{remaining} corner(s) left after extraction: {corners}")]
  DanglingCorners { remaining: usize, corners: CornerSet },

  #[error("corners {corners} do not share a cube face")]
  NotCoplanar { corners: CornerSet },

  #[error("corners {a} and {b} are not joined by an edge")]
  NotAdjacent { a: Corner, b: Corner },

  #[error("corners {corners} have no neighbor matching the pattern")]
  MissingNeighbor { corners: CornerSet },

  #[error("{count} triangles exceed the per-case capacity of {max}")]
  TooManyTriangles { count: usize, max: usize },
}

/// Failure to build the full case table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
  #[error("case {case} ({case:#010b}): {source}")]
  Case {
    case: u8,
    #[source]
    source: ClassifyError,
  },
}
