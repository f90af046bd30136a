//! Fixed sizes of the cube cell and the emitted lookup tables.
//!
//! # Cube Cell
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           bit j of the corner id selects +1 on axis j,
//!     4─┼────5 │           otherwise -1
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Table Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  edges: [i8; CASE_COUNT * TABLE_STRIDE]                         │
//! │                                                                 │
//! │  case 0:   e e e  e e e  e e e  e e e                           │
//! │  case 1:   e e e  -1 ...                                        │
//! │  ...       └tri 0┘└tri 1┘└tri 2┘└tri 3┘                         │
//! │                                                                 │
//! │  case_sizes: [u8; CASE_COUNT]  - triangles actually used        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

/// Number of cube corners.
pub const CORNER_COUNT: usize = 8;

/// Number of cube edges.
pub const EDGE_COUNT: usize = 12;

/// Number of inside/outside corner labelings (2⁸).
pub const CASE_COUNT: usize = 1 << CORNER_COUNT;

/// Upper bound on triangles emitted for a single case.
pub const MAX_TRIANGLES: usize = 4;

/// Edge ids stored per case row (3 per triangle slot).
pub const TABLE_STRIDE: usize = 3 * MAX_TRIANGLES;

/// Total length of the flattened edge table (3072).
pub const EDGE_TABLE_LEN: usize = CASE_COUNT * TABLE_STRIDE;

/// Marks an unused edge slot in a case row.
pub const EDGE_SENTINEL: i8 = -1;

/// Returned by vertex lookups for an edge id outside 0..12.
pub const VERTEX_SENTINEL: i32 = -3;

/// Corners of a case with more active corners than this are inverted
/// before classification.
pub const INVERSION_THRESHOLD: usize = CORNER_COUNT / 2;

/// Sample channels per grid point (one per axis-aligned edge direction).
pub const SAMPLE_CHANNELS: usize = 3;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
