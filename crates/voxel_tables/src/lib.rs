//! voxel_tables - Marching-cubes case tables for isosurface kernels
//!
//! Classifies all 256 inside/outside labelings of a cube cell's corners and
//! produces, per case, the triangles approximating the surface inside that
//! cell. Triangle vertices are cube edge ids; the consumer places each vertex
//! by interpolating the field along the named edge.
//!
//! # Features
//!
//! - **Cube topology**: corner positions, adjacency, canonical edge and face
//!   numbering
//! - **Case classification**: decomposition into isolated corners, adjacent
//!   pairs, face cuts and stars, with unresolved cases reported separately
//! - **Lookup tables**: fixed-width padded edge rows plus per-case triangle
//!   counts, built in parallel with rayon
//! - **Vertex addressing**: edge id → sample index for a per-axis sample grid
//!
//! # Example
//!
//! ```
//! use voxel_tables::{CaseTable, MAX_TRIANGLES};
//!
//! let table = CaseTable::build().unwrap();
//!
//! // Only corner 0 inside: one triangle across edges 0, 1, 2
//! assert_eq!(table.case_sizes()[1], 1);
//! assert_eq!(&table.row(1)[..3], &[0, 1, 2]);
//! assert!(table.case_sizes().iter().all(|&n| n as usize <= MAX_TRIANGLES));
//! ```

pub mod classifier;
pub mod constants;
pub mod corner_set;
pub mod error;
pub mod table;
pub mod topology;
pub mod vertex_index;

// Re-export commonly used items
pub use classifier::{classify, Classification, SubPattern, Triangle};
pub use constants::{
  CASE_COUNT, CORNER_COUNT, EDGE_COUNT, EDGE_SENTINEL, EDGE_TABLE_LEN, MAX_TRIANGLES,
  TABLE_STRIDE, VERTEX_SENTINEL,
};
pub use corner_set::{Corner, CornerSet};
pub use error::{ClassifyError, TableError};
pub use table::{emit, BuildReport, CaseTable, EmittedCase};
pub use topology::{
  adjacent, crossing_mask, edge_id, face_id, position, EdgeId, Face, CROSSING_TABLE, EDGE_CORNERS,
};
pub use vertex_index::{resolve, vertex_by_edge, EdgeSample, GridDims, EDGE_SAMPLES};
