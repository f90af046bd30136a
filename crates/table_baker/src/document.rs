//! Serializable form of the case tables.
//!
//! Layout of the JSON document:
//! - `edges`: `case_sizes.len() * 3 * max_triangles` edge ids, padded with
//!   `edge_sentinel`
//! - `case_sizes`: triangles used per case
//! - `crossings`: per case, 12-bit mask of edges with a sign change
//! - `edge_corners` / `edge_samples`: edge numbering and sample addressing,
//!   so a kernel can rebuild `vertex_by_edge` without this crate

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use voxel_tables::{
	CaseTable, CROSSING_TABLE, EDGE_CORNERS, EDGE_SAMPLES, EDGE_SENTINEL, MAX_TRIANGLES,
	VERTEX_SENTINEL,
};

/// Sample addressing for one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSampleEntry {
	/// Grid offset of the edge's lower corner.
	pub corner: [i32; 3],
	/// Channel (0 = X, 1 = Y, 2 = Z).
	pub axis: usize,
}

/// The baked tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDocument {
	pub max_triangles: usize,
	pub edge_sentinel: i8,
	pub vertex_sentinel: i32,
	pub edge_corners: Vec<[u8; 2]>,
	pub edge_samples: Vec<EdgeSampleEntry>,
	pub edges: Vec<i8>,
	pub case_sizes: Vec<u8>,
	pub crossings: Vec<u16>,
	pub unhandled: Vec<u8>,
}

impl TableDocument {
	pub fn from_table(table: &CaseTable) -> Self {
		Self {
			max_triangles: MAX_TRIANGLES,
			edge_sentinel: EDGE_SENTINEL,
			vertex_sentinel: VERTEX_SENTINEL,
			edge_corners: EDGE_CORNERS.to_vec(),
			edge_samples: EDGE_SAMPLES
				.iter()
				.map(|sample| EdgeSampleEntry {
					corner: sample.corner.to_array(),
					axis: sample.axis,
				})
				.collect(),
			edges: table.edges().to_vec(),
			case_sizes: table.case_sizes().to_vec(),
			crossings: CROSSING_TABLE.to_vec(),
			unhandled: table.unhandled().to_vec(),
		}
	}

	/// Serialize to JSON text.
	pub fn to_json(&self, pretty: bool) -> Result<String> {
		let json = if pretty {
			serde_json::to_string_pretty(self)
		} else {
			serde_json::to_string(self)
		};
		json.context("Failed to serialize case tables")
	}
}

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;
