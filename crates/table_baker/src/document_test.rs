use super::*;
use voxel_tables::{CASE_COUNT, EDGE_TABLE_LEN};

fn document() -> TableDocument {
	TableDocument::from_table(&CaseTable::build().unwrap())
}

#[test]
fn test_document_shape() {
	let doc = document();
	assert_eq!(doc.max_triangles, 4);
	assert_eq!(doc.edges.len(), EDGE_TABLE_LEN);
	assert_eq!(doc.case_sizes.len(), CASE_COUNT);
	assert_eq!(doc.edge_corners.len(), 12);
	assert_eq!(doc.edge_samples.len(), 12);
	assert_eq!(doc.unhandled.len(), 24);
}

#[test]
fn test_document_edge_samples() {
	let doc = document();
	assert_eq!(
		doc.edge_samples[7],
		EdgeSampleEntry {
			corner: [1, 1, 0],
			axis: 2
		}
	);
	assert_eq!(doc.edge_corners[11], [6, 7]);
}

#[test]
fn test_json_restores_document() {
	let doc = document();
	let compact = doc.to_json(false).unwrap();
	assert!(compact.contains("\"max_triangles\":4"));

	let restored: TableDocument = serde_json::from_str(&compact).unwrap();
	assert_eq!(restored, doc);
}

#[test]
fn test_pretty_json_is_multiline() {
	let json = document().to_json(true).unwrap();
	assert!(json.lines().count() > 1);
	assert!(json.contains("\"case_sizes\""));
}

#[test]
fn test_document_crossings_match_rows() {
	let doc = document();
	assert_eq!(doc.crossings[0], 0);
	assert_eq!(doc.crossings[255], 0);
	for case in 0..CASE_COUNT {
		if doc.unhandled.contains(&(case as u8)) {
			continue;
		}
		let size = doc.case_sizes[case] as usize;
		let start = case * 3 * doc.max_triangles;
		let used = doc.edges[start..start + size * 3]
			.iter()
			.fold(0u16, |mask, &e| mask | (1 << e));
		assert_eq!(used, doc.crossings[case], "Case {} crossings", case);
	}
}
