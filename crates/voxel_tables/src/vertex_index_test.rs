use super::*;

const DIMS: GridDims = GridDims::new(3, 4, 5);

#[test]
fn test_strides() {
  assert_eq!(DIMS.line_stride(), Some(4));
  assert_eq!(DIMS.plane_stride(), Some(20));
  assert_eq!(DIMS.point_count(), Some(120));
  assert_eq!(DIMS.sample_len(), Some(360));
}

#[test]
fn test_point_id() {
  assert_eq!(DIMS.point_id(IVec3::ZERO), Some(0));
  assert_eq!(DIMS.point_id(IVec3::new(1, 0, 0)), Some(1));
  assert_eq!(DIMS.point_id(IVec3::new(0, 1, 0)), Some(4));
  assert_eq!(DIMS.point_id(IVec3::new(2, 3, 1)), Some(2 + 12 + 20));
}

#[test]
fn test_edge_samples() {
  assert_eq!(EDGE_SAMPLES[0].corner, IVec3::ZERO);
  assert_eq!(EDGE_SAMPLES[0].axis, 0);
  assert_eq!(EDGE_SAMPLES[7].corner, IVec3::new(1, 1, 0));
  assert_eq!(EDGE_SAMPLES[7].axis, 2);
  assert_eq!(EDGE_SAMPLES[11].corner, IVec3::new(0, 1, 1));
  assert_eq!(EDGE_SAMPLES[11].axis, 0);
}

#[test]
fn test_resolve_matches_kernel_formula() {
  let line = DIMS.line_stride().unwrap();
  let plane = DIMS.plane_stride().unwrap();
  let expected = [
    0,
    1,
    2,
    3 + 1,
    3 + 2,
    line * 3,
    line * 3 + 2,
    (line + 1) * 3 + 2,
    plane * 3,
    plane * 3 + 1,
    (plane + 1) * 3 + 1,
    (plane + line) * 3,
  ];
  for (edge, &want) in expected.iter().enumerate() {
    assert_eq!(resolve(edge as i32, 0, DIMS), want, "Edge {}", edge);
  }
}

#[test]
fn test_resolve_distinct_at_origin() {
  let mut indices: Vec<i32> = (0..12).map(|e| resolve(e, 0, DIMS)).collect();
  indices.sort_unstable();
  indices.dedup();
  assert_eq!(indices.len(), 12, "Edges must map to distinct samples");

  let max = (DIMS.plane_stride().unwrap() + DIMS.line_stride().unwrap() + 1) * 3 + 2;
  assert!(indices.iter().all(|&i| (0..=max).contains(&i)));
}

#[test]
fn test_resolve_shifts_with_point() {
  let point_id = DIMS.point_id(IVec3::new(1, 2, 3)).unwrap();
  for edge in 0..12 {
    assert_eq!(
      resolve(edge, point_id, DIMS),
      resolve(edge, 0, DIMS) + point_id * 3,
      "Edge {}",
      edge
    );
  }
}

#[test]
fn test_resolve_out_of_range() {
  assert_eq!(resolve(-1, 0, DIMS), VERTEX_SENTINEL);
  assert_eq!(resolve(12, 0, DIMS), VERTEX_SENTINEL);
  assert_eq!(resolve(i32::MAX, 0, DIMS), VERTEX_SENTINEL);
}

#[test]
fn test_vertex_by_edge_reads_samples() {
  let samples: Vec<i32> = (0..DIMS.sample_len().unwrap() as i32).map(|i| i * 10).collect();
  for edge in 0..12 {
    let index = resolve(edge, 5, DIMS);
    assert_eq!(vertex_by_edge(DIMS, 5, edge, &samples), index * 10);
  }
  assert_eq!(vertex_by_edge(DIMS, 5, 12, &samples), VERTEX_SENTINEL);
}

#[test]
fn test_vertex_by_edge_out_of_bounds() {
  let samples = vec![7; 4];
  assert_eq!(vertex_by_edge(DIMS, 0, 0, &samples), 7);
  assert_eq!(vertex_by_edge(DIMS, 0, 11, &samples), VERTEX_SENTINEL);
  assert_eq!(vertex_by_edge(DIMS, -10, 0, &samples), VERTEX_SENTINEL);
}

#[test]
fn test_negative_dims_have_no_layout() {
  let dims = GridDims::new(3, -2, 5);
  assert_eq!(dims.line_stride(), Some(4));
  assert_eq!(dims.plane_stride(), None);
  assert_eq!(dims.point_count(), None);
  assert_eq!(dims.sample_len(), None);
  assert_eq!(GridDims::new(3, 4, -1).point_count(), None);
  assert_eq!(resolve(0, 0, dims), VERTEX_SENTINEL);
}

#[test]
fn test_huge_point_id_returns_sentinel() {
  let samples = vec![7; DIMS.sample_len().unwrap()];
  let point_id = i32::MAX - 10;
  for edge in 0..12 {
    assert_eq!(resolve(edge, point_id, DIMS), VERTEX_SENTINEL, "Edge {}", edge);
    assert_eq!(vertex_by_edge(DIMS, point_id, edge, &samples), VERTEX_SENTINEL);
  }
}

#[test]
fn test_huge_dims_return_sentinel() {
  let dims = GridDims::new(i32::MAX, 4, 5);
  assert_eq!(dims.line_stride(), None);
  assert_eq!(dims.point_count(), None);

  let samples = vec![7; 360];
  assert_eq!(resolve(11, 0, dims), VERTEX_SENTINEL);
  assert_eq!(vertex_by_edge(dims, 0, 11, &samples), VERTEX_SENTINEL);

  // Line stride fits, plane stride does not
  let wide = GridDims::new(1 << 20, 1 << 20, 1);
  assert_eq!(wide.line_stride(), Some((1 << 20) + 1));
  assert_eq!(wide.plane_stride(), None);
  assert_eq!(vertex_by_edge(wide, 0, 8, &samples), VERTEX_SENTINEL);
}

#[test]
fn test_negative_index_returns_sentinel() {
  // (-1 + 0) * 3 + 0 would alias the sentinel value itself
  assert_eq!(resolve(0, -1, DIMS), VERTEX_SENTINEL);
  assert_eq!(resolve(2, -1, DIMS), VERTEX_SENTINEL);
  assert_eq!(resolve(0, -10, DIMS), VERTEX_SENTINEL);
}
