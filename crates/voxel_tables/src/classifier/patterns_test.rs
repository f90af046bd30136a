use super::*;
use crate::topology::EDGE_CORNERS;

fn triangulate(pattern: SubPattern) -> Vec<Triangle> {
  let mut out = TriangleList::new();
  pattern.triangulate(&mut out).expect("pattern should triangulate");
  out.into_vec()
}

#[test]
fn test_isolated_fans_around_corner() {
  assert_eq!(triangulate(SubPattern::Isolated { corner: 0 }), vec![[0, 1, 2]]);
  assert_eq!(triangulate(SubPattern::Isolated { corner: 7 }), vec![[7, 10, 11]]);
  assert_eq!(triangulate(SubPattern::Isolated { corner: 3 }), vec![[3, 5, 7]]);
}

#[test]
fn test_pair_shares_inner_edges() {
  let tris = triangulate(SubPattern::Pair { first: 0, second: 1 });
  assert_eq!(tris, vec![[1, 2, 3], [2, 3, 4]]);

  // The edge joining the pair never appears
  let joining = edge_id(0, 1).unwrap();
  assert!(tris.iter().flatten().all(|&e| e != joining));
}

#[test]
fn test_face_triangle_hub_first_corner() {
  let tris = triangulate(SubPattern::FaceTriangle { corners: [0, 1, 2] });
  assert_eq!(tris, vec![[4, 6, 2], [4, 6, 3], [6, 3, 5]]);
}

#[test]
fn test_face_triangle_hub_not_first() {
  // Hub is 2 (neighbors 0 and 6); arms 0 and 6 meet again at 4
  let tris = triangulate(SubPattern::FaceTriangle { corners: [0, 2, 6] });
  let pattern_edges: Vec<EdgeId> = tris.iter().flatten().copied().collect();
  assert_eq!(tris.len(), 3);
  assert!(pattern_edges.contains(&edge_id(0, 4).unwrap()));
  assert!(pattern_edges.contains(&edge_id(6, 4).unwrap()));
  assert!(pattern_edges.contains(&edge_id(2, 3).unwrap()));
}

#[test]
fn test_face_band_uses_outward_edges() {
  let tris = triangulate(SubPattern::FaceBand {
    corners: [0, 1, 2, 3],
  });
  assert_eq!(tris, vec![[2, 4, 6], [4, 6, 7]]);

  // Every referenced edge leaves the face along Z
  for &e in tris.iter().flatten() {
    let [a, b] = EDGE_CORNERS[e as usize];
    assert_eq!(a ^ b, 4, "Edge {} should run along Z", e);
  }
}

#[test]
fn test_star_uses_fixed_fan() {
  let tris = triangulate(SubPattern::Star { center: 0 });
  assert_eq!(tris, vec![[4, 9, 8], [4, 6, 9], [3, 6, 4], [3, 5, 6]]);
}

#[test]
fn test_star_fans_reference_six_distinct_edges() {
  for center in 0..8u8 {
    let fan = STAR_FANS[center as usize];
    let mut used: Vec<EdgeId> = fan.to_vec();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used.len(), 6, "Star {} fan", center);

    // None of the edges touch the center itself
    for e in used {
      let [a, b] = EDGE_CORNERS[e as usize];
      assert!(a != center && b != center, "Star {} uses edge {}", center, e);
    }
  }
}

#[test]
fn test_triangle_count_matches_rule() {
  let patterns = [
    SubPattern::Isolated { corner: 5 },
    SubPattern::Pair { first: 2, second: 6 },
    SubPattern::FaceTriangle { corners: [4, 5, 7] },
    SubPattern::FaceBand {
      corners: [1, 3, 5, 7],
    },
    SubPattern::Star { center: 6 },
  ];
  for pattern in patterns {
    assert_eq!(triangulate(pattern).len(), pattern.triangle_count(), "{}", pattern);
  }
}

#[test]
fn test_pattern_corners() {
  assert_eq!(SubPattern::Star { center: 0 }.corners().to_vec(), vec![0, 1, 2, 4]);
  assert_eq!(SubPattern::Pair { first: 4, second: 6 }.corners().to_vec(), vec![4, 6]);
}

#[test]
fn test_invalid_pair_reports_error() {
  let mut out = TriangleList::new();
  let err = SubPattern::Pair { first: 0, second: 7 }
    .triangulate(&mut out)
    .unwrap_err();
  assert!(matches!(err, ClassifyError::MissingNeighbor { .. }));
}

#[test]
fn test_display() {
  assert_eq!(
    SubPattern::Pair { first: 0, second: 1 }.to_string(),
    "2 triangles around 0 and 1, adjacent"
  );
  assert_eq!(SubPattern::Star { center: 3 }.to_string(), "4 triangles around 3, star");
}
