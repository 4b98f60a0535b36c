/*
    Canonical-form properties: patterns in the same isomorphism class
    share a key; distinct classes never collide.
*/

use sgmine::graph::Edge;
use sgmine::pattern::Pattern;

fn labels(labs: &[&str]) -> Vec<String> {
    labs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_triangle_key_stable_across_constructions() {
    // same triangle, different edge orderings and node labelings
    let a = Pattern::new(
        false,
        labels(&["X", "Y", "Z"]),
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
    )
    .unwrap();
    let b = Pattern::new(
        false,
        labels(&["Y", "Z", "X"]),
        vec![Edge::new(1, 0), Edge::new(2, 1), Edge::new(0, 2)],
    )
    .unwrap();
    let c = Pattern::new(
        false,
        labels(&["Z", "X", "Y"]),
        vec![Edge::new(2, 0), Edge::new(0, 1), Edge::new(1, 2)],
    )
    .unwrap();
    assert_eq!(a.key(), b.key());
    assert_eq!(a.key(), c.key());
}

#[test]
fn test_key_depends_only_on_structure() {
    // rebuilding the identical pattern gives the identical key
    let build = || {
        Pattern::new(
            false,
            labels(&["A", "B", "A"]),
            vec![Edge::labeled(0, 1, "x"), Edge::labeled(1, 2, "y")],
        )
        .unwrap()
    };
    assert_eq!(build().key(), build().key());
}

#[test]
fn test_distinct_classes_have_distinct_keys() {
    let path = Pattern::new(
        false,
        labels(&["A", "A", "A"]),
        vec![Edge::new(0, 1), Edge::new(1, 2)],
    )
    .unwrap();
    let triangle = Pattern::new(
        false,
        labels(&["A", "A", "A"]),
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
    )
    .unwrap();
    assert_ne!(path.key(), triangle.key());

    let relabeled = Pattern::new(
        false,
        labels(&["A", "B", "A"]),
        vec![Edge::new(0, 1), Edge::new(1, 2)],
    )
    .unwrap();
    assert_ne!(path.key(), relabeled.key());

    let edge_labeled = Pattern::new(
        false,
        labels(&["A", "A", "A"]),
        vec![Edge::labeled(0, 1, "x"), Edge::new(1, 2)],
    )
    .unwrap();
    assert_ne!(path.key(), edge_labeled.key());
}

#[test]
fn test_directed_reversal_changes_key() {
    let fwd = Pattern::new(
        true,
        labels(&["a", "b"]),
        vec![Edge::labeled(0, 1, "fwd"), Edge::labeled(1, 0, "bck")],
    )
    .unwrap();
    // reverse one edge
    let rev = Pattern::new(
        true,
        labels(&["a", "b"]),
        vec![Edge::labeled(0, 1, "fwd"), Edge::labeled(0, 1, "bck")],
    )
    .unwrap();
    assert_ne!(fwd.key(), rev.key());
}

#[test]
fn test_directed_isomorphism_invariance() {
    // 0 -> 1 -> 2 under two numberings
    let a = Pattern::new(
        true,
        labels(&["A", "B", "C"]),
        vec![Edge::new(0, 1), Edge::new(1, 2)],
    )
    .unwrap();
    let b = Pattern::new(
        true,
        labels(&["C", "B", "A"]),
        vec![Edge::new(2, 1), Edge::new(1, 0)],
    )
    .unwrap();
    assert_eq!(a.key(), b.key());

    // the same skeleton with one arrow flipped is a different class
    let c = Pattern::new(
        true,
        labels(&["A", "B", "C"]),
        vec![Edge::new(0, 1), Edge::new(2, 1)],
    )
    .unwrap();
    assert_ne!(a.key(), c.key());
}

#[test]
fn test_directedness_part_of_key() {
    let und =
        Pattern::new(false, labels(&["A", "B"]), vec![Edge::new(0, 1)])
            .unwrap();
    let dir =
        Pattern::new(true, labels(&["A", "B"]), vec![Edge::new(0, 1)])
            .unwrap();
    assert_ne!(und.key(), dir.key());
}
