use octothree::{BoundingBox, Octree, Vector3f};

#[test]
fn test_end_to_end_scenario() {
    let mut tree = Octree::new(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 1.0, 1.0));

    tree.add(11, Vector3f::new(0.0, 0.0, 0.0)).expect("corner is in bounds");
    tree.add(12, Vector3f::new(0.0, 0.0, 0.0)).expect("corner is in bounds");
    tree.add(13, Vector3f::new(1.0, 1.0, 1.0)).expect("far corner is in bounds");

    // Two distinct points forced one subdivision: root plus eight children.
    assert_eq!(tree.count_nodes(), 9, "root should have become a branch");

    assert_eq!(tree.elements_at(Vector3f::new(0.0, 0.0, 0.0)), &[11, 12]);
    assert_eq!(tree.elements_at(Vector3f::new(1.0, 1.0, 1.0)), &[13]);

    let everything = BoundingBox::new(Vector3f::new(-1.0, -1.0, -1.0), Vector3f::new(2.0, 2.0, 2.0));
    assert_eq!(tree.elements_in(&everything).len(), 3);
}

#[test]
fn test_add_and_query_workflow() {
    let mut tree = Octree::new(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(100.0, 100.0, 100.0));
    let p = Vector3f::new(10.0, 20.0, 30.0);

    assert!(tree.add(1, Vector3f::new(-1.0, 50.0, 50.0)).is_none(), "outside points are rejected");

    tree.add(1, p).expect("in bounds");
    assert_eq!(tree.elements_at(p), &[1]);

    // A second value at the exact same coordinate accumulates in order.
    tree.add(2, p).expect("in bounds");
    assert_eq!(tree.elements_at(p), &[1, 2]);
    assert_eq!(tree.count_nodes(), 1, "coincident adds must not subdivide");

    // A different point in the same leaf splits it, and both points
    // afterwards resolve independently.
    let q = Vector3f::new(90.0, 20.0, 30.0);
    tree.add(3, q).expect("in bounds");
    assert_eq!(tree.count_nodes(), 9);
    assert_eq!(tree.elements_at(p), &[1, 2]);
    assert_eq!(tree.elements_at(q), &[3]);
}

#[test]
fn test_clear_resets_contents_but_not_bounds() {
    let mut tree = Octree::new(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 1.0, 1.0));
    let inside = Vector3f::new(0.5, 0.5, 0.5);
    let outside = Vector3f::new(1.5, 0.5, 0.5);

    tree.add(1, inside).expect("in bounds");
    tree.add(2, Vector3f::new(0.9, 0.9, 0.9)).expect("in bounds");
    assert!(tree.count_nodes() > 1);

    assert!(tree.clear());

    assert_eq!(tree.elements_at(inside), &[] as &[i32]);
    let full = BoundingBox::new(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 1.0, 1.0));
    assert!(tree.elements_in(&full).is_empty());

    // Same box as before: the outside point is still rejected.
    assert!(tree.add(3, outside).is_none());
    assert!(tree.add(3, inside).is_some());
}

#[test]
fn test_corner_order_does_not_matter() {
    // The constructor normalizes corners, so a scrambled corner pair spans
    // the same region.
    let mut tree = Octree::new(Vector3f::new(1.0, 0.0, 1.0), Vector3f::new(0.0, 1.0, 0.0));

    assert!(tree.add(1, Vector3f::new(0.5, 0.5, 0.5)).is_some());
    assert!(tree.add(2, Vector3f::new(1.5, 0.5, 0.5)).is_none());
}
