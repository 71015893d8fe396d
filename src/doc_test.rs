#![allow(clippy::float_cmp)]

use super::*;

fn square(id: ShapeId, x: f64, y: f64) -> Shape {
    Shape::new(id, x, y, 100.0, 100.0, "red")
}

// =============================================================
// Shape
// =============================================================

#[test]
fn shape_rect_matches_fields() {
    let s = Shape::new(7, 1.0, 2.0, 3.0, 4.0, "green");
    assert_eq!(s.rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn shape_with_rect_keeps_identity_and_color() {
    let s = Shape::new(7, 1.0, 2.0, 3.0, 4.0, "green");
    let moved = s.with_rect(Rect::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(moved.id, 7);
    assert_eq!(moved.color, "green");
    assert_eq!(moved.x, 10.0);
    assert_eq!(moved.height, 40.0);
}

#[test]
fn shape_serializes_to_flat_json() {
    let s = square(1, 100.0, 100.0);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["id"], 1);
    assert_eq!(v["x"], 100.0);
    assert_eq!(v["color"], "red");
}

// =============================================================
// ShapeStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ShapeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn seeded_store_has_red_and_blue() {
    let store = ShapeStore::seeded();
    assert_eq!(store.len(), 2);
    let red = store.get(1).unwrap();
    assert_eq!((red.x, red.y, red.color.as_str()), (100.0, 100.0, "red"));
    let blue = store.get(2).unwrap();
    assert_eq!((blue.x, blue.y, blue.color.as_str()), (300.0, 200.0, "blue"));
}

#[test]
fn insert_appends_in_order() {
    let mut store = ShapeStore::new();
    store.insert(square(3, 0.0, 0.0));
    store.insert(square(1, 0.0, 0.0));
    let ids: Vec<ShapeId> = store.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn insert_existing_id_replaces_in_place() {
    let mut store = ShapeStore::new();
    store.insert(square(1, 0.0, 0.0));
    store.insert(square(2, 0.0, 0.0));
    store.insert(square(1, 50.0, 50.0));
    assert_eq!(store.len(), 2);
    assert_eq!(store.shapes()[0].x, 50.0);
}

#[test]
fn replace_updates_only_target() {
    let mut store = ShapeStore::seeded();
    assert!(store.replace(square(1, 5.0, 6.0)));
    assert_eq!(store.get(1).unwrap().x, 5.0);
    assert_eq!(store.get(2).unwrap().x, 300.0);
}

#[test]
fn replace_unknown_id_is_noop() {
    let mut store = ShapeStore::seeded();
    assert!(!store.replace(square(99, 5.0, 6.0)));
    assert_eq!(store.len(), 2);
    assert!(store.get(99).is_none());
}

#[test]
fn remove_returns_shape() {
    let mut store = ShapeStore::seeded();
    let removed = store.remove(1).unwrap();
    assert_eq!(removed.id, 1);
    assert_eq!(store.len(), 1);
    assert!(store.remove(1).is_none());
}

#[test]
fn load_replaces_everything() {
    let mut store = ShapeStore::seeded();
    store.load(vec![square(10, 0.0, 0.0), square(10, 9.0, 9.0)]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(10).unwrap().x, 9.0);
}

#[test]
fn next_id_follows_max() {
    assert_eq!(ShapeStore::new().next_id(), Some(1));
    assert_eq!(ShapeStore::seeded().next_id(), Some(3));
}

#[test]
fn next_id_at_max_reuses_lowest_free_id() {
    let mut store = ShapeStore::new();
    store.load(vec![square(1, 0.0, 0.0), square(ShapeId::MAX, 0.0, 0.0), square(3, 0.0, 0.0)]);
    assert_eq!(store.next_id(), Some(2));
}
