#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn payload_is_decimal_id() {
    assert_eq!(encode_payload(42), "42");
    assert_eq!(parse_payload(Some(&encode_payload(42))), Ok(42));
}

#[test]
fn payload_tolerates_surrounding_whitespace() {
    assert_eq!(parse_payload(Some(" 7\n")), Ok(7));
}

#[test]
fn missing_payload_is_error() {
    assert_eq!(parse_payload(None), Err(EngineError::MissingDragPayload));
    assert_eq!(parse_payload(Some("")), Err(EngineError::MissingDragPayload));
    assert_eq!(parse_payload(Some("   ")), Err(EngineError::MissingDragPayload));
}

#[test]
fn malformed_payload_is_error() {
    assert_eq!(parse_payload(Some("abc")), Err(EngineError::InvalidDragPayload("abc".into())));
    assert_eq!(parse_payload(Some("-1")), Err(EngineError::InvalidDragPayload("-1".into())));
    assert_eq!(parse_payload(Some("1.5")), Err(EngineError::InvalidDragPayload("1.5".into())));
}

#[test]
fn numeric_prefix_payload_is_error() {
    assert_eq!(parse_payload(Some("5abc")), Err(EngineError::InvalidDragPayload("5abc".into())));
}

#[test]
fn dropped_centers_shape() {
    let s = Shape::new(1, 100.0, 100.0, 100.0, 100.0, "red");
    let moved = dropped(&s, Point::new(400.0, 300.0));
    assert_eq!((moved.x, moved.y), (350.0, 250.0));
    assert_eq!((moved.width, moved.height), (100.0, 100.0));
    assert_eq!(moved.id, 1);
    assert_eq!(moved.color, "red");
}

#[test]
fn dropped_uses_own_size() {
    let s = Shape::new(3, 0.0, 0.0, 40.0, 20.0, "blue");
    let moved = dropped(&s, Point::new(100.0, 100.0));
    assert_eq!((moved.x, moved.y), (80.0, 90.0));
}
