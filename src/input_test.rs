use super::*;

fn active(mode: DragMode) -> InputState {
    InputState::Active {
        id: 4,
        mode,
        offset: Point::new(5.0, 6.0),
        origin: Rect::new(0.0, 0.0, 10.0, 10.0),
    }
}

// =============================================================
// DragMode / Mode
// =============================================================

#[test]
fn drag_mode_from_hit_part() {
    assert_eq!(DragMode::from(HitPart::Move), DragMode::Move);
    assert_eq!(
        DragMode::from(HitPart::ResizeCorner(Corner::BottomLeft)),
        DragMode::Resize(Corner::BottomLeft)
    );
}

#[test]
fn mode_from_drag_mode_covers_every_corner() {
    assert_eq!(Mode::from(DragMode::Move), Mode::Move);
    assert_eq!(Mode::from(DragMode::Resize(Corner::TopLeft)), Mode::ResizeTopLeft);
    assert_eq!(Mode::from(DragMode::Resize(Corner::TopRight)), Mode::ResizeTopRight);
    assert_eq!(Mode::from(DragMode::Resize(Corner::BottomLeft)), Mode::ResizeBottomLeft);
    assert_eq!(Mode::from(DragMode::Resize(Corner::BottomRight)), Mode::ResizeBottomRight);
}

#[test]
fn mode_default_is_none() {
    assert_eq!(Mode::default(), Mode::None);
}

#[test]
fn mode_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Mode::ResizeTopLeft).unwrap(), "resize_top_left");
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(s.is_idle());
    assert_eq!(s.active_id(), None);
    assert_eq!(s.mode(), Mode::None);
    assert_eq!(s.pointer_offset(), Point::default());
}

#[test]
fn mode_is_none_iff_no_active_id() {
    let states = [
        InputState::Idle,
        active(DragMode::Move),
        active(DragMode::Resize(Corner::TopRight)),
    ];
    for s in &states {
        assert_eq!(s.mode() == Mode::None, s.active_id().is_none());
    }
}

#[test]
fn active_state_exposes_fields() {
    let s = active(DragMode::Resize(Corner::TopRight));
    assert!(!s.is_idle());
    assert_eq!(s.active_id(), Some(4));
    assert_eq!(s.mode(), Mode::ResizeTopRight);
    assert_eq!(s.pointer_offset(), Point::new(5.0, 6.0));
}

#[test]
fn snapshot_mirrors_state() {
    let snap = InteractionSnapshot::from(&active(DragMode::Move));
    assert_eq!(snap.active_shape_id, Some(4));
    assert_eq!(snap.mode, Mode::Move);
    let idle = InteractionSnapshot::from(&InputState::Idle);
    assert_eq!(idle.active_shape_id, None);
    assert_eq!(idle.mode, Mode::None);
}
