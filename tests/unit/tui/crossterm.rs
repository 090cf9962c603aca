use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn modifiers_survive_conversion() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('n'),
        crossterm::event::KeyModifiers::CONTROL | crossterm::event::KeyModifiers::SHIFT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('n'));
    assert_eq!(converted.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn horizontal_scroll_is_dropped() {
    let event = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::ScrollLeft,
        column: 3,
        row: 4,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    assert_eq!(into_mouse_event(event), None);

    let event = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Drag(crossterm::event::MouseButton::Left),
        column: 3,
        row: 4,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    let converted = into_mouse_event(event).unwrap();
    assert_eq!(converted.kind, MouseEventKind::Drag(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (3, 4));
}
