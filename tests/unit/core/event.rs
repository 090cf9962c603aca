use super::*;

#[test]
fn uppercase_char_normalizes_to_shift() {
    let event = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::CONTROL);
    let key: Key = event.into();
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('n')));
}

#[test]
fn modifiers_combine_and_contain() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::ALT));
    assert!(!mods.contains(KeyModifiers::SHIFT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn key_event_defaults_to_press() {
    let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(event.kind, KeyEventKind::Press);
    assert_eq!(Key::from(event), Key::simple(KeyCode::Enter));
}
