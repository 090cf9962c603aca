use super::*;

#[test]
fn sync_binds_active_file_content_and_language() {
    let store = FileSystemStore::with_starter();
    let mut session = EditorSession::default();

    assert!(session.sync(&store));
    assert_eq!(session.bound(), store.active());
    assert_eq!(session.language(), Language::JavaScript);
    assert_eq!(
        session.buffer().text(),
        crate::models::file_system::STARTER_CONTENT
    );
    assert_eq!(session.cursor_position(), (1, 1));

    assert!(!session.sync(&store));
}

#[test]
fn switching_active_file_reinitialises_surface() {
    let mut store = FileSystemStore::new();
    let a = store.create_file("a.py", None).unwrap();
    let mut session = EditorSession::default();
    session.apply(&mut store, EditorEdit::InsertText("print()".into())).unwrap();

    let b = store.create_file("b.go", None).unwrap();
    assert!(session.sync(&store));
    assert_eq!(session.bound(), Some(b));
    assert_eq!(session.language(), Language::Go);
    assert!(session.buffer().is_empty());

    store.set_active(a).unwrap();
    assert!(session.sync(&store));
    assert_eq!(session.buffer().text(), "print()");
}

#[test]
fn every_change_is_forwarded_as_full_content() {
    let mut store = FileSystemStore::new();
    let id = store.create_file("main.rb", None).unwrap();
    let mut session = EditorSession::default();

    session.apply(&mut store, EditorEdit::InsertChar('a')).unwrap();
    assert_eq!(store.file(id).unwrap().content, "a");
    assert!(store.file(id).unwrap().is_dirty);

    session.apply(&mut store, EditorEdit::InsertNewline).unwrap();
    session.apply(&mut store, EditorEdit::InsertTab).unwrap();
    session.apply(&mut store, EditorEdit::InsertChar('b')).unwrap();
    assert_eq!(store.file(id).unwrap().content, "a\n  b");
    assert_eq!(session.cursor_position(), (2, 4));

    session.apply(&mut store, EditorEdit::DeleteBackward).unwrap();
    assert_eq!(store.file(id).unwrap().content, "a\n  ");
}

#[test]
fn cursor_motion_never_dirties_the_file() {
    let mut store = FileSystemStore::with_starter();
    let id = store.active().unwrap();
    let mut session = EditorSession::default();

    assert!(session.apply(&mut store, EditorEdit::CursorDown).unwrap());
    assert!(!session.apply(&mut store, EditorEdit::CursorLineEnd).unwrap());
    assert!(!store.file(id).unwrap().is_dirty);
    assert_eq!(session.cursor_position(), (2, 1));
}

#[test]
fn failed_delete_does_not_touch_store() {
    let mut store = FileSystemStore::new();
    let id = store.create_file("empty.txt", None).unwrap();
    let mut session = EditorSession::default();

    assert!(session.apply(&mut store, EditorEdit::DeleteBackward).unwrap());
    assert!(!session.apply(&mut store, EditorEdit::DeleteBackward).unwrap());
    assert!(!store.file(id).unwrap().is_dirty);
}

#[test]
fn edits_without_active_file_are_ignored() {
    let mut store = FileSystemStore::new();
    let mut session = EditorSession::default();
    assert!(!session.apply(&mut store, EditorEdit::InsertChar('x')).unwrap());
    assert!(store.is_empty());
}

#[test]
fn deleting_bound_file_unbinds_session() {
    let mut store = FileSystemStore::new();
    let id = store.create_file("a.ts", None).unwrap();
    let mut session = EditorSession::new(4);
    session.sync(&store);

    store.delete_node(id).unwrap();
    assert!(session.sync(&store));
    assert_eq!(session.bound(), None);
    assert_eq!(session.language(), Language::PlainText);
    assert_eq!(session.tab_size(), 4);
}
