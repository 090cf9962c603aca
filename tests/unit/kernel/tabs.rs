use super::*;

fn three_files() -> (FileSystemStore, [NodeId; 3]) {
    let mut store = FileSystemStore::new();
    let a = store.create_file("a.js", None).unwrap();
    let folder = store.create_folder("lib", None).unwrap();
    let b = store.create_file("b.js", Some(folder)).unwrap();
    let c = store.create_file("c.js", None).unwrap();
    (store, [a, b, c])
}

#[test]
fn list_follows_store_order_and_marks_active() {
    let (mut store, [a, b, c]) = three_files();
    store.update_content(b, "dirty").unwrap();

    let tabs = list(&store);
    let ids: Vec<NodeId> = tabs.iter().map(|t| t.id).collect();
    assert_eq!(ids, [a, b, c]);
    assert!(tabs[1].is_dirty);
    assert!(tabs[2].is_active);
    assert_eq!(tabs.iter().filter(|t| t.is_active).count(), 1);
    assert_eq!(tabs[0].title, "a.js");
}

#[test]
fn set_active_rejects_folders() {
    let mut store = FileSystemStore::new();
    let folder = store.create_folder("src", None).unwrap();
    assert_eq!(set_active(&mut store, folder), Err(VfsError::NotAFile));
}

#[test]
fn cycle_wraps_in_both_directions() {
    let (mut store, [a, b, c]) = three_files();
    assert!(cycle(&mut store, 1));
    assert_eq!(store.active(), Some(a));
    assert!(cycle(&mut store, -1));
    assert_eq!(store.active(), Some(c));
    assert!(cycle(&mut store, -1));
    assert_eq!(store.active(), Some(b));
    assert!(!cycle(&mut store, 0));
}

#[test]
fn cycle_with_single_file_reports_no_change() {
    let mut store = FileSystemStore::new();
    store.create_file("only.go", None).unwrap();
    assert!(!cycle(&mut store, 1));
    assert!(!cycle(&mut FileSystemStore::new(), 1));
}

#[test]
fn clean_file_closes_without_confirmation() {
    let (mut store, [a, _, _]) = three_files();
    assert_eq!(request_close(&store, a), Ok(CloseRequest::Ready));

    let mut asked = false;
    let closed = close_with(&mut store, a, &mut |_: &str| {
        asked = true;
        false
    })
    .unwrap();
    assert!(closed);
    assert!(!asked);
    assert!(!store.contains(a));
}

#[test]
fn dirty_file_needs_confirmation_and_cancel_keeps_it() {
    let (mut store, [_, _, c]) = three_files();
    store.update_content(c, "x").unwrap();

    assert_eq!(
        request_close(&store, c),
        Ok(CloseRequest::NeedsConfirmation {
            message: close_message("c.js")
        })
    );

    let closed = close_with(&mut store, c, &mut |_: &str| false).unwrap();
    assert!(!closed);
    assert!(store.contains(c));
    assert_eq!(store.active(), Some(c));
}

#[test]
fn closing_active_dirty_file_after_confirmation_moves_active() {
    let (mut store, [a, b, c]) = three_files();
    store.update_content(c, "x").unwrap();

    let mut messages = Vec::new();
    let closed = close_with(&mut store, c, &mut |msg: &str| {
        messages.push(msg.to_string());
        true
    })
    .unwrap();
    assert!(closed);
    assert_eq!(messages, [close_message("c.js")]);
    assert_eq!(store.active(), Some(a));

    finish_close(&mut store, a).unwrap();
    assert_eq!(store.active(), Some(b));
    finish_close(&mut store, b).unwrap();
    assert_eq!(store.active(), None);
}

#[test]
fn close_rejects_folders_and_unknown_ids() {
    let mut store = FileSystemStore::new();
    let folder = store.create_folder("src", None).unwrap();
    assert_eq!(request_close(&store, folder), Err(VfsError::NotAFile));
    assert_eq!(finish_close(&mut store, folder), Err(VfsError::NotAFile));
    assert!(store.contains(folder));

    store.delete_node(folder).unwrap();
    assert_eq!(request_close(&store, folder), Err(VfsError::NotFound));
}
