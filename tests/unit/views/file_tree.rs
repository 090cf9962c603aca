use super::*;

fn names(items: &[TreeItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn folders_precede_files_then_names_ascend() {
    let mut store = FileSystemStore::new();
    let f = store.create_folder("F", None).unwrap();
    store.create_file("b.js", Some(f)).unwrap();
    store.create_folder("a", Some(f)).unwrap();

    let root = render_level(&store, None);
    assert_eq!(names(&root), ["F"]);
    assert_eq!(names(root[0].children()), ["a", "b.js"]);
    assert_eq!(root[0].children()[0].depth, 1);
}

#[test]
fn name_ordering_is_case_sensitive() {
    let mut store = FileSystemStore::new();
    store.create_file("beta.md", None).unwrap();
    store.create_file("Zeta.md", None).unwrap();
    store.create_file("alpha.md", None).unwrap();
    store.create_folder("zz", None).unwrap();
    store.create_folder("Aa", None).unwrap();

    let root = render_level(&store, None);
    assert_eq!(names(&root), ["Aa", "zz", "Zeta.md", "alpha.md", "beta.md"]);
}

#[test]
fn closed_folder_hides_subtree_but_keeps_nodes() {
    let mut store = FileSystemStore::new();
    let parent = store.create_folder("F", None).unwrap();
    let sibling = store.create_folder("G", None).unwrap();
    let hidden = store.create_file("hidden.py", Some(sibling)).unwrap();
    store.create_file("shown.py", Some(parent)).unwrap();

    store.toggle_folder(sibling).unwrap();
    let root = render_level(&store, None);
    assert_eq!(names(&root), ["F", "G"]);
    assert_eq!(names(root[0].children()), ["shown.py"]);
    assert!(root[1].children().is_empty());
    assert!(matches!(
        root[1].kind,
        TreeItemKind::Folder { is_open: false, .. }
    ));

    assert_eq!(store.get(hidden).unwrap().name(), "hidden.py");
    assert_eq!(render_level(&store, Some(sibling)).len(), 1);
}

#[test]
fn file_items_carry_language_icon_and_dirty_flag() {
    let mut store = FileSystemStore::new();
    let id = store.create_file("data.json", None).unwrap();
    store.update_content(id, "{}").unwrap();

    let root = render_level(&store, None);
    assert_eq!(
        root[0].kind,
        TreeItemKind::File {
            language: Language::Json,
            icon: FileIcon::Json,
            is_dirty: true,
        }
    );
}

#[test]
fn flatten_walks_depth_first_in_display_order() {
    let mut store = FileSystemStore::new();
    let root = store.create_folder("root", None).unwrap();
    let file = store.create_file("untitled.js", Some(root)).unwrap();
    let src = store.create_folder("src", Some(root)).unwrap();
    store.create_file("lib.ts", Some(src)).unwrap();
    store.create_file("README.md", None).unwrap();

    let rows = flatten(&store);
    let listed: Vec<(&str, u16)> = rows.iter().map(|r| (r.name.as_str(), r.depth)).collect();
    assert_eq!(
        listed,
        [
            ("root", 0),
            ("src", 1),
            ("lib.ts", 2),
            ("untitled.js", 1),
            ("README.md", 0),
        ]
    );

    store.select(file).unwrap();
    let rows = flatten(&store);
    let row = rows.iter().find(|r| r.id == file).unwrap();
    assert!(row.is_selected);
    assert!(row.is_active);
    assert!(rows.iter().filter(|r| r.is_selected).count() == 1);
}

#[test]
fn root_scenario_renders_root_then_file() {
    let mut store = FileSystemStore::new();
    let root = store.create_folder("root", None).unwrap();
    store.create_file("untitled.js", Some(root)).unwrap();

    let rows = flatten(&store);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_folder && rows[0].is_open);
    assert_eq!(rows[1].name, "untitled.js");
    assert!(rows[1].is_active);

    store.delete_node(root).unwrap();
    assert!(flatten(&store).is_empty());
}
