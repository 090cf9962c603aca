use super::*;
use crate::kernel::services::ports::{EditorTheme, Settings};
use crate::kernel::state::{InputDialogKind, PendingAction};
use crate::models::{FileSystemStore, NodeId};

fn starter_store() -> Store {
    Store::new(AppState::new(
        "untitled",
        FileSystemStore::with_starter(),
        Settings::default(),
    ))
}

fn empty_store() -> Store {
    Store::new(AppState::new(
        "empty",
        FileSystemStore::new(),
        Settings::default(),
    ))
}

fn find(store: &Store, name: &str) -> NodeId {
    store
        .state
        .files
        .iter()
        .find(|(_, node)| node.name() == name)
        .map(|(id, _)| id)
        .unwrap()
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::Editor(EditorEdit::InsertChar(ch)));
    }
}

#[test]
fn starter_project_binds_editor_to_untitled_js() {
    let store = starter_store();
    let file = find(&store, "untitled.js");
    assert_eq!(store.state.session.bound(), Some(file));
    assert_eq!(
        store.state.session.buffer().text(),
        crate::models::file_system::STARTER_CONTENT
    );
}

#[test]
fn typing_writes_full_content_back_and_marks_dirty() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");

    store.dispatch(Action::RunCommand(Command::CursorLineEnd));
    type_text(&mut store, "!!");

    let data = store.state.files.file(file).unwrap();
    assert!(data.is_dirty);
    assert!(data.content.starts_with("// Write your code here!!\n"));
    assert_eq!(data.content, store.state.session.buffer().text());
}

#[test]
fn cursor_moves_do_not_dirty_the_file() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");

    let result = store.dispatch(Action::RunCommand(Command::CursorDown));
    assert!(result.state_changed);
    assert!(!store.state.files.file(file).unwrap().is_dirty);
    assert_eq!(store.state.session.cursor_position(), (2, 1));
}

#[test]
fn closing_clean_tab_removes_file_immediately() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");

    store.dispatch(Action::TabClose { id: file });

    assert!(!store.state.files.contains(file));
    assert!(!store.state.ui.confirm_dialog.visible);
    assert_eq!(store.state.session.bound(), None);
}

#[test]
fn closing_dirty_tab_asks_and_cancel_keeps_file() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");
    type_text(&mut store, "x");

    store.dispatch(Action::TabClose { id: file });
    assert!(store.state.ui.confirm_dialog.visible);
    assert_eq!(
        store.state.ui.confirm_dialog.message,
        "Discard unsaved changes to \"untitled.js\"?"
    );
    assert_eq!(
        store.state.ui.confirm_dialog.on_confirm,
        Some(PendingAction::CloseFile { id: file })
    );

    store.dispatch(Action::ConfirmDialogCancel);
    assert!(!store.state.ui.confirm_dialog.visible);
    assert!(store.state.files.contains(file));
    assert!(store.state.files.file(file).unwrap().is_dirty);
}

#[test]
fn confirming_dirty_close_falls_back_to_first_remaining_file() {
    let mut store = starter_store();
    let first = find(&store, "untitled.js");
    store.dispatch(Action::CreateFile {
        name: "b.ts".to_string(),
        parent: None,
    });
    let second = find(&store, "b.ts");
    assert_eq!(store.state.session.bound(), Some(second));
    type_text(&mut store, "let x = 1;");

    store.dispatch(Action::RunCommand(Command::CloseTab));
    store.dispatch(Action::ConfirmDialogAccept);

    assert!(!store.state.files.contains(second));
    assert_eq!(store.state.files.active(), Some(first));
    assert_eq!(store.state.session.bound(), Some(first));
}

#[test]
fn deleting_folder_requires_confirmation_and_cascades() {
    let mut store = starter_store();
    let root = find(&store, "root");
    let file = find(&store, "untitled.js");

    store.dispatch(Action::DeleteNode { id: root });
    assert_eq!(
        store.state.ui.confirm_dialog.message,
        "Are you sure you want to delete \"root\" and all its contents?"
    );
    assert!(store.state.files.contains(root));

    store.dispatch(Action::ConfirmDialogAccept);
    assert!(store.state.files.is_empty());
    assert!(!store.state.files.contains(file));
    assert_eq!(store.state.files.active(), None);
    assert_eq!(store.state.session.bound(), None);
}

#[test]
fn deleting_file_uses_short_message() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");
    store.dispatch(Action::DeleteNode { id: file });
    assert_eq!(
        store.state.ui.confirm_dialog.message,
        "Are you sure you want to delete \"untitled.js\"?"
    );
}

#[test]
fn new_file_dialog_targets_selected_folder() {
    let mut store = starter_store();
    let root = find(&store, "root");
    store.dispatch(Action::ExplorerClickRow { row: 0 });
    assert_eq!(store.state.files.selected(), Some(root));

    store.dispatch(Action::RunCommand(Command::NewFile));
    let dialog = &store.state.ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.value, "untitled.js");
    assert_eq!(dialog.kind, Some(InputDialogKind::NewFile { parent: Some(root) }));

    for _ in 0.."untitled.js".len() {
        store.dispatch(Action::InputDialogBackspace);
    }
    for ch in "main.rs".chars() {
        store.dispatch(Action::InputDialogAppend(ch));
    }
    store.dispatch(Action::InputDialogAccept);

    let created = find(&store, "main.rs");
    assert!(!store.state.ui.input_dialog.visible);
    assert_eq!(store.state.files.get(created).unwrap().parent(), Some(root));
    assert_eq!(store.state.files.active(), Some(created));
    assert_eq!(store.state.session.bound(), Some(created));
    assert_eq!(store.state.ui.focus, FocusTarget::Editor);
}

#[test]
fn new_folder_dialog_defaults_to_root_level() {
    let mut store = starter_store();
    store.dispatch(Action::RunCommand(Command::NewFolder));
    assert_eq!(store.state.ui.input_dialog.value, "new-folder");
    assert_eq!(
        store.state.ui.input_dialog.kind,
        Some(InputDialogKind::NewFolder { parent: None })
    );

    store.dispatch(Action::InputDialogAccept);
    let folder = find(&store, "new-folder");
    assert_eq!(store.state.files.get(folder).unwrap().parent(), None);
    assert!(store.state.files.folder(folder).unwrap().is_open);
}

#[test]
fn blank_dialog_name_keeps_dialog_open_with_error() {
    let mut store = empty_store();
    store.dispatch(Action::RunCommand(Command::NewFile));
    store.state.ui.input_dialog.value = "   ".to_string();
    store.state.ui.input_dialog.cursor = 3;

    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.state_changed);
    assert!(store.state.ui.input_dialog.visible);
    assert_eq!(store.state.ui.input_dialog.error.as_deref(), Some("Name required"));
    assert!(store.state.files.is_empty());
}

#[test]
fn escape_cancels_dialog_without_creating() {
    let mut store = empty_store();
    store.dispatch(Action::RunCommand(Command::NewFile));
    store.dispatch(Action::RunCommand(Command::Escape));
    assert!(!store.state.ui.input_dialog.visible);
    assert!(store.state.files.is_empty());
}

#[test]
fn rejected_create_sets_notification() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");

    let result = store.dispatch(Action::CreateFile {
        name: "x.js".to_string(),
        parent: Some(file),
    });
    assert!(result.state_changed);
    assert_eq!(store.state.files.len(), 2);
    assert!(store.state.ui.notification.is_some());

    store.dispatch(Action::DismissNotification);
    assert!(store.state.ui.notification.is_none());
}

#[test]
fn modal_dialog_blocks_editing() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");
    store.dispatch(Action::RunCommand(Command::NewFile));

    let result = store.dispatch(Action::Editor(EditorEdit::InsertChar('z')));
    assert!(!result.state_changed);
    assert!(!store.state.files.file(file).unwrap().is_dirty);
}

#[test]
fn explorer_keys_move_selection_and_toggle_folders() {
    let mut store = starter_store();
    let root = find(&store, "root");
    let file = find(&store, "untitled.js");
    store.dispatch(Action::RunCommand(Command::FocusExplorer));

    store.dispatch(Action::RunCommand(Command::CursorDown));
    assert_eq!(store.state.files.selected(), Some(root));
    store.dispatch(Action::RunCommand(Command::CursorDown));
    assert_eq!(store.state.files.selected(), Some(file));
    assert_eq!(store.state.files.active(), Some(file));

    store.dispatch(Action::RunCommand(Command::CursorUp));
    store.dispatch(Action::RunCommand(Command::CursorLeft));
    assert!(!store.state.files.folder(root).unwrap().is_open);
    assert_eq!(crate::views::flatten(&store.state.files).len(), 1);

    store.dispatch(Action::RunCommand(Command::InsertNewline));
    assert!(store.state.files.folder(root).unwrap().is_open);
}

#[test]
fn clicking_folder_row_toggles_it() {
    let mut store = starter_store();
    let root = find(&store, "root");

    store.dispatch(Action::ExplorerClickRow { row: 0 });
    assert!(!store.state.files.folder(root).unwrap().is_open);
    assert_eq!(store.state.ui.focus, FocusTarget::Explorer);

    let result = store.dispatch(Action::ExplorerClickRow { row: 5 });
    assert!(!result.state_changed);
}

#[test]
fn tab_cycling_wraps() {
    let mut store = starter_store();
    let first = find(&store, "untitled.js");
    store.dispatch(Action::CreateFile {
        name: "b.css".to_string(),
        parent: None,
    });

    store.dispatch(Action::RunCommand(Command::NextTab));
    assert_eq!(store.state.files.active(), Some(first));
    store.dispatch(Action::RunCommand(Command::PrevTab));
    assert_eq!(store.state.session.language(), crate::models::Language::Css);
}

#[test]
fn sidebar_drag_clamps_and_persists_on_release() {
    let mut store = starter_store();

    store.dispatch(Action::SidebarResizeStart);
    let result = store.dispatch(Action::SidebarResizeTo { x: 1200 });
    assert!(result.effects.is_empty());
    assert_eq!(store.state.layout.sidebar_width(), 500);

    let result = store.dispatch(Action::SidebarResizeEnd);
    assert_eq!(store.state.settings.sidebar_width, 500);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SaveSettings(settings)] if settings.sidebar_width == 500
    ));
}

#[test]
fn resize_without_start_is_ignored() {
    let mut store = starter_store();
    let result = store.dispatch(Action::SidebarResizeTo { x: 300 });
    assert!(!result.state_changed);
    assert_eq!(store.state.layout.sidebar_width(), 250);
}

#[test]
fn fullscreen_round_trips_through_host() {
    let mut store = starter_store();

    let result = store.dispatch(Action::RunCommand(Command::ToggleFullscreen));
    assert!(!result.state_changed);
    assert_eq!(result.effects, vec![Effect::SetFullscreen(true)]);
    assert!(!store.state.layout.is_fullscreen());

    let result = store.dispatch(Action::FullscreenChanged(true));
    assert!(result.state_changed);
    assert!(store.state.layout.is_fullscreen());

    let result = store.dispatch(Action::RunCommand(Command::ToggleFullscreen));
    assert_eq!(result.effects, vec![Effect::SetFullscreen(false)]);
}

#[test]
fn theme_and_font_cycles_save_settings() {
    let mut store = starter_store();
    assert_eq!(store.state.settings.theme, EditorTheme::VsDark);

    let result = store.dispatch(Action::RunCommand(Command::CycleTheme));
    assert_eq!(store.state.settings.theme, EditorTheme::HcBlack);
    assert_eq!(result.effects.len(), 1);

    store.dispatch(Action::RunCommand(Command::CycleFontSize));
    assert_eq!(store.state.settings.font_size, 16);
}

#[test]
fn insert_tab_uses_configured_tab_size() {
    let settings = Settings {
        tab_size: 4,
        ..Settings::default()
    };
    let mut files = FileSystemStore::new();
    files.create_file("a.py", None).unwrap();
    let mut store = Store::new(AppState::new("p", files, settings));

    store.dispatch(Action::RunCommand(Command::InsertTab));
    assert_eq!(store.state.session.buffer().text(), "    ");
}

#[test]
fn quit_sets_flag() {
    let mut store = empty_store();
    store.dispatch(Action::RunCommand(Command::Quit));
    assert!(store.state.ui.should_quit);
}

#[test]
fn editing_commands_route_by_focus() {
    let mut store = starter_store();
    let file = find(&store, "untitled.js");

    let result = store.dispatch(Action::RunCommand(Command::InsertNewline));
    assert!(result.state_changed);
    assert!(store.state.files.file(file).unwrap().content.starts_with('\n'));

    store.dispatch(Action::RunCommand(Command::FocusExplorer));
    let before = store.state.files.file(file).unwrap().content.clone();
    let result = store.dispatch(Action::RunCommand(Command::CursorDown));
    assert!(result.state_changed);
    assert!(store.state.files.selected().is_some());
    assert_eq!(store.state.files.file(file).unwrap().content, before);
}

#[test]
fn every_command_dispatches_from_either_focus() {
    for focus in [FocusTarget::Editor, FocusTarget::Explorer] {
        for command in Command::ALL {
            let mut store = starter_store();
            store.state.ui.focus = focus;
            let _ = store.dispatch(Action::RunCommand(command));
            assert_eq!(store.state.session.bound(), store.state.files.active());
        }
    }
}
