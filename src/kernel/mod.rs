//! 无界面的应用核心（state/action/effect）

pub mod action;
pub mod effect;
pub mod layout;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod tabs;

pub use action::Action;
pub use effect::Effect;
pub use layout::LayoutState;
pub use session::{EditorEdit, EditorSession};
pub use state::{
    AppState, ConfirmDialogState, FocusTarget, InputDialogKind, InputDialogState, PendingAction,
    UiState,
};
pub use store::{DispatchResult, Store};
pub use tabs::{CloseRequest, ConfirmChannel, TabEntry};
