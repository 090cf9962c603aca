//! Service adapters: filesystem backed settings and key bindings.

pub mod keybinding;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, parse_keybinding, save_settings, save_settings_to,
};
