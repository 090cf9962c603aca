use super::*;

#[test]
fn each_editor_theme_maps_to_distinct_palette() {
    let dark = UiTheme::for_theme(EditorTheme::VsDark);
    let light = UiTheme::for_theme(EditorTheme::Light);
    let contrast = UiTheme::for_theme(EditorTheme::HcBlack);

    assert_ne!(dark, light);
    assert_ne!(dark, contrast);
    assert_ne!(light, contrast);
}

#[test]
fn default_follows_default_editor_theme() {
    assert_eq!(
        UiTheme::default(),
        UiTheme::for_theme(EditorTheme::default())
    );
}

#[test]
fn high_contrast_uses_black_background() {
    let theme = UiTheme::for_theme(EditorTheme::HcBlack);
    assert_eq!(theme.bg, Color::Black);
    assert_eq!(theme.fg, Color::White);
}
