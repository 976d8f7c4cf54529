use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_attribute_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn theme_toggle_offers_the_other_mode() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
}
