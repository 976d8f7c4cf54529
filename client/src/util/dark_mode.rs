//! Applies the board theme to the document.
//!
//! Sets a `data-theme` attribute on the `<html>` element so page-level CSS
//! (scrollbars, body background) follows the toggle. Requires a browser
//! environment; SSR and native tests no-op. The choice is not persisted.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the `data-theme` attribute on the `<html>` element.
///
/// Returns whether the attribute was written.
pub fn apply(theme: Theme) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .is_some_and(|el| el.set_attribute(THEME_ATTRIBUTE, theme.as_str()).is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
        false
    }
}
