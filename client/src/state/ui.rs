//! Display theme for the board chrome.
//!
//! DESIGN
//! ======
//! Presentation strings for the toggle live next to the enum so components
//! never branch on the theme themselves.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Light or dark color scheme for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value for the `data-theme` attribute and the root CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Icon of the theme the toggle switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}
