use serde::{Deserialize, Serialize};

/// Light/dark presentation theme for the whole site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Icon on the toggle button; shows what a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Process-wide presentation state shared through context.
///
/// The booking draft itself is NOT here; it belongs to the open
/// booking widget alone and dies with it.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    /// Mobile navigation drawer visibility.
    pub menu_open: bool,
    /// Whether the booking widget is mounted.
    pub booking_open: bool,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState { theme: self.theme }
    }
}

/// The slice of [`AppState`] that survives restarts. Bookings are
/// deliberately absent; only the visitor's theme preference is kept.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_the_starting_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn persisted_theme_is_restored_and_transients_stay_closed() {
        let mut state = AppState {
            menu_open: true,
            booking_open: true,
            ..AppState::default()
        };

        state.apply_persisted(PersistedState { theme: Theme::Dark });

        assert_eq!(state.theme, Theme::Dark);
        // Visibility flags are session-local and never restored.
        assert!(state.menu_open);
        assert!(state.booking_open);
    }
}
