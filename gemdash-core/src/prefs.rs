use serde::{Deserialize, Serialize};

/// localStorage key for the theme preference ("light"/"dark").
pub const THEME_STORAGE_KEY: &str = "theme";
/// localStorage key for the sidebar-collapsed flag ("true"/"false").
pub const SIDEBAR_STORAGE_KEY: &str = "sb|sidebar-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// An explicit stored preference wins; otherwise the OS preference
    /// decides. Unrecognised stored values count as absent.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
        match stored {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if os_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// The sidebar starts collapsed only when the stored flag is exactly
/// "true".
pub fn sidebar_collapsed(stored: Option<&str>) -> bool {
    stored == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_wins_over_os_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn os_preference_applies_when_unset() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("solarized"), true), Theme::Dark);
    }

    #[test]
    fn sidebar_flag_parsing() {
        assert!(sidebar_collapsed(Some("true")));
        assert!(!sidebar_collapsed(Some("false")));
        assert!(!sidebar_collapsed(None));
    }
}
