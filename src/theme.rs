//! Theme state and transitions.
//!
//! The theme is a two-value toggle persisted under [`crate::prefs::THEME_KEY`]
//! and reflected on the document root as a `data-theme` attribute that the
//! site's stylesheets key off.

/// Attribute set on the document element; read by the accompanying CSS.
pub const THEME_ATTR: &str = "data-theme";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Strict parse: anything but the two stored spellings is `None`, so a
    /// malformed preference falls back to system detection.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme to apply at page load: the stored preference when there is one,
/// otherwise the system preference, otherwise dark.
pub fn initial_theme(stored: Option<Theme>, prefers_light: bool) -> Theme {
    stored.unwrap_or(if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    })
}

/// Theme to switch to when the toggle is pressed, given the `data-theme`
/// attribute currently on the document root. Absent or unreadable counts as
/// dark.
pub fn next_theme(current_attr: Option<&str>) -> Theme {
    current_attr
        .and_then(Theme::parse)
        .unwrap_or_default()
        .opposite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_stored_spellings() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("oled"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn initial_theme_prefers_stored_value() {
        assert_eq!(initial_theme(Some(Theme::Light), false), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), true), Theme::Dark);
    }

    #[test]
    fn initial_theme_falls_back_to_system_then_dark() {
        assert_eq!(initial_theme(None, true), Theme::Light);
        assert_eq!(initial_theme(None, false), Theme::Dark);
    }

    #[test]
    fn next_theme_treats_missing_or_garbage_as_dark() {
        assert_eq!(next_theme(None), Theme::Light);
        assert_eq!(next_theme(Some("garbage")), Theme::Light);
        assert_eq!(next_theme(Some("light")), Theme::Dark);
        assert_eq!(next_theme(Some("dark")), Theme::Light);
    }

    #[test]
    fn toggling_twice_round_trips() {
        for start in [Theme::Light, Theme::Dark] {
            let once = next_theme(Some(start.as_str()));
            let twice = next_theme(Some(once.as_str()));
            assert_eq!(twice, start);
        }
    }
}
