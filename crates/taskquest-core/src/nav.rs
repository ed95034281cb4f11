//! Navigation table and theme.

/// Pages the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    TaskTree,
    Achievements,
    Minigame,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { id: "profile", label: "Profile", icon: "👤", color: "bg-streak" },
    NavItem { id: "home", label: "Home", icon: "🏠", color: "bg-ocean" },
    NavItem { id: "pathways", label: "Pathway/Tasks", icon: "🎯", color: "bg-success" },
    NavItem { id: "achievements", label: "Achievements", icon: "🏆", color: "bg-energy" },
    NavItem { id: "minigame", label: "Fish Minigame", icon: "🎮", color: "bg-accent" },
    NavItem { id: "appearance", label: "Appearance", icon: "🎨", color: "bg-streak" },
    NavItem { id: "about", label: "About us", icon: "ℹ", color: "bg-muted" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(Page),
    ToggleTheme,
}

/// What selecting a menu item does; unknown ids land on the not-found page
pub fn action_for(id: &str) -> NavAction {
    match id {
        "home" => NavAction::Go(Page::Home),
        "pathways" => NavAction::Go(Page::TaskTree),
        "achievements" => NavAction::Go(Page::Achievements),
        "minigame" => NavAction::Go(Page::Minigame),
        "appearance" => NavAction::ToggleTheme,
        _ => NavAction::Go(Page::NotFound),
    }
}

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything but `"light"` is dark
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_has_an_action() {
        let pages: Vec<_> = NAV_ITEMS.iter().map(|item| action_for(item.id)).collect();
        assert_eq!(pages[1], NavAction::Go(Page::Home));
        assert_eq!(pages[2], NavAction::Go(Page::TaskTree));
        assert_eq!(pages[5], NavAction::ToggleTheme);
        assert_eq!(action_for("profile"), NavAction::Go(Page::NotFound));
        assert_eq!(action_for("about"), NavAction::Go(Page::NotFound));
    }

    #[test]
    fn test_theme() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
