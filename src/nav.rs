use crate::glyph::Glyph;

/// A region of the home page addressable by a fragment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Certifications,
    Resume,
    Contact,
}

impl Section {
    /// Element id rendered on the section and targeted by `#fragment` links.
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub icon: Glyph,
}

impl NavItem {
    pub const fn label(&self) -> &'static str {
        self.section.label()
    }

    pub fn href(&self) -> String {
        self.section.href()
    }
}

/// Drives both the desktop link row and the mobile drop-down.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        section: Section::About,
        icon: Glyph::User,
    },
    NavItem {
        section: Section::Skills,
        icon: Glyph::Code,
    },
    NavItem {
        section: Section::Projects,
        icon: Glyph::Briefcase,
    },
    NavItem {
        section: Section::Certifications,
        icon: Glyph::BadgeCheck,
    },
    NavItem {
        section: Section::Resume,
        icon: Glyph::FileText,
    },
    NavItem {
        section: Section::Contact,
        icon: Glyph::Mail,
    },
];

/// Open/closed state of the mobile navigation menu.
///
/// Starts closed on every page load and only changes through [`MenuState::toggled`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Glyph shown on the toggle button: the action the next click performs.
    pub const fn toggle_glyph(self) -> Glyph {
        match self {
            Self::Closed => Glyph::Menu,
            Self::Open => Glyph::Close,
        }
    }

    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open navigation menu",
            Self::Open => "Close navigation menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Closed);
        assert!(!state.is_open());
        assert_eq!(state.toggle_glyph(), Glyph::Menu);
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut state = MenuState::default();
        for clicks in 1..=25 {
            let prev = state;
            state = state.toggled();
            assert_ne!(prev, state, "every click must change the state");
            // odd number of clicks shows the mobile menu, even hides it
            assert_eq!(state.is_open(), clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn test_menu_glyph_follows_state() {
        assert_eq!(MenuState::Open.toggle_glyph(), Glyph::Close);
        assert_eq!(MenuState::Closed.toggle_glyph(), Glyph::Menu);
        assert_ne!(MenuState::Open.toggle_label(), MenuState::Closed.toggle_label());
    }

    #[test]
    fn test_nav_anchors() {
        let ids = NAV_ITEMS
            .iter()
            .map(|item| item.section.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_ITEMS.len(), "anchor ids should be unique");

        for item in NAV_ITEMS {
            assert_eq!(item.href(), format!("#{}", item.label().to_lowercase()));
        }
        for required in ["about", "skills", "projects", "certifications", "contact"] {
            assert!(ids.contains(required), "missing anchor for {required}");
        }
    }
}
