//! Render model for the navbar menu: which branch, which entries, which are active.

use super::active::is_active_with_home;
use super::config::NavLink;
use super::layout::LayoutMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// Exactly one branch exists per mode; both carry the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuModel {
    /// Expanded layout: horizontal list rendered in place.
    Inline(Vec<MenuEntry>),
    /// Compact layout: hamburger trigger revealing a vertical list.
    Popover(Vec<MenuEntry>),
}

impl MenuModel {
    pub fn build(mode: LayoutMode, links: &[NavLink], current_path: &str, home_href: &str) -> Self {
        let entries = classify(links, current_path, home_href);
        match mode {
            LayoutMode::Compact => Self::Popover(entries),
            LayoutMode::Expanded => Self::Inline(entries),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        match self {
            Self::Inline(_) => LayoutMode::Expanded,
            Self::Popover(_) => LayoutMode::Compact,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        match self {
            Self::Inline(entries) | Self::Popover(entries) => entries,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.label.as_str()).collect()
    }

    pub fn active_hrefs(&self) -> Vec<&str> {
        self.entries()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.href.as_str())
            .collect()
    }
}

/// Classify each link against `current_path`, preserving configured order.
pub fn classify(links: &[NavLink], current_path: &str, home_href: &str) -> Vec<MenuEntry> {
    links
        .iter()
        .map(|link| MenuEntry {
            href: link.href.clone(),
            label: link.label.clone(),
            active: is_active_with_home(current_path, &link.href, home_href),
        })
        .collect()
}
