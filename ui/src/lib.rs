//! Shared UI crate for the portfolio site: the responsive navbar, its
//! platform-agnostic logic, and the routed pages.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod icons;
    pub mod nav_link;
    pub mod nav_menu;
    pub mod site_navbar;

    pub use icons::{HamburgerIcon, Logo};
    pub use nav_link::{anchor_selected, register_link_renderer, LinkRenderer, NavAnchor};
    pub use nav_menu::{InlineMenu, MobileMenu, NavMenu};
    pub use site_navbar::SiteNavbar;
}

pub use crate::core::config::{ConfigError, NavLink, NavbarConfig};
pub use crate::core::layout::LayoutMode;

/// Shared site theme (`assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
