//! Navbar configuration: brand, home route, breakpoint and the ordered link list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::active::HOME_HREF;
use super::layout::COMPACT_BREAKPOINT_PX;

/// One navigation entry. `href` doubles as the list key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse navbar config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("navbar link #{0} has an empty href")]
    EmptyHref(usize),

    #[error("navbar link {0:?} has an empty label")]
    EmptyLabel(String),

    #[error("duplicate navbar href {0:?}")]
    DuplicateHref(String),

    #[error("invalid breakpoint {0} (must be a positive, finite width)")]
    InvalidBreakpoint(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub brand: String,
    pub home_href: String,
    pub breakpoint_px: f64,
    /// Omitted in JSON means the localized stock links.
    #[serde(default = "localized_links")]
    pub links: Vec<NavLink>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand: "Steven Lin".to_string(),
            home_href: HOME_HREF.to_string(),
            breakpoint_px: COMPACT_BREAKPOINT_PX,
            links: default_links(),
        }
    }
}

/// The four stock links with English labels.
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/home", "Home"),
        NavLink::new("/work", "Work Experience"),
        NavLink::new("/projects", "Projects"),
        NavLink::new("/about", "About Me"),
    ]
}

/// The four stock links with labels from the active locale.
pub fn localized_links() -> Vec<NavLink> {
    crate::i18n::init();
    vec![
        NavLink::new("/home", crate::t!("nav-home")),
        NavLink::new("/work", crate::t!("nav-work")),
        NavLink::new("/projects", crate::t!("nav-projects")),
        NavLink::new("/about", crate::t!("nav-about")),
    ]
}

impl NavbarConfig {
    pub fn with_links(links: Vec<NavLink>) -> Self {
        Self {
            links,
            ..Self::default()
        }
    }

    /// Default config with link labels pulled from the active locale.
    pub fn localized_default() -> Self {
        Self {
            links: localized_links(),
            ..Self::default()
        }
    }

    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `src`, falling back to the localized default on any error.
    pub fn from_json_or_default(src: &str) -> Self {
        Self::from_json(src).unwrap_or_else(|err| {
            warn!(%err, "navbar config rejected; using defaults");
            Self::localized_default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.breakpoint_px));
        }

        let mut seen = HashSet::new();
        for (index, link) in self.links.iter().enumerate() {
            if link.href.is_empty() {
                return Err(ConfigError::EmptyHref(index));
            }
            if link.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel(link.href.clone()));
            }
            if !seen.insert(link.href.as_str()) {
                return Err(ConfigError::DuplicateHref(link.href.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_portfolio_routes() {
        let config = NavbarConfig::default();
        let hrefs: Vec<_> = config.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/home", "/work", "/projects", "/about"]);
        assert_eq!(config.links[1].label, "Work Experience");
        assert_eq!(config.home_href, "/home");
        assert_eq!(config.breakpoint_px, 768.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = NavbarConfig::from_json(
            r#"{ "links": [ { "href": "/home", "label": "Home" }, { "href": "/blog", "label": "Blog" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.links.len(), 2);
        assert_eq!(config.links[1], NavLink::new("/blog", "Blog"));
        assert_eq!(config.brand, "Steven Lin");
        assert_eq!(config.breakpoint_px, 768.0);
    }

    #[test]
    fn omitted_links_use_localized_labels() {
        let config = NavbarConfig::from_json(r#"{ "brand": "Steven Lin", "breakpoint_px": 768 }"#)
            .unwrap();
        assert_eq!(config.links, localized_links());
        let hrefs: Vec<_> = config.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/home", "/work", "/projects", "/about"]);
    }

    #[test]
    fn bundled_web_config_is_valid_and_localized() {
        let src = include_str!("../../../web/assets/navbar.json");
        let config = NavbarConfig::from_json(src).unwrap();
        assert_eq!(config.links, localized_links());
        assert_eq!(config.home_href, "/home");
    }

    #[test]
    fn rejects_duplicate_hrefs() {
        let config = NavbarConfig::with_links(vec![
            NavLink::new("/work", "Work"),
            NavLink::new("/work", "Also work"),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateHref(href)) if href == "/work"
        ));
    }

    #[test]
    fn rejects_empty_fields() {
        let config = NavbarConfig::with_links(vec![NavLink::new("", "Nowhere")]);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyHref(0))));

        let config = NavbarConfig::with_links(vec![NavLink::new("/x", "  ")]);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyLabel(_))));
    }

    #[test]
    fn rejects_bad_breakpoint() {
        let config = NavbarConfig {
            breakpoint_px: 0.0,
            ..NavbarConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBreakpoint(_))
        ));
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(matches!(
            NavbarConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        let config = NavbarConfig::from_json_or_default("{ not json");
        assert_eq!(config.links.len(), 4);
    }
}
