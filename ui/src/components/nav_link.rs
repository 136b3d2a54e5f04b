use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::menu::MenuEntry;

/// Everything a platform needs to build one navbar link.
///
/// `ui` does not know each platform's `Route` enum, so platforms register a
/// `LinkRenderer` that turns a `NavAnchor` into a router `Link`:
///
/// ```ignore
/// fn nav_link(anchor: NavAnchor) -> Element {
///     let onselect = anchor.onselect;
///     rsx!(Link {
///         class: "{anchor.class}",
///         to: anchor.href.clone(),
///         onclick: move |_| anchor_selected(onselect),
///         "{anchor.label}"
///     })
/// }
/// register_link_renderer(nav_link);
/// ```
///
/// Without a registered renderer a plain `<a href>` is emitted (SSR, tests).
#[derive(Clone, PartialEq)]
pub struct NavAnchor {
    pub href: String,
    pub label: String,
    pub class: String,
    pub active: bool,
    /// Fired after the link is clicked (used to close the popover).
    pub onselect: Option<EventHandler<()>>,
}

const LINK_BASE: &str = "navbar__link";

impl NavAnchor {
    /// Link inside the expanded, horizontal list.
    pub fn inline(entry: &MenuEntry) -> Self {
        Self::from_entry(entry, "navbar__link--inline", None)
    }

    /// Link inside the compact popover list.
    pub fn stacked(entry: &MenuEntry, onselect: Option<EventHandler<()>>) -> Self {
        Self::from_entry(entry, "navbar__link--stacked", onselect)
    }

    /// Brand link pointing at the home route; never marked active.
    pub fn brand(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            class: "navbar__brand-link".to_string(),
            active: false,
            onselect: None,
        }
    }

    fn from_entry(entry: &MenuEntry, variant: &str, onselect: Option<EventHandler<()>>) -> Self {
        let mut class = format!("{LINK_BASE} {variant}");
        if entry.active {
            class.push_str(" navbar__link--active");
        }
        Self {
            href: entry.href.clone(),
            label: entry.label.clone(),
            class,
            active: entry.active,
            onselect,
        }
    }

    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }
}

pub type LinkRenderer = fn(NavAnchor) -> Element;

static LINK_RENDERER: OnceCell<LinkRenderer> = OnceCell::new();

/// Install the platform's link renderer. Only the first registration wins.
pub fn register_link_renderer(renderer: LinkRenderer) {
    if LINK_RENDERER.set(renderer).is_err() {
        tracing::debug!("navbar link renderer already registered; keeping the first");
    }
}

/// Helper for renderers: notify the navbar that a link was chosen.
pub fn anchor_selected(onselect: Option<EventHandler<()>>) {
    if let Some(handler) = onselect {
        handler.call(());
    }
}

pub(crate) fn render_anchor(anchor: NavAnchor) -> Element {
    match LINK_RENDERER.get() {
        Some(renderer) => renderer(anchor),
        None => plain_anchor(anchor),
    }
}

fn plain_anchor(anchor: NavAnchor) -> Element {
    let aria_current = anchor.aria_current();
    let onselect = anchor.onselect;
    rsx! {
        a {
            class: "{anchor.class}",
            href: "{anchor.href}",
            aria_current,
            onclick: move |_| anchor_selected(onselect),
            "{anchor.label}"
        }
    }
}
