use dioxus::prelude::*;

use crate::core::menu::{MenuEntry, MenuModel};
use crate::core::overlay::{DismissReason, OverlayState};
use crate::i18n;

use super::icons::HamburgerIcon;
use super::nav_link::{render_anchor, NavAnchor};

const POPOVER_ID: &str = "navbar-popover";

/// Renders whichever branch the model selected. Never both.
#[component]
pub fn NavMenu(model: MenuModel, #[props(default)] default_open: bool) -> Element {
    match model {
        MenuModel::Inline(entries) => rsx! {
            InlineMenu { entries }
        },
        MenuModel::Popover(entries) => rsx! {
            MobileMenu { entries, default_open }
        },
    }
}

#[component]
pub fn InlineMenu(entries: Vec<MenuEntry>) -> Element {
    i18n::init();

    rsx! {
        nav {
            class: "navbar__menu navbar__menu--inline",
            aria_label: crate::t!("navbar-primary-label"),
            ul { class: "navbar__list navbar__list--inline",
                for entry in entries.iter() {
                    li { key: "{entry.href}", class: "navbar__item",
                        {render_anchor(NavAnchor::inline(entry))}
                    }
                }
            }
        }
    }
}

/// Hamburger trigger plus the popover list it reveals.
///
/// Dismisses on Escape, on a click outside the panel (backdrop) and after a
/// link is chosen. Escape is handled on the popover container, so it only
/// closes the menu while focus is inside it (the trigger or a link), not
/// from anywhere in the document. The state lives with this component, so
/// leaving compact mode (which unmounts it) also closes it.
#[component]
pub fn MobileMenu(entries: Vec<MenuEntry>, #[props(default)] default_open: bool) -> Element {
    i18n::init();

    let mut overlay = use_signal(|| OverlayState::new(default_open));
    let mut dismiss = move |reason: DismissReason| {
        if overlay.peek().is_open() {
            overlay.with_mut(|state| {
                state.dismiss(reason);
            });
        }
    };
    let onselect = use_callback(move |_: ()| dismiss(DismissReason::LinkSelected));

    let state = overlay();
    let trigger_label = if state.is_open() {
        crate::t!("navbar-menu-close")
    } else {
        crate::t!("navbar-menu-open")
    };

    rsx! {
        div {
            class: "navbar__popover",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    dismiss(DismissReason::Escape);
                }
            },
            button {
                r#type: "button",
                class: "navbar__trigger",
                aria_label: "{trigger_label}",
                aria_haspopup: "true",
                aria_expanded: state.aria_expanded(),
                aria_controls: POPOVER_ID,
                onclick: move |_| overlay.with_mut(|state| state.toggle()),
                HamburgerIcon {}
            }

            if state.is_open() {
                div {
                    class: "navbar__backdrop",
                    aria_hidden: "true",
                    onclick: move |_| dismiss(DismissReason::OutsideClick),
                }
                nav {
                    id: POPOVER_ID,
                    class: "navbar__menu navbar__menu--popover",
                    aria_label: crate::t!("navbar-menu-label"),
                    ul { class: "navbar__list navbar__list--stacked",
                        for entry in entries.iter() {
                            li { key: "{entry.href}", class: "navbar__item",
                                {render_anchor(NavAnchor::stacked(entry, Some(onselect)))}
                            }
                        }
                    }
                }
            }
        }
    }
}
