use dioxus::prelude::*;

/// Round brand mark.
#[component]
pub fn Logo(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "navbar__logo {class}",
            role: "img",
            "aria-label": crate::t!("navbar-logo-label"),
            fill: "none",
            width: "1em",
            height: "1em",
            view_box: "0 0 324 323",
            rect {
                fill: "currentColor",
                x: "0.5",
                width: "323",
                height: "323",
                rx: "161.5",
            }
            circle {
                class: "navbar__logo-dot",
                cx: "162",
                cy: "161.5",
                r: "60",
                fill: "white",
            }
        }
    }
}

/// Three-bar menu icon. Bars animate into a cross via CSS when the parent
/// trigger has `aria-expanded="true"`.
#[component]
pub fn HamburgerIcon() -> Element {
    rsx! {
        svg {
            class: "navbar__hamburger",
            "aria-hidden": "true",
            fill: "none",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { class: "navbar__hamburger-bar navbar__hamburger-bar--top", d: "M4 12L20 12" }
            path { class: "navbar__hamburger-bar navbar__hamburger-bar--middle", d: "M4 12H20" }
            path { class: "navbar__hamburger-bar navbar__hamburger-bar--bottom", d: "M4 12H20" }
        }
    }
}
