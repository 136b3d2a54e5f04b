use dioxus::prelude::*;

use ui::components::{anchor_selected, register_link_renderer, NavAnchor, SiteNavbar};
use ui::views::{About, Home, NotFound, Projects, Work};
use ui::NavbarConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
        #[redirect("/", || Route::Home {})]
        #[route("/home")]
        Home {},
        #[route("/work")]
        Work {},
        #[route("/projects")]
        Projects {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Brand and breakpoint; links are left out so their labels stay localized.
const NAVBAR_JSON: &str = include_str!("../assets/navbar.json");

fn nav_link(anchor: NavAnchor) -> Element {
    let onselect = anchor.onselect;
    rsx!(Link {
        class: "{anchor.class}",
        to: anchor.href.clone(),
        onclick: move |_| anchor_selected(onselect),
        "{anchor.label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_link_renderer(nav_link);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: navbar fed from the router's current path, then the page.
#[component]
fn WebShell() -> Element {
    let config = use_hook(|| NavbarConfig::from_json_or_default(NAVBAR_JSON));
    let route = use_route::<Route>();

    rsx! {
        SiteNavbar {
            config,
            current_path: route.to_string(),
            onmounted: move |_| tracing::trace!("web navbar mounted"),
        }
        main { class: "page-shell",
            Outlet::<Route> {}
        }
    }
}
