#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::{anchor_selected, register_link_renderer, NavAnchor, SiteNavbar};
use ui::views::{About, Home, NotFound, Projects, Work};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    // Opens in the expanded layout; shrink below 768 px to get the compact menu.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Steven Lin – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1024.0, 720.0)),
                ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(anchor: NavAnchor) -> Element {
    let onselect = anchor.onselect;
    rsx!(Link {
        class: "{anchor.class}",
        to: anchor.href.clone(),
        onclick: move |_| anchor_selected(onselect),
        "{anchor.label}"
    })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_link_renderer(nav_link);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Desktop layout around the shared navbar, using the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        SiteNavbar { current_path: route.to_string() }

        main { class: "page-shell",
            Outlet::<Route> {}
        }
    }
}
