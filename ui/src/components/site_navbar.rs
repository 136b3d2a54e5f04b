use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::NavbarConfig;
use crate::core::layout::{LayoutMode, LayoutObserver};
use crate::core::menu::MenuModel;
use crate::i18n;

use super::icons::Logo;
use super::nav_link::{render_anchor, NavAnchor};
use super::nav_menu::NavMenu;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Responsive site header.
///
/// The root `header` is measured once when it mounts and again on every
/// box-size change. Below `config.breakpoint_px` the links move behind a
/// hamburger popover; at or above it they render inline. The breakpoint is
/// read when the component first renders.
///
/// `current_path` comes from the platform router (`use_route::<Route>()`).
/// `onmounted` receives the same mount event the navbar measures from, so
/// callers can hold on to the root element too.
#[component]
pub fn SiteNavbar(
    current_path: String,
    #[props(default = NavbarConfig::localized_default())] config: NavbarConfig,
    #[props(default)] class: String,
    onmounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    i18n::init();

    let observer = use_hook(|| Rc::new(RefCell::new(LayoutObserver::new(config.breakpoint_px))));
    let mut mode = use_signal(LayoutMode::default);

    use_drop({
        let observer = observer.clone();
        move || {
            observer.borrow_mut().detach();
        }
    });

    let on_root_mounted = {
        let observer = observer.clone();
        move |evt: MountedEvent| {
            let element = evt.data();
            let subscription = observer.borrow_mut().attach();

            let observer = observer.clone();
            spawn(async move {
                let width = match element.get_client_rect().await {
                    Ok(rect) => Some(rect.size.width),
                    Err(err) => {
                        debug!(?err, "navbar root not measurable");
                        None
                    }
                };
                let outcome = observer.borrow_mut().notify_initial(subscription, width);
                if let Some(next) = outcome.changed() {
                    mode.set(next);
                }
            });

            if let Some(forward) = onmounted {
                forward.call(evt);
            }
        }
    };

    let on_root_resize = {
        let observer = observer.clone();
        move |evt: ResizeEvent| {
            let Some(subscription) = observer.borrow().subscription() else {
                return;
            };
            let width = match evt.get_border_box_size() {
                Ok(size) => Some(size.width),
                Err(err) => {
                    debug!(?err, "navbar resize without border box");
                    None
                }
            };
            let outcome = observer.borrow_mut().notify(subscription, width);
            if let Some(next) = outcome.changed() {
                mode.set(next);
            }
        }
    };

    let layout = mode();
    let model = MenuModel::build(layout, &config.links, &current_path, &config.home_href);
    let brand = NavAnchor::brand(&config.home_href, &config.brand);
    let root_class = format!("navbar {} {class}", layout.css_modifier());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "{root_class}",
            role: "banner",
            onmounted: on_root_mounted,
            onresize: on_root_resize,
            div { class: "navbar__inner",
                div { class: "navbar__start",
                    if layout.is_compact() {
                        NavMenu { model: model.clone() }
                    }

                    div { class: "navbar__brand",
                        Logo {}
                        {render_anchor(brand)}
                    }

                    if !layout.is_compact() {
                        NavMenu { model }
                    }
                }
            }
        }
    }
}
