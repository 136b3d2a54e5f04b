//! Server-side renders of the menu branches, checked through the emitted HTML.

use dioxus::prelude::*;
use ui::components::{HamburgerIcon, NavMenu, SiteNavbar};
use ui::core::menu::MenuModel;
use ui::{LayoutMode, NavLink, NavbarConfig};

#[derive(Debug, PartialEq)]
struct RenderedLink {
    href: String,
    label: String,
    active: bool,
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn attr(attrs: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = attrs.find(&needle)? + needle.len();
    attrs[start..].split('"').next().map(str::to_string)
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        rest = rest[start..].split_once("-->").map(|(_, tail)| tail).unwrap_or("");
    }
    out.push_str(rest);
    out
}

fn rendered_links(html: &str) -> Vec<RenderedLink> {
    html.split("<a ")
        .skip(1)
        .map(|chunk| {
            let (attrs, rest) = chunk.split_once('>').expect("unterminated <a> tag");
            let label = rest.split_once("</a>").expect("unclosed <a>").0;
            let class = attr(attrs, "class").unwrap_or_default();
            RenderedLink {
                href: attr(attrs, "href").unwrap_or_default(),
                label: strip_comments(label),
                active: class.contains("navbar__link--active")
                    && attr(attrs, "aria-current").as_deref() == Some("page"),
            }
        })
        .collect()
}

fn blog_model(mode: LayoutMode) -> MenuModel {
    let links = vec![NavLink::new("/home", "Home"), NavLink::new("/blog", "Blog")];
    MenuModel::build(mode, &links, "/blog/post-1", "/home")
}

fn expanded_app() -> Element {
    rsx! {
        NavMenu { model: blog_model(LayoutMode::Expanded) }
    }
}

fn compact_app() -> Element {
    rsx! {
        NavMenu { model: blog_model(LayoutMode::Compact) }
    }
}

fn compact_open_app() -> Element {
    rsx! {
        NavMenu { model: blog_model(LayoutMode::Compact), default_open: true }
    }
}

fn site_navbar_app() -> Element {
    let config = NavbarConfig::with_links(vec![
        NavLink::new("/home", "Home"),
        NavLink::new("/blog", "Blog"),
    ]);
    rsx! {
        SiteNavbar { current_path: "/blog/post-1", config }
    }
}

fn icon_app() -> Element {
    rsx! {
        HamburgerIcon {}
    }
}

fn expected_links() -> Vec<RenderedLink> {
    vec![
        RenderedLink {
            href: "/home".into(),
            label: "Home".into(),
            active: false,
        },
        RenderedLink {
            href: "/blog".into(),
            label: "Blog".into(),
            active: true,
        },
    ]
}

#[test]
fn wide_layout_renders_inline_menu_only() {
    let html = render(expanded_app);
    assert!(html.contains("navbar__menu--inline"));
    assert!(!html.contains("navbar__trigger"));
    assert!(!html.contains("navbar__menu--popover"));
    assert_eq!(rendered_links(&html), expected_links());
}

#[test]
fn narrow_layout_renders_trigger_only() {
    let html = render(compact_app);
    assert!(html.contains("navbar__trigger"));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("navbar__menu--inline"));
    // Closed popover: no links until the trigger is used.
    assert!(rendered_links(&html).is_empty());
}

#[test]
fn opened_popover_matches_inline_links() {
    let html = render(compact_open_app);
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("navbar__menu--popover"));
    assert!(html.contains("navbar__list--stacked"));
    assert!(!html.contains("navbar__menu--inline"));

    let popover = rendered_links(&html);
    let inline = rendered_links(&render(expanded_app));
    assert_eq!(popover, expected_links());
    assert_eq!(popover, inline);
}

#[test]
fn hamburger_has_three_bars() {
    let html = render(icon_app);
    assert_eq!(html.matches("<path").count(), 3);
    assert!(html.contains("navbar__hamburger-bar--top"));
    assert!(html.contains("navbar__hamburger-bar--bottom"));
}

#[test]
fn site_navbar_without_viewport_stays_expanded() {
    let html = render(site_navbar_app);

    let header_start = html.find("<header").expect("navbar renders a header");
    let header_tag = &html[header_start..html[header_start..].find('>').unwrap() + header_start];
    assert!(header_tag.contains("role=\"banner\""));
    assert!(header_tag.contains("navbar--expanded"));
    assert!(!header_tag.contains("navbar--compact"));

    // Exactly one branch beside the brand: inline list, no trigger or popover.
    assert_eq!(html.matches("navbar__menu--inline").count(), 1);
    assert!(!html.contains("navbar__trigger"));
    assert!(!html.contains("navbar__menu--popover"));

    let links = rendered_links(&html);
    let (brand, menu) = links.split_first().expect("brand link renders first");
    assert_eq!(brand.href, "/home");
    assert_eq!(brand.label, "Steven Lin");
    assert!(!brand.active);
    assert_eq!(menu, expected_links().as_slice());
}
