use dioxus::prelude::*;

/// Catch-all page; `segments` is the unmatched route path split on `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-body", path = path)} }
        }
    }
}
