use dioxus::prelude::*;

#[component]
pub fn Work() -> Element {
    rsx! {
        section { class: "page page-work",
            h1 { {crate::t!("work-title")} }
            p { {crate::t!("work-intro")} }
        }
    }
}
