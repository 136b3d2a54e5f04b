use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    crate::i18n::init();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
        }
    }
}
