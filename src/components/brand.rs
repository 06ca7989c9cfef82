use dioxus::prelude::*;

const LOGO_ICON: Asset = asset!("/assets/logo.svg");

/// Logo mark linking back to the home page.
#[component]
pub fn Brand() -> Element {
    rsx! {
        Link {
            to: "/",
            class: "navbar-brand",
            img {
                class: "navbar-logo",
                src: LOGO_ICON,
                alt: "Home",
            }
        }
    }
}
