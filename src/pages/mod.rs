use dioxus::prelude::*;
use site_nav::NavigationBar;

use crate::Route;

mod operations;

pub use operations::{CapacityBuilding, Diplomacy};

/// Shell shared by every route: the bar above the routed page.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        NavigationBar {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page-hero",
            h1 { "Building Africa's next generation of leaders" }
            p { "Capacity building, diplomacy and independent research." }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page-section",
            h1 { "About" }
        }
    }
}

#[component]
pub fn Research() -> Element {
    rsx! {
        section { class: "page-section",
            h1 { "Independent Research Organization" }
        }
    }
}

#[component]
pub fn Publications() -> Element {
    rsx! {
        section { class: "page-section",
            h1 { "Research Publications" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "page-section",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
