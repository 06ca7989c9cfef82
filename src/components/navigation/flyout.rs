use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;

/// Trigger with a panel revealed on hover or keyboard focus.
///
/// Holds no state: visibility is `.flyout:hover` / `.flyout:focus-within` in main.css.
#[component]
pub fn Flyout(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "flyout",
            button {
                class: "nav-trigger flyout-trigger",
                r#type: "button",
                aria_haspopup: "true",
                span { "{label}" }
                ChevronDownIcon { size: 16 }
            }
            div { class: "flyout-panel",
                {children}
            }
        }
    }
}
