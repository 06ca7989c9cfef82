use dioxus::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::navigation::{CompactMenu, WideMenu};
use crate::components::Brand;
use crate::config::NavbarConfig;
use crate::hooks::{use_compact_viewport, use_nav_state, use_scroll_elevation};
use crate::nav_tree::NAV_TREE;
use crate::state::bar_style;

/// Fixed top navigation bar.
///
/// Reads [`NavbarConfig`] from context when one is provided. `compact` overrides
/// the built-in viewport classifier, e.g. for a host that already tracks breakpoints.
#[component]
pub fn NavigationBar(compact: Option<ReadOnlySignal<bool>>) -> Element {
    let config = try_use_context::<NavbarConfig>().unwrap_or_default();
    let scroll_elevated = use_scroll_elevation(config.scroll_threshold_px);
    let detected = use_compact_viewport(config);
    let compact = compact.unwrap_or(detected);
    let mut nav = use_nav_state();

    let is_compact = compact();
    let state = nav.current();
    let style = bar_style(scroll_elevated(), is_compact, state.menu_open);

    rsx! {
        nav { class: style.class(),
            div { class: "navbar-container",
                div { class: "navbar-row",
                    Brand {}

                    if !is_compact {
                        WideMenu { tree: NAV_TREE }
                    }

                    if is_compact {
                        button {
                            class: "navbar-toggle",
                            r#type: "button",
                            aria_label: "Toggle menu",
                            aria_expanded: "{state.menu_open}",
                            onclick: move |_| nav.toggle_menu(),
                            if state.menu_open {
                                CloseIcon {}
                            } else {
                                MenuIcon {}
                            }
                        }
                    }
                }

                if is_compact && state.menu_open {
                    CompactMenu { tree: NAV_TREE, nav }
                }
            }
        }
    }
}
