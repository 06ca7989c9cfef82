use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::hooks::NavController;
use crate::layout::{compact_items, CompactItem};
use crate::types::{NavEntry, NavGroup, NavLink};

/// Stacked menu for compact viewports, shown while the menu is open.
///
/// Following any link dismisses the panel.
#[component]
pub fn CompactMenu(tree: &'static [NavEntry], nav: NavController) -> Element {
    let items = compact_items(tree, nav.current());

    rsx! {
        div { class: "compact-menu",
            for item in items {
                {compact_entry(item, nav)}
            }
        }
    }
}

fn compact_entry(item: CompactItem, nav: NavController) -> Element {
    match item {
        CompactItem::Link(link) => compact_link(link, "compact-link", nav),
        CompactItem::Group { group, expanded } => compact_group(group, expanded, nav),
    }
}

fn compact_link(link: &'static NavLink, class: &'static str, mut nav: NavController) -> Element {
    rsx! {
        Link {
            key: "{link.destination}",
            to: link.destination.href(),
            class: class,
            onclick: move |_| nav.close_menu(),
            "{link.title}"
        }
    }
}

fn compact_group(group: &'static NavGroup, expanded: bool, mut nav: NavController) -> Element {
    rsx! {
        div { key: "{group.path}", class: "compact-group",
            button {
                class: "compact-group-header",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| nav.toggle_section(group.id),
                span { "{group.title}" }
                ChevronDownIcon { open: expanded }
            }
            if expanded {
                div { class: "compact-group-links",
                    for link in group.children.iter() {
                        {compact_link(link, "compact-sublink", nav)}
                    }
                }
            }
        }
    }
}
