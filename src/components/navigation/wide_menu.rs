use dioxus::prelude::*;

use crate::components::navigation::Flyout;
use crate::layout::{wide_items, WideItem};
use crate::types::{NavEntry, NavGroup, NavLink};

/// Horizontal menu for wide viewports. Groups open as flyouts.
#[component]
pub fn WideMenu(tree: &'static [NavEntry]) -> Element {
    rsx! {
        ul { class: "nav-menu",
            for item in wide_items(tree) {
                {wide_entry(item)}
            }
        }
    }
}

fn wide_entry(item: WideItem) -> Element {
    match item {
        WideItem::Link(link) => rsx! {
            li { key: "{link.destination}", class: "nav-menu-item",
                Link { to: link.destination.href(), class: "nav-trigger", "{link.title}" }
            }
        },
        WideItem::Flyout { group, featured, secondary } => rsx! {
            li { key: "{group.path}", class: "nav-menu-item",
                Flyout { label: group.title,
                    ul { class: "flyout-grid",
                        {featured.map(|link| featured_tile(group, link))}
                        for link in secondary.iter() {
                            {secondary_tile(link)}
                        }
                    }
                }
            }
        },
    }
}

fn featured_tile(group: &'static NavGroup, link: &'static NavLink) -> Element {
    rsx! {
        li { class: "flyout-featured",
            Link { to: link.destination.href(), class: "flyout-featured-link",
                div { class: "flyout-featured-title", "{link.title}" }
                p { class: "flyout-featured-lead", "{group.lead}" }
            }
        }
    }
}

fn secondary_tile(link: &'static NavLink) -> Element {
    rsx! {
        li { key: "{link.destination}",
            Link { to: link.destination.href(), class: "flyout-link",
                div { class: "flyout-link-title", "{link.title}" }
                p { class: "flyout-link-description", "{link.description}" }
            }
        }
    }
}
