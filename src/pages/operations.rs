use dioxus::document::eval;
use dioxus::prelude::*;
use site_nav::nav_tree::{self, NAV_TREE};
use site_nav::SectionId;

/// Landing page for a navigation group: one anchored section per child link.
#[component]
fn GroupPage(id: SectionId, section: String) -> Element {
    use_effect(use_reactive((&section,), |(section,)| {
        scroll_to_anchor(&section);
    }));

    let Some(group) = nav_tree::group(NAV_TREE, id) else {
        tracing::warn!(group = id.as_str(), "group missing from navigation tree");
        return rsx! {};
    };

    rsx! {
        section { class: "page-section",
            h1 { "{group.title}" }
            p { class: "page-lead", "{group.lead}" }
            for child in group.children.iter() {
                article {
                    key: "{child.destination}",
                    id: child.destination.fragment.unwrap_or_default(),
                    class: "page-anchor",
                    h2 { "{child.title}" }
                    p { "{child.description}" }
                }
            }
        }
    }
}

fn scroll_to_anchor(fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    let Ok(id) = serde_json::to_string(fragment) else { return; };
    eval(&format!(
        "document.getElementById({id})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}

#[component]
pub fn CapacityBuilding(section: String) -> Element {
    rsx! {
        GroupPage { id: SectionId::Capacity, section }
    }
}

#[component]
pub fn Diplomacy(section: String) -> Element {
    rsx! {
        GroupPage { id: SectionId::Diplomacy, section }
    }
}
