//! The site's navigation tree. Both the wide flyout menu and the compact
//! stacked menu render from this one table.

use crate::types::{Destination, NavEntry, NavGroup, NavLink, SectionId};

pub const CAPACITY_PATH: &str = "/operations/capacity-building";
pub const DIPLOMACY_PATH: &str = "/operations/diplomacy";

const CAPACITY_CHILDREN: &[NavLink] = &[
    NavLink {
        title: "Faculty & Executive Development",
        description: "Certification tracks for every professional level",
        destination: Destination::anchor(CAPACITY_PATH, "certifications"),
    },
    NavLink {
        title: "Corporate & Institutional Training",
        description: "Customized training programs for organizations",
        destination: Destination::anchor(CAPACITY_PATH, "corporate-training"),
    },
    NavLink {
        title: "Mentorship & Career Development",
        description: "Programs to prepare the next generation of African leaders",
        destination: Destination::anchor(CAPACITY_PATH, "mentorship"),
    },
];

const DIPLOMACY_CHILDREN: &[NavLink] = &[
    NavLink {
        title: "Stakeholder Engagement & Policy Advocacy",
        description: "Fostering collaborations between public and private sectors",
        destination: Destination::anchor(DIPLOMACY_PATH, "stakeholder-engagement"),
    },
    NavLink {
        title: "High-Level Forums",
        description: "Hosting high-level forums and summits",
        destination: Destination::anchor(DIPLOMACY_PATH, "high-level-forums"),
    },
    NavLink {
        title: "International Partnerships",
        description: "Building strategic alliances with global institutions",
        destination: Destination::anchor(DIPLOMACY_PATH, "strategic-partnerships"),
    },
];

pub static NAV_TREE: &[NavEntry] = &[
    NavEntry::Link(NavLink {
        title: "Home",
        description: "",
        destination: Destination::path("/"),
    }),
    NavEntry::Link(NavLink {
        title: "About",
        description: "",
        destination: Destination::path("/about"),
    }),
    NavEntry::Group(NavGroup {
        id: SectionId::Capacity,
        title: "Capacity Building Institute",
        lead: "Structured learning programs that cater to different professional levels through our specialized faculties",
        path: CAPACITY_PATH,
        children: CAPACITY_CHILDREN,
    }),
    NavEntry::Group(NavGroup {
        id: SectionId::Diplomacy,
        title: "Diplomacy & International Relations",
        lead: "Facilitating dialogues, negotiations, and collaborations that promote Africa's interests",
        path: DIPLOMACY_PATH,
        children: DIPLOMACY_CHILDREN,
    }),
    NavEntry::Link(NavLink {
        title: "Independent Research Organization",
        description: "",
        destination: Destination::path("/operations/research"),
    }),
    NavEntry::Link(NavLink {
        title: "Research Publications",
        description: "",
        destination: Destination::path("/publications"),
    }),
];

/// Look up a group by id.
pub fn group(tree: &'static [NavEntry], id: SectionId) -> Option<&'static NavGroup> {
    tree.iter().find_map(|entry| match entry {
        NavEntry::Group(group) if group.id == id => Some(group),
        _ => None,
    })
}
