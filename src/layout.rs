//! View items for the two menu variants, derived from the navigation tree.
//!
//! The wide and compact renderers only ever iterate these items, so the set of
//! destinations either menu can show is exactly what [`destinations`] reports.

use std::collections::BTreeSet;

use crate::state::NavState;
use crate::types::{Destination, NavEntry, NavGroup, NavLink};

#[derive(Clone, Debug, PartialEq)]
pub enum WideItem {
    Link(&'static NavLink),
    Flyout {
        group: &'static NavGroup,
        featured: Option<&'static NavLink>,
        secondary: &'static [NavLink],
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompactItem {
    Link(&'static NavLink),
    Group {
        group: &'static NavGroup,
        expanded: bool,
    },
}

pub fn wide_items(tree: &'static [NavEntry]) -> Vec<WideItem> {
    tree.iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => WideItem::Link(link),
            NavEntry::Group(group) => WideItem::Flyout {
                group,
                featured: group.featured(),
                secondary: group.secondary(),
            },
        })
        .collect()
}

pub fn compact_items(tree: &'static [NavEntry], state: NavState) -> Vec<CompactItem> {
    tree.iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => CompactItem::Link(link),
            NavEntry::Group(group) => CompactItem::Group {
                group,
                expanded: state.is_expanded(group.id),
            },
        })
        .collect()
}

pub trait LinkTargets {
    /// Every link target this item can render, whether currently revealed or not.
    fn targets(&self) -> Vec<Destination>;
}

impl LinkTargets for WideItem {
    fn targets(&self) -> Vec<Destination> {
        match self {
            WideItem::Link(link) => vec![link.destination],
            WideItem::Flyout { featured, secondary, .. } => featured
                .iter()
                .copied()
                .chain(secondary.iter())
                .map(|link| link.destination)
                .collect(),
        }
    }
}

impl LinkTargets for CompactItem {
    fn targets(&self) -> Vec<Destination> {
        match self {
            CompactItem::Link(link) => vec![link.destination],
            CompactItem::Group { group, .. } => {
                group.children.iter().map(|link| link.destination).collect()
            }
        }
    }
}

pub fn destinations<T: LinkTargets>(items: &[T]) -> BTreeSet<Destination> {
    items.iter().flat_map(LinkTargets::targets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav_tree::NAV_TREE;
    use crate::types::SectionId;

    #[test]
    fn test_wide_and_compact_share_destinations() {
        let wide = destinations(&wide_items(NAV_TREE));
        let compact = destinations(&compact_items(NAV_TREE, NavState::default()));
        assert_eq!(wide, compact);
        assert_eq!(wide.len(), 10);
    }

    #[test]
    fn test_compact_order_links_groups_links() {
        let items = compact_items(NAV_TREE, NavState::default());
        let shape: Vec<&str> = items
            .iter()
            .map(|item| match item {
                CompactItem::Link(_) => "link",
                CompactItem::Group { .. } => "group",
            })
            .collect();
        assert_eq!(shape, ["link", "link", "group", "group", "link", "link"]);
    }

    #[test]
    fn test_compact_expansion_follows_state() {
        let state = NavState::default().toggle_menu().toggle_section(SectionId::Diplomacy);
        let expanded: Vec<SectionId> = compact_items(NAV_TREE, state)
            .iter()
            .filter_map(|item| match item {
                CompactItem::Group { group, expanded: true } => Some(group.id),
                _ => None,
            })
            .collect();
        assert_eq!(expanded, [SectionId::Diplomacy]);
    }

    #[test]
    fn test_flyout_has_featured_and_two_secondary() {
        for item in wide_items(NAV_TREE) {
            if let WideItem::Flyout { group, featured, secondary } = item {
                assert_eq!(featured, group.children.first());
                assert_eq!(secondary.len(), 2);
            }
        }
    }
}
