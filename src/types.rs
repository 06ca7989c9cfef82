use std::fmt;

use serde::{Deserialize, Serialize};

/// Collapsible groups of the navigation tree. Closed set: an unknown group id
/// cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Capacity,
    Diplomacy,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Capacity => "capacity",
            SectionId::Diplomacy => "diplomacy",
        }
    }
}

/// Router target: a path plus an optional fragment anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Destination {
    pub path: &'static str,
    pub fragment: Option<&'static str>,
}

impl Destination {
    pub const fn path(path: &'static str) -> Self {
        Self { path, fragment: None }
    }

    pub const fn anchor(path: &'static str, fragment: &'static str) -> Self {
        Self { path, fragment: Some(fragment) }
    }

    /// String form handed to the router `Link`.
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.path, fragment),
            None => f.write_str(self.path),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub title: &'static str,
    pub description: &'static str,
    pub destination: Destination,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub id: SectionId,
    pub title: &'static str,
    /// Longer text shown on the featured flyout tile.
    pub lead: &'static str,
    /// Landing page the children's fragments point into.
    pub path: &'static str,
    pub children: &'static [NavLink],
}

impl NavGroup {
    /// First child, rendered as the large tile of the flyout.
    pub fn featured(&self) -> Option<&'static NavLink> {
        self.children.first()
    }

    pub fn secondary(&self) -> &'static [NavLink] {
        self.children.get(1..).unwrap_or(&[])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavEntry {
    Link(NavLink),
    Group(NavGroup),
}
