//! Responsive site navigation bar for Dioxus.
//!
//! A fixed top bar with flyout submenus on wide viewports and a collapsible
//! stacked menu on compact ones, both rendered from [`nav_tree::NAV_TREE`].

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod layout;
pub mod nav_tree;
pub mod state;
pub mod types;
pub mod viewport;

pub use components::NavigationBar;
pub use config::NavbarConfig;
pub use error::{NavError, NavResult};
pub use state::{bar_style, BarStyle, NavState};
pub use types::{Destination, NavEntry, NavGroup, NavLink, SectionId};
