//! Navigation bar view state and its pure transitions.
//!
//! Components never mutate a [`NavState`] in place: every interaction computes
//! the next record and the hook swaps it into its signal.

use crate::types::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub expanded: Option<SectionId>,
}

impl NavState {
    /// Open or close the compact menu. Closing also collapses any open group.
    #[must_use]
    pub fn toggle_menu(self) -> Self {
        if self.menu_open {
            self.close_menu()
        } else {
            Self { menu_open: true, ..self }
        }
    }

    /// Expand `id`, or collapse it if it is already the expanded group.
    #[must_use]
    pub fn toggle_section(self, id: SectionId) -> Self {
        let expanded = if self.expanded == Some(id) { None } else { Some(id) };
        Self { expanded, ..self }
    }

    /// State after a compact-menu link was followed.
    #[must_use]
    pub fn close_menu(self) -> Self {
        Self { menu_open: false, expanded: None }
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded == Some(id)
    }
}

/// Visual treatment of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    /// Solid background with shadow.
    Elevated,
    Transparent,
}

impl BarStyle {
    pub fn class(self) -> &'static str {
        match self {
            BarStyle::Elevated => "navbar navbar--elevated",
            BarStyle::Transparent => "navbar navbar--transparent",
        }
    }
}

pub fn bar_style(scroll_elevated: bool, compact: bool, menu_open: bool) -> BarStyle {
    if scroll_elevated || compact || menu_open {
        BarStyle::Elevated
    } else {
        BarStyle::Transparent
    }
}

/// Strictly greater than: an offset equal to the threshold is not elevated.
pub fn is_elevated(offset: f64, threshold: f64) -> bool {
    offset > threshold
}
