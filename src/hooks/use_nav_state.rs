use dioxus::prelude::*;

use crate::state::NavState;
use crate::types::SectionId;

/// Handle to the bar's menu state. `Copy`, so event closures can each take one.
#[derive(Clone, Copy, PartialEq)]
pub struct NavController {
    pub state: Signal<NavState>,
}

pub fn use_nav_state() -> NavController {
    let state = use_signal(NavState::default);
    NavController { state }
}

impl NavController {
    /// Current state, read reactively.
    pub fn current(&self) -> NavState {
        *self.state.read()
    }

    /// Toggle the compact menu panel
    pub fn toggle_menu(&mut self) {
        self.replace(NavState::toggle_menu);
    }

    /// Expand or collapse a group in the compact menu
    pub fn toggle_section(&mut self, id: SectionId) {
        self.replace(|state| state.toggle_section(id));
    }

    /// Dismiss the compact menu after a link was followed
    pub fn close_menu(&mut self) {
        self.replace(NavState::close_menu);
    }

    fn replace(&mut self, transition: impl FnOnce(NavState) -> NavState) {
        let current = *self.state.peek();
        let next = transition(current);
        if next != current {
            tracing::trace!(?current, ?next, "nav state transition");
            self.state.set(next);
        }
    }
}
