use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::NavbarConfig;
use crate::viewport;

/// Classifies the viewport as compact (narrower than the configured breakpoint).
///
/// Re-evaluates whenever the breakpoint media query flips. Without a browser
/// window the viewport is reported as wide.
pub fn use_compact_viewport(config: NavbarConfig) -> ReadOnlySignal<bool> {
    let mut compact = use_signal(move || {
        viewport::viewport_width()
            .map(|width| config.is_compact_width(width))
            .unwrap_or(false)
    });

    let subscription = use_hook(move || {
        let query = config.compact_media_query();
        let listener = viewport::on_media_change(&query, move || {
            if let Ok(width) = viewport::viewport_width() {
                compact.set(config.is_compact_width(width));
            }
        });
        let listener = match listener {
            Ok(listener) => Some(listener),
            Err(e) => {
                tracing::warn!("viewport classifier unavailable, using wide layout: {}", e);
                None
            }
        };
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        drop(subscription.borrow_mut().take());
    });

    compact.into()
}
