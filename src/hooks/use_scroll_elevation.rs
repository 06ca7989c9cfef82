use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::is_elevated;
use crate::viewport;

/// Tracks whether the window is scrolled past `threshold` pixels.
///
/// The signal is only written when the flag flips, so scrolling within either
/// side of the threshold does not re-render. The listener lives for as long as
/// the calling component and is removed in `use_drop`.
pub fn use_scroll_elevation(threshold: f64) -> ReadOnlySignal<bool> {
    let mut elevated = use_signal(|| false);

    let subscription = use_hook(move || {
        let listener = viewport::on_scroll(move |offset| {
            let next = is_elevated(offset, threshold);
            if *elevated.peek() != next {
                elevated.set(next);
            }
        });
        let listener = match listener {
            Ok(listener) => Some(listener),
            Err(e) => {
                tracing::warn!("scroll tracking unavailable, bar stays unelevated: {}", e);
                None
            }
        };
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        drop(subscription.borrow_mut().take());
    });

    elevated.into()
}
