//! Browser bindings for scroll and viewport-width observation.
//!
//! Outside a browser (native builds, tests) every probe reports
//! [`NavError::WindowUnavailable`] and callers keep their default state.

use crate::error::{NavError, NavResult};

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{EventTarget, MediaQueryList, Window};

    use super::{NavError, NavResult};

    /// A DOM event listener that is removed when dropped.
    pub struct Listener {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    }

    impl Listener {
        pub fn attach(
            target: EventTarget,
            event: &'static str,
            handler: impl FnMut() + 'static,
        ) -> NavResult<Self> {
            let callback = Closure::<dyn FnMut()>::new(handler);
            target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref::<js_sys::Function>())
                .map_err(|e| NavError::Listener { event, reason: format!("{:?}", e) })?;
            tracing::debug!(event, "listener attached");
            Ok(Self { target, event, callback })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            let removed = self.target.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
            );
            match removed {
                Ok(()) => tracing::debug!(event = self.event, "listener removed"),
                Err(e) => tracing::warn!(event = self.event, "failed to remove listener: {:?}", e),
            }
        }
    }

    pub fn window() -> NavResult<Window> {
        web_sys::window().ok_or(NavError::WindowUnavailable)
    }

    pub fn scroll_offset() -> NavResult<f64> {
        window()?.scroll_y().map_err(|_| NavError::WindowUnavailable)
    }

    pub fn viewport_width() -> NavResult<f64> {
        window()?
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .ok_or(NavError::WindowUnavailable)
    }

    pub fn on_scroll(mut handler: impl FnMut(f64) + 'static) -> NavResult<Listener> {
        let target: EventTarget = window()?.into();
        Listener::attach(target, "scroll", move || {
            if let Ok(offset) = scroll_offset() {
                handler(offset);
            }
        })
    }

    pub fn on_media_change(query: &str, mut handler: impl FnMut() + 'static) -> NavResult<Listener> {
        let list: MediaQueryList = window()?
            .match_media(query)
            .map_err(|e| NavError::MediaQuery { query: query.to_string(), reason: format!("{:?}", e) })?
            .ok_or_else(|| NavError::MediaQuery {
                query: query.to_string(),
                reason: "not supported".to_string(),
            })?;
        Listener::attach(list.into(), "change", move || handler())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::{NavError, NavResult};

    /// Placeholder guard; nothing can be attached without a browser.
    #[allow(dead_code)]
    pub struct Listener {
        _event: &'static str,
    }

    pub fn scroll_offset() -> NavResult<f64> {
        Err(NavError::WindowUnavailable)
    }

    pub fn viewport_width() -> NavResult<f64> {
        Err(NavError::WindowUnavailable)
    }

    pub fn on_scroll(_handler: impl FnMut(f64) + 'static) -> NavResult<Listener> {
        Err(NavError::WindowUnavailable)
    }

    pub fn on_media_change(_query: &str, _handler: impl FnMut() + 'static) -> NavResult<Listener> {
        Err(NavError::WindowUnavailable)
    }
}

pub use browser::{on_media_change, on_scroll, scroll_offset, viewport_width, Listener};
