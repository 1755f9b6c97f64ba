//! Scroll-position tracking for the sticky header.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Offset in CSS pixels past which the header switches to its solid theme.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Pure threshold rule: strictly greater than [`SCROLL_THRESHOLD_PX`]
/// counts as scrolled. No hysteresis, no debounce.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Subscribes to the window scroll position and re-derives the scrolled
/// flag on every scroll tick. The listener is removed on unmount.
pub fn use_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Seed from wherever the browser restored the page to, so the
        // header theme is right even if listener registration fails below.
        if let Ok(offset) = window.scroll_y() {
            set_scrolled.set(is_scrolled(offset));
        }

        let callback = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    set_scrolled.set(is_scrolled(offset));
                }
            }
        }) as Box<dyn Fn()>);

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            return;
        }

        let callback = send_wrapper::SendWrapper::new(callback);
        on_cleanup(move || {
            let callback = callback.take();
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    });

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exclusive() {
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.1));
        assert!(is_scrolled(11.0));
    }

    #[test]
    fn rest_position_is_not_scrolled() {
        assert!(!is_scrolled(0.0));
    }

    #[test]
    fn restored_mid_page_offset_counts_as_scrolled() {
        // The seed path derives from the same rule as the listener.
        assert!(is_scrolled(480.0));
    }
}
