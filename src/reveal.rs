//! One-shot "reveal on scroll" latch.
//!
//! Every animated section owns its own latch; there is no shared reveal
//! state. The decision logic lives in [`RevealState::advance`] so it can be
//! tested without a browser, and [`use_reveal`] is only the thin
//! `IntersectionObserver` wiring around it.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Minimum visible fraction for plain content sections.
pub const SECTION_THRESHOLD: f64 = 0.1;
/// Minimum visible fraction for feature and testimonial cards.
pub const CARD_THRESHOLD: f64 = 0.2;
/// Per-index entrance delay applied to sibling cards.
pub const STAGGER_STEP_MS: u32 = 100;

/// Visibility state of a tracked region. `Revealed` is terminal: once a
/// region has been seen, no later observation can hide it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet scrolled into view.
    #[default]
    Pending,
    /// Seen at least once; the entrance transition has run.
    Revealed,
}

impl RevealState {
    /// Whether the latch has fired.
    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Transition on a single observation event. Latches when the
    /// intersection ratio reaches the threshold and absorbs every event
    /// after that, including the region leaving the viewport entirely.
    #[must_use]
    pub fn advance(self, ratio: f64, threshold: f64) -> RevealState {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Pending if ratio >= threshold => RevealState::Revealed,
            RevealState::Pending => RevealState::Pending,
        }
    }
}

/// Entrance delay for the `index`-th card in a sibling list. A derived
/// value keyed by list position, not per-card state.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Observes `target` and returns a signal that latches to `Revealed` the
/// first time at least `threshold` of the region is inside the viewport.
///
/// The observer disconnects itself as soon as the latch fires; unmounting
/// earlier disconnects it through `on_cleanup`, so no callback can reach
/// unmounted state. If the observer cannot be constructed the latch fails
/// open to `Revealed` rather than leaving content permanently hidden.
pub fn use_reveal(target: NodeRef<Div>, threshold: f64) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::default());

    Effect::new(move || {
        if state.get_untracked().is_revealed() {
            return;
        }
        let Some(el) = target.get() else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                // Entries queued before teardown may still be delivered;
                // a disposed signal must not panic here.
                let Some(current) = state.try_get_untracked() else {
                    observer.disconnect();
                    return;
                };
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let next = current.advance(entry.intersection_ratio(), threshold);
                    if next.is_revealed() {
                        let _ = set_state.try_set(next);
                        observer.disconnect();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            Ok(observer) => {
                observer.observe(&el);
                // The cleanup closure owns both the observer and the JS
                // callback, so neither outlives the component.
                let cleanup = send_wrapper::SendWrapper::new((observer, callback));
                on_cleanup(move || {
                    let (observer, callback) = cleanup.take();
                    observer.disconnect();
                    drop(callback);
                });
            }
            // No observer support: never leave content hidden.
            Err(_) => set_state.set(RevealState::Revealed),
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_pending() {
        assert_eq!(RevealState::default(), RevealState::Pending);
    }

    #[test]
    fn latches_exactly_at_threshold() {
        let state = RevealState::Pending.advance(SECTION_THRESHOLD, SECTION_THRESHOLD);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn stays_pending_below_threshold() {
        let state = RevealState::Pending.advance(0.05, SECTION_THRESHOLD);
        assert_eq!(state, RevealState::Pending);
    }

    #[test]
    fn card_threshold_is_stricter() {
        assert_eq!(
            RevealState::Pending.advance(0.15, CARD_THRESHOLD),
            RevealState::Pending
        );
        assert_eq!(
            RevealState::Pending.advance(0.2, CARD_THRESHOLD),
            RevealState::Revealed
        );
    }

    #[test]
    fn never_reverts_once_revealed() {
        let mut state = RevealState::Pending.advance(1.0, CARD_THRESHOLD);
        assert_eq!(state, RevealState::Revealed);
        for ratio in [0.0, 0.05, 0.19, 1.0] {
            state = state.advance(ratio, CARD_THRESHOLD);
            assert_eq!(state, RevealState::Revealed);
        }
    }

    #[test]
    fn stagger_grows_linearly_with_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(3), 300);
    }
}
