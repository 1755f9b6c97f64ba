//! Decorative loading indicator.

use leptos::prelude::*;

/// An EKG trace that sweeps across and pulses, looping every 2.5s until the
/// component unmounts.
///
/// Purely presentational: no inputs, no state, no pause/resume API. The
/// animation itself lives in CSS (`ekg-line` / `ekg-heartbeat` keyframes);
/// screen readers get a busy/loading role instead of the graphic.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-label="Loading">
            <svg
                width="200"
                height="100"
                viewBox="0 0 200 100"
                xmlns="http://www.w3.org/2000/svg"
            >
                <path
                    class="ekg-line"
                    fill="none"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M0 50 H 80 L 90 30 L 100 70 L 110 50 H 200"
                />
                <path
                    class="ekg-heartbeat"
                    fill="none"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M80 50 L 90 30 L 100 70 L 110 50"
                />
            </svg>
            <p class="loading-indicator-caption">"Analyzing Vitals..."</p>
        </div>
    }
}
