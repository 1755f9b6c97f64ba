//! Wrapper that fades content in the first time it scrolls into view.

use crate::reveal::{use_reveal, SECTION_THRESHOLD};
use leptos::html::Div;
use leptos::prelude::*;

/// Wraps arbitrary content and reveals it once, the first time at least
/// `threshold` of it enters the viewport.
///
/// The transition is purely cosmetic: content is in the DOM from the start
/// and nothing is blocked while it is hidden. Pass
/// [`crate::reveal::stagger_delay_ms`] as `delay_ms` when rendering sibling
/// cards to get a cascading reveal.
#[component]
pub fn AnimatedSection(
    /// Minimum visible fraction before the content reveals.
    #[prop(default = SECTION_THRESHOLD)]
    threshold: f64,
    /// Extra transition delay in milliseconds.
    #[prop(default = 0)]
    delay_ms: u32,
    /// Additional classes on the wrapper element.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let state = use_reveal(target, threshold);

    let classes = move || {
        let base = if state.get().is_revealed() {
            "reveal revealed"
        } else {
            "reveal"
        };
        if class.is_empty() {
            base.to_string()
        } else {
            format!("{base} {class}")
        }
    };
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div node_ref=target class=classes style=style>
            {children()}
        </div>
    }
}
