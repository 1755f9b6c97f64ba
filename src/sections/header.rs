use crate::components::icons::NovoPathLogo;
use crate::routes;
use crate::scroll::use_scrolled;
use leptos::prelude::*;

/// Fixed page header. Transparent while the page is at the top so it
/// overlays the hero; solid with a shadow once the page scrolls.
#[component]
pub fn Header() -> impl IntoView {
    let scrolled = use_scrolled();

    view! {
        <header class=move || {
            if scrolled.get() { "header scrolled" } else { "header" }
        }>
            <div class="container header-inner">
                <a href=routes::HOME class="header-brand">
                    <NovoPathLogo />
                    <span class="header-title">"NovoPath"</span>
                </a>
                <nav class="header-links">
                    <a href=routes::LOGIN class="header-link">"Sign In"</a>
                    <a href=routes::REGISTER class="header-cta">"Sign Up"</a>
                </nav>
            </div>
        </header>
    }
}
